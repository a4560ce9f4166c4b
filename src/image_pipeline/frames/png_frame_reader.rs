//! PNG frame decoding backed by the `image` crate.

use image::{ImageFormat, RgbaImage};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, SheetError};
use crate::image_pipeline::frames::reader::FrameReader;

/// Decodes PNG bytes into an 8-bit RGBA raster.
///
/// Any PNG color type is accepted; grayscale, palette and RGB inputs gain an
/// opaque alpha channel.
pub struct PngFrameReader;

impl FrameReader for PngFrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding PNG frame, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Png)
            .map_err(|e| SheetError::DecodeError(e.to_string()))?;

        let rgba = decoded.into_rgba8();
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(SheetError::InvalidDimensions(rgba.width(), rgba.height()));
        }

        debug!("Decoded frame: {}x{}", rgba.width(), rgba.height());
        Ok(rgba)
    }
}
