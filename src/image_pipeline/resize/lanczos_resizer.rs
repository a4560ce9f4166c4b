use image::{Rgba, Rgba32FImage, RgbaImage};
use image::imageops::{self, FilterType};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, SheetError};
use crate::image_pipeline::resize::resizer::FrameResizer;

/// Resizes frames with a Lanczos3 filter.
///
/// The frame is stretched to exactly `width x height`; aspect ratio is not
/// preserved and nothing is cropped or padded. Resampling runs on
/// premultiplied alpha so fully transparent pixels do not bleed their color
/// into semi-transparent edges.
pub struct LanczosResizer;

impl FrameResizer for LanczosResizer {
    fn resize(&self, frame: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
        if width == 0 || height == 0 {
            return Err(SheetError::InvalidDimensions(width, height));
        }

        debug!(
            "Resizing frame {}x{} -> {}x{}",
            frame.width(),
            frame.height(),
            width,
            height
        );

        if frame.dimensions() == (width, height) {
            return Ok(frame.clone());
        }

        let premultiplied = premultiply(frame);
        let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);
        Ok(unpremultiply(&resized))
    }
}

fn premultiply(frame: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(frame.width(), frame.height(), |x, y| {
        let [r, g, b, a] = frame.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(image: &Rgba32FImage) -> RgbaImage {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}
