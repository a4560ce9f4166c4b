use image::RgbaImage;
use image::imageops;
use tracing::{debug, instrument};
use crate::image_pipeline::common::error::{Result, SheetError};
use crate::image_pipeline::frames::Frame;
use crate::image_pipeline::sheet::layout::SheetLayout;

/// Composites `frames` onto a fresh transparent canvas following `layout`.
///
/// Tiles overwrite the canvas pixels, alpha included; nothing is blended.
/// Every frame must already be exactly the layout's tile size. Frames are
/// consumed and dropped as soon as they have been copied.
#[instrument(skip_all, fields(frames = frames.len()))]
pub fn pack_frames(frames: Vec<Frame>, layout: &SheetLayout) -> Result<RgbaImage> {
    if frames.len() != layout.frame_count() as usize {
        return Err(SheetError::InvalidLayout(format!(
            "layout expects {} frames, got {}",
            layout.frame_count(),
            frames.len()
        )));
    }

    let (tile_width, tile_height) = layout.tile_size();
    if let Some(frame) = frames
        .iter()
        .find(|f| f.width() != tile_width || f.height() != tile_height)
    {
        return Err(SheetError::InvalidDimensions(frame.width(), frame.height()));
    }

    let (width, height) = layout.canvas_size();
    let mut canvas = RgbaImage::new(width, height);

    for (cell, frame) in layout.cells().zip(frames) {
        debug!("Placing {} at ({}, {})", frame.name, cell.x, cell.y);
        imageops::replace(&mut canvas, &frame.image, i64::from(cell.x), i64::from(cell.y));
    }

    Ok(canvas)
}
