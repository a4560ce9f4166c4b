use image::RgbaImage;
use crate::image_pipeline::common::error::Result;

pub trait FrameResizer {
    fn resize(&self, frame: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage>;
}
