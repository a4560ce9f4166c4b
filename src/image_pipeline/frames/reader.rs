use image::RgbaImage;
use crate::image_pipeline::common::error::Result;

pub trait FrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<RgbaImage>;
}
