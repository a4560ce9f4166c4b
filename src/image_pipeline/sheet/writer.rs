use std::io::Write;
use image::RgbaImage;
use crate::image_pipeline::common::error::Result;

pub trait SheetWriter {
    fn write_sheet(&self, sheet: &RgbaImage, output: &mut dyn Write) -> Result<()>;
}
