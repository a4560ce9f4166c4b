use std::io::{Cursor, Write};
use image::{ImageFormat, RgbaImage};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, SheetError};
use crate::image_pipeline::sheet::writer::SheetWriter;

pub struct PngSheetWriter;

impl SheetWriter for PngSheetWriter {
    fn write_sheet(&self, sheet: &RgbaImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG sheet: {}x{}", sheet.width(), sheet.height());

        let mut buffer = Vec::new();
        sheet
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|e| SheetError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_written_png_keeps_alpha() {
        let mut sheet = RgbaImage::new(4, 2);
        sheet.put_pixel(1, 0, Rgba([1, 2, 3, 4]));
        let mut output = Vec::new();

        PngSheetWriter.write_sheet(&sheet, &mut output).unwrap();

        let decoded = image::load_from_memory_with_format(&output, ImageFormat::Png)
            .unwrap()
            .into_rgba8();
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.get_pixel(1, 0), &Rgba([1, 2, 3, 4]));
        assert_eq!(decoded.get_pixel(3, 1), &Rgba([0, 0, 0, 0]));
    }
}
