//! Frame types

use image::RgbaImage;

/// One decoded animation step.
#[derive(Debug, Clone)]
pub struct Frame {
    /// File name the frame was decoded from
    pub name: String,
    /// RGBA pixel data
    pub image: RgbaImage,
}

impl Frame {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
