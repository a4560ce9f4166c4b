use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("No PNG files found in {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode frame: {0}")]
    DecodeError(String),

    #[error("Failed to encode sprite sheet: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Invalid sheet layout: {0}")]
    InvalidLayout(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
