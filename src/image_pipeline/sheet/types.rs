//! Sprite sheet configuration types

use std::path::PathBuf;

use crate::config;

/// Configuration for a frames to sprite sheet build
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Flat directory holding the source frames
    pub source_dir: PathBuf,
    /// Directory the sheet is written into; it must already exist
    pub output_dir: PathBuf,
    /// File name of the written sheet
    pub file_name: String,
    /// Suffix a directory entry's name must end with to count as a frame
    pub frame_extension: String,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Tiles per row
    pub columns: u32,
    /// Whether to reject zero tile sizes and column counts before reading input
    pub validate_dimensions: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(config::SOURCE_DIR),
            output_dir: PathBuf::from(config::OUTPUT_DIR),
            file_name: config::SHEET_FILE_NAME.to_string(),
            frame_extension: config::FRAME_EXTENSION.to_string(),
            tile_width: config::TILE_WIDTH,
            tile_height: config::TILE_HEIGHT,
            columns: config::COLUMNS,
            validate_dimensions: true,
        }
    }
}

impl SheetConfig {
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::default()
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

/// Builder for SheetConfig
#[derive(Default)]
pub struct SheetConfigBuilder {
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    file_name: Option<String>,
    frame_extension: Option<String>,
    tile_size: Option<(u32, u32)>,
    columns: Option<u32>,
    validate_dimensions: Option<bool>,
}

impl SheetConfigBuilder {
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn frame_extension(mut self, extension: impl Into<String>) -> Self {
        self.frame_extension = Some(extension.into());
        self
    }

    pub fn tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile_size = Some((width, height));
        self
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> SheetConfig {
        let default = SheetConfig::default();
        let (tile_width, tile_height) = self
            .tile_size
            .unwrap_or((default.tile_width, default.tile_height));
        SheetConfig {
            source_dir: self.source_dir.unwrap_or(default.source_dir),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            file_name: self.file_name.unwrap_or(default.file_name),
            frame_extension: self.frame_extension.unwrap_or(default.frame_extension),
            tile_width,
            tile_height,
            columns: self.columns.unwrap_or(default.columns),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
