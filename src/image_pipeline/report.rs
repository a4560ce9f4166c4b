//! Layout metadata reporting
//!
//! The console text written here is what a person wiring up a texture atlas
//! reads, so its wording and field order are kept stable.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::image_pipeline::sheet::SheetLayout;

/// Facts about a packed sheet that an atlas consumer needs to locate tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetadata {
    pub frame_count: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub sheet_width: u32,
    pub sheet_height: u32,
}

impl From<&SheetLayout> for LayoutMetadata {
    fn from(layout: &SheetLayout) -> Self {
        let (tile_width, tile_height) = layout.tile_size();
        let (sheet_width, sheet_height) = layout.canvas_size();
        Self {
            frame_count: layout.frame_count(),
            tile_width,
            tile_height,
            columns: layout.columns(),
            rows: layout.rows(),
            sheet_width,
            sheet_height,
        }
    }
}

impl fmt::Display for LayoutMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sprite sheet layout (texture atlas):")?;
        writeln!(f, "  Texture size: {} x {}", self.sheet_width, self.sheet_height)?;
        writeln!(f, "  Tile size: {} x {}", self.tile_width, self.tile_height)?;
        writeln!(f, "  Frame count: {}", self.frame_count)?;
        writeln!(f, "  Columns: {}", self.columns)?;
        writeln!(f, "  Rows: {}", self.rows)?;
        write!(
            f,
            "  Atlas grid: TextureAtlasLayout::from_grid(UVec2::new({}, {}), {}, {}, None, None)",
            self.tile_width, self.tile_height, self.columns, self.rows
        )
    }
}

/// Writes the save confirmation followed by the layout block.
pub fn write_sheet_report(
    metadata: &LayoutMetadata,
    output_path: &Path,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Sprite sheet saved to: {}", output_path.display())?;
    writeln!(out, "Sheet size: {} x {}", metadata.sheet_width, metadata.sheet_height)?;
    writeln!(out, "Layout: {} rows x {} columns", metadata.rows, metadata.columns)?;
    writeln!(out)?;
    writeln!(out, "{}", metadata)
}
