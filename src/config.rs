//! Fixed run configuration for the sprite sheet build.
//!
//! The binary takes no flags; edit these values to point it at another
//! animation.

/// Directory holding the source animation frames.
pub const SOURCE_DIR: &str = "assets/enemy_born/frames";

/// Directory the sheet is written to.
pub const OUTPUT_DIR: &str = "assets";

/// Width of one tile in the sheet, in pixels.
pub const TILE_WIDTH: u32 = 87;

/// Height of one tile in the sheet, in pixels.
pub const TILE_HEIGHT: u32 = 87;

pub const SHEET_FILE_NAME: &str = "enemy_born_sheet.png";

/// Tiles per sheet row.
pub const COLUMNS: u32 = 4;

/// Only directory entries whose name ends with this suffix are treated as frames.
pub const FRAME_EXTENSION: &str = ".png";
