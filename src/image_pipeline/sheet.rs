//! Sprite sheet module
//!
//! Grid layout math, compositing of tiles onto the sheet canvas, and sheet
//! encoding.

mod writer;
mod png_sheet_writer;
mod packer;
pub mod layout;
pub mod types;

pub use writer::SheetWriter;
pub use png_sheet_writer::PngSheetWriter;
pub use packer::pack_frames;
pub use layout::{CellRect, SheetLayout};
pub use types::{SheetConfig, SheetConfigBuilder};
