//! Frame loading module
//!
//! Enumerates the animation frames of a flat directory in file name order and
//! decodes them into RGBA rasters.

mod reader;
mod png_frame_reader;
mod source;
pub mod types;

pub use reader::FrameReader;
pub use png_frame_reader::PngFrameReader;
pub use source::list_frame_files;
pub use types::Frame;
