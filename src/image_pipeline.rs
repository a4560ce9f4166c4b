//! Image processing pipeline module
//!
//! This module turns a directory of animation frames into a single grid sprite
//! sheet, with separate modules for frame loading, resizing, sheet packing and
//! layout reporting.

pub mod frames;
pub mod resize;
pub mod sheet;
pub mod report;
pub mod conversions;
pub mod common;

pub use common::{
    SheetError,
    Result,
};

pub use frames::{
    Frame,
    FrameReader,
    PngFrameReader,
    list_frame_files,
};

pub use resize::{
    FrameResizer,
    LanczosResizer,
};

pub use sheet::{
    CellRect,
    SheetConfig,
    SheetConfigBuilder,
    SheetLayout,
    SheetWriter,
    PngSheetWriter,
    pack_frames,
};

pub use report::{
    LayoutMetadata,
    write_sheet_report,
};

pub use conversions::{
    FramesToSheetPipeline,
};
