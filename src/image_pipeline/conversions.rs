//! Pipeline conversions module
//!
//! This module contains orchestration logic for building sprite sheets.

mod frames_to_sheet;


pub use frames_to_sheet::FramesToSheetPipeline;
