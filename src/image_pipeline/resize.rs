//! Frame resizing module
//!
//! Scales decoded frames to the fixed tile size of the sheet.

mod resizer;
mod lanczos_resizer;

pub use resizer::FrameResizer;
pub use lanczos_resizer::LanczosResizer;
