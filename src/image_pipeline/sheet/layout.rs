//! Grid layout of a sprite sheet.
//!
//! Frame `i` of the sequence occupies cell `i`, filled row-major: its top-left
//! corner sits at `((i % columns) * tile_width, (i / columns) * tile_height)`.
//! Texture atlas consumers locate tiles with exactly this rule, so it must not
//! change.

use crate::image_pipeline::common::error::{Result, SheetError};

/// Placement of one populated cell on the sheet canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Position of the frame in the sequence
    pub index: u32,
    pub column: u32,
    pub row: u32,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Fixed-column grid for `frame_count` tiles of `tile_width x tile_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    frame_count: u32,
    columns: u32,
    tile_width: u32,
    tile_height: u32,
    rows: u32,
}

impl SheetLayout {
    /// Builds the layout, rejecting empty grids and canvases whose size does
    /// not fit in `u32`.
    pub fn new(frame_count: usize, columns: u32, tile_width: u32, tile_height: u32) -> Result<Self> {
        if columns == 0 {
            return Err(SheetError::InvalidLayout("column count must be non-zero".to_string()));
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(SheetError::InvalidDimensions(tile_width, tile_height));
        }

        let frame_count = u32::try_from(frame_count).map_err(|_| {
            SheetError::InvalidLayout(format!("too many frames: {}", frame_count))
        })?;
        if frame_count == 0 {
            return Err(SheetError::InvalidLayout("no frames to lay out".to_string()));
        }

        let rows = frame_count.div_ceil(columns);

        let width = columns.checked_mul(tile_width);
        let height = rows.checked_mul(tile_height);
        if width.is_none() || height.is_none() {
            return Err(SheetError::InvalidLayout(format!(
                "{} columns x {} rows of {}x{} tiles overflows the canvas",
                columns, rows, tile_width, tile_height
            )));
        }

        Ok(Self {
            frame_count,
            columns,
            tile_width,
            tile_height,
            rows,
        })
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// `ceil(frame_count / columns)`
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Canvas size in pixels, always a whole number of tiles in each direction.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.columns * self.tile_width, self.rows * self.tile_height)
    }

    /// Top-left pixel offset of cell `index`. Does not check that the cell is
    /// populated.
    pub fn cell_offset(&self, index: u32) -> (u32, u32) {
        (
            (index % self.columns) * self.tile_width,
            (index / self.columns) * self.tile_height,
        )
    }

    /// Rectangle of the frame at `index`, or `None` past the last frame.
    pub fn cell_rect(&self, index: u32) -> Option<CellRect> {
        if index >= self.frame_count {
            return None;
        }
        let (x, y) = self.cell_offset(index);
        Some(CellRect {
            index,
            column: index % self.columns,
            row: index / self.columns,
            x,
            y,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Populated cells in sequence order.
    pub fn cells(&self) -> impl Iterator<Item = CellRect> + '_ {
        (0..self.frame_count).filter_map(move |index| self.cell_rect(index))
    }

    /// Number of trailing cells in the last row that stay transparent.
    pub fn empty_cells(&self) -> u32 {
        (self.columns - self.frame_count % self.columns) % self.columns
    }
}
