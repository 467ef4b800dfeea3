// src/render/geometry.rs

//! Grid → pixel mapping for an external renderer.

use serde::Serialize;

use crate::config::LayoutSection;
use crate::layout::normalize_columns;
use crate::types::GridPos;

/// Space below the last row for the box and its label.
pub const BOTTOM_PADDING: u32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

/// Canvas metrics. `width` is already clamped to the minimum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub column_width: u32,
    pub row_height: u32,
    pub top_offset: u32,
    pub viewport_height: u32,
}

impl Geometry {
    /// Geometry from `[layout]`, with an optional display width override.
    pub fn from_section(section: &LayoutSection, width: Option<u32>) -> Self {
        let width = width.unwrap_or(section.width).max(section.min_width);
        Self {
            width,
            column_width: section.column_width.max(1),
            row_height: section.row_height,
            top_offset: section.top_offset,
            viewport_height: section.viewport_height,
        }
    }

    /// One column less than fits the width, forced odd.
    pub fn derived_columns(&self) -> usize {
        let fit = (self.width / self.column_width.max(1)) as usize;
        normalize_columns(fit.saturating_sub(1))
    }

    /// Pixel centre of a cell; the grid is centred horizontally on the canvas.
    pub fn cell_center(&self, pos: GridPos, columns: usize) -> PixelPos {
        let col_w = f64::from(self.column_width);
        let grid_w = col_w * columns as f64;
        let left = (f64::from(self.width) - grid_w) / 2.0;
        PixelPos {
            x: left + (f64::from(pos.x) + 0.5) * col_w,
            y: f64::from(self.top_offset) + f64::from(self.row_height) * f64::from(pos.y),
        }
    }

    /// Canvas height for a layout whose deepest row is `max_row`.
    pub fn canvas_height(&self, max_row: u32) -> u32 {
        let needed = max_row
            .saturating_mul(self.row_height)
            .saturating_add(self.top_offset.saturating_add(BOTTOM_PADDING));
        needed.max(self.viewport_height)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::from_section(&LayoutSection::default(), None)
    }
}
