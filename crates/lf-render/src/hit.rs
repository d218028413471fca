//! Hit mapping: pointer position → grid cell.
//!
//! A pointer outside the grid is an ordinary, frequent outcome and maps to
//! `None`, never to an error.

use kurbo::{Point, Rect};
use lf_core::{Cell, EditorConfig};

/// Map a pixel position to the cell under it.
///
/// The pixel is made relative to the grid origin and floor-divided by the
/// cell size. Returns `None` when the result lies outside
/// `[0, rows) × [0, cols)` or any input is not finite.
pub fn to_cell(
    px: f64,
    py: f64,
    origin_x: f64,
    origin_y: f64,
    cell_size: f64,
    rows: usize,
    cols: usize,
) -> Option<Cell> {
    if cell_size <= 0.0 {
        return None;
    }
    let col = ((px - origin_x) / cell_size).floor();
    let row = ((py - origin_y) / cell_size).floor();
    if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
        return None;
    }
    let (row, col) = (row as usize, col as usize);
    (row < rows && col < cols).then_some(Cell::new(row, col))
}

/// A grid placed on the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    pub origin: Point,
    pub cell_size: f64,
    pub rows: usize,
    pub cols: usize,
}

impl PointerMapper {
    /// Grid anchored at the surface's top-left corner.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            origin: Point::ZERO,
            cell_size: config.cell_size,
            rows: config.rows,
            cols: config.cols,
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn map(&self, px: f64, py: f64) -> Option<Cell> {
        to_cell(
            px,
            py,
            self.origin.x,
            self.origin.y,
            self.cell_size,
            self.rows,
            self.cols,
        )
    }

    /// Surface rectangle covered by a cell.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        cell_rect(cell, self.cell_size) + self.origin.to_vec2()
    }
}

/// Grid-relative rectangle covered by a cell.
pub fn cell_rect(cell: Cell, cell_size: f64) -> Rect {
    let x = cell.col as f64 * cell_size;
    let y = cell.row as f64 * cell_size;
    Rect::new(x, y, x + cell_size, y + cell_size)
}
