//! The level grid: a fixed `rows × cols` array of element ids.
//!
//! GridModel enforces bounds and nothing else. Placement rules live in
//! [`crate::placement`]; callers validate before they `set`.

use crate::catalog::ElementId;
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An in-bounds grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Signed form, for neighbor arithmetic that may leave the grid.
    pub fn signed(self) -> (isize, isize) {
        (self.row as isize, self.col as isize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    /// Row-major.
    cells: Vec<ElementId>,
    /// Instances per non-empty id, kept in step with `cells`.
    counts: BTreeMap<ElementId, usize>,
}

impl GridModel {
    /// An all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![ElementId::EMPTY; rows * cols],
            counts: BTreeMap::new(),
        }
    }

    /// Take ownership of row-major cells; `cells.len()` must be `rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<ElementId>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        let mut counts = BTreeMap::new();
        for id in cells.iter().filter(|id| !id.is_empty()) {
            *counts.entry(*id).or_insert(0) += 1;
        }
        Self {
            rows,
            cols,
            cells,
            counts,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<ElementId, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite a cell, returning the id it held before.
    pub fn set(&mut self, row: usize, col: usize, id: ElementId) -> Result<ElementId, GridError> {
        let idx = self.index(row, col)?;
        let previous = std::mem::replace(&mut self.cells[idx], id);
        if previous != id {
            self.uncount(previous);
            if !id.is_empty() {
                *self.counts.entry(id).or_insert(0) += 1;
            }
        }
        Ok(previous)
    }

    /// Lookup by signed coordinates; `None` outside the grid.
    pub fn at(&self, row: isize, col: isize) -> Option<ElementId> {
        if self.in_bounds(row, col) {
            Some(self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    /// Number of cells currently holding `id`.
    pub fn count_of(&self, id: ElementId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    pub fn star_count(&self) -> usize {
        self.count_of(ElementId::STAR)
    }

    /// Non-empty cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, ElementId)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, id)| !id.is_empty())
            .map(move |(i, id)| (Cell::new(i / cols, i % cols), *id))
    }

    pub fn is_blank(&self) -> bool {
        self.counts.is_empty()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn uncount(&mut self, id: ElementId) {
        if id.is_empty() {
            return;
        }
        if let Some(n) = self.counts.get_mut(&id) {
            *n -= 1;
            if *n == 0 {
                self.counts.remove(&id);
            }
        }
    }
}
