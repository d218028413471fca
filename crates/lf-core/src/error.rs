//! Error types for grid access, level loading, and configuration.
//!
//! Expected interaction outcomes (pointer outside the grid, a rejected
//! placement) are not errors and never appear here. These types cover
//! programmer mistakes and corrupt input caught before a session starts.

use thiserror::Error;

/// Grid access outside `[0, rows) × [0, cols)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Hard failures while loading externally supplied level data.
#[derive(Error, Debug)]
pub enum LevelError {
    /// The level has zero rows or zero columns.
    #[error("level data has no cells")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The level does not match the session's configured dimensions.
    #[error("level is {rows}x{cols}, session expects {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid level JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected session configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("cell size must be a finite positive number, got {0}")]
    InvalidCellSize(f64),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
