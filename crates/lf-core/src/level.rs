//! Externally supplied level data: a rectangular matrix of integer ids.
//!
//! Decoding is lenient about ids (anything the catalog does not know becomes
//! empty) and strict about shape (empty or ragged data is a hard failure).

use crate::catalog::{ElementCatalog, ElementId};
use crate::error::LevelError;
use crate::grid::GridModel;
use serde::{Deserialize, Serialize};

/// Raw level contents, one inner vector per row. JSON form: `[[0, 2, 0], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelData {
    pub rows: Vec<Vec<i64>>,
}

impl LevelData {
    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> String {
        // A matrix of integers always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// `(rows, cols)` after checking the matrix is non-empty and rectangular.
    pub fn dimensions(&self) -> Result<(usize, usize), LevelError> {
        let rows = self.rows.len();
        let cols = self.rows.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(LevelError::Empty);
        }
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(LevelError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }
        Ok((rows, cols))
    }

    /// Like [`dimensions`](Self::dimensions), also requiring a specific size.
    pub fn expect_dimensions(&self, rows: usize, cols: usize) -> Result<(), LevelError> {
        let (found_rows, found_cols) = self.dimensions()?;
        if (found_rows, found_cols) != (rows, cols) {
            return Err(LevelError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: found_rows,
                cols: found_cols,
            });
        }
        Ok(())
    }
}

impl GridModel {
    /// Build a grid from level data. Ids outside the catalog load as empty.
    pub fn from_level(level: &LevelData, catalog: &ElementCatalog) -> Result<Self, LevelError> {
        let (rows, cols) = level.dimensions()?;
        let mut dropped = 0usize;
        let mut cells = Vec::with_capacity(rows * cols);

        for (r, row) in level.rows.iter().enumerate() {
            for (c, &raw) in row.iter().enumerate() {
                let id = u16::try_from(raw)
                    .ok()
                    .map(ElementId)
                    .filter(|id| id.is_empty() || catalog.contains(*id));
                if id.is_none() {
                    log::warn!("level cell ({r}, {c}) holds unknown id {raw}; loading as empty");
                    dropped += 1;
                }
                cells.push(id.unwrap_or(ElementId::EMPTY));
            }
        }

        let grid = GridModel::from_cells(rows, cols, cells);

        log::info!(
            "loaded {rows}x{cols} level: {} elements, {dropped} unknown ids dropped",
            grid.occupied().count()
        );
        Ok(grid)
    }

    /// Snapshot the grid in level-data form.
    pub fn to_level(&self) -> LevelData {
        let rows = (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .map(|c| self.at(r as isize, c as isize).map_or(0, |id| id.0 as i64))
                    .collect()
            })
            .collect();
        LevelData { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_known_ids_and_drops_unknown() {
        let level = LevelData::from_json("[[0, 2, 9], [-3, 6, 0]]").unwrap();
        let grid = GridModel::from_level(&level, &ElementCatalog::standard()).unwrap();
        assert_eq!(grid.get(0, 1), Ok(ElementId::STAR));
        assert_eq!(grid.get(0, 2), Ok(ElementId::EMPTY));
        assert_eq!(grid.get(1, 0), Ok(ElementId::EMPTY));
        assert_eq!(grid.get(1, 1), Ok(ElementId::MOVING_PLATFORM));
        assert_eq!(grid.occupied().count(), 2);
    }

    #[test]
    fn snapshot_matches_sanitized_input() {
        let level = LevelData::from_json("[[1, 0], [70000, 5]]").unwrap();
        let grid = GridModel::from_level(&level, &ElementCatalog::standard()).unwrap();
        assert_eq!(grid.to_level().rows, vec![vec![1, 0], vec![0, 5]]);
        assert_eq!(grid.to_level().to_json(), "[[1,0],[0,5]]");
    }

    #[test]
    fn empty_level_is_rejected() {
        assert!(matches!(
            LevelData::from_json("[]").unwrap().dimensions(),
            Err(LevelError::Empty)
        ));
        assert!(matches!(
            LevelData::from_json("[[], []]").unwrap().dimensions(),
            Err(LevelError::Empty)
        ));
    }

    #[test]
    fn ragged_level_is_rejected() {
        let level = LevelData::from_json("[[0, 0, 0], [0, 0]]").unwrap();
        match GridModel::from_level(&level, &ElementCatalog::standard()) {
            Err(LevelError::Ragged {
                row,
                expected,
                found,
            }) => assert_eq!((row, expected, found), (1, 3, 2)),
            other => panic!("expected Ragged, got {other:?}"),
        }
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let level = LevelData::from_json("[[0, 0], [0, 0]]").unwrap();
        assert!(level.expect_dimensions(2, 2).is_ok());
        assert!(matches!(
            level.expect_dimensions(13, 24),
            Err(LevelError::DimensionMismatch { rows: 2, cols: 2, .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            LevelData::from_json("[[0, \"x\"]]"),
            Err(LevelError::Json(_))
        ));
    }
}
