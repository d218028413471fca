//! Level report: what a level file holds and which of its cells break
//! the placement rules.
//!
//! Levels written by hand or by older tools can contain placements the
//! editor would refuse. Each occupied cell is re-checked as if it were
//! being placed last: the cell is cleared and its element validated
//! against the rest of the grid.

use lf_core::{
    Cell, ElementCatalog, ElementId, GridModel, LevelData, LevelError, PlacementValidator,
    Rejection, Tool,
};
use std::fmt;

/// A stored element the editor would not let you place there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub cell: Cell,
    pub id: ElementId,
    pub rejection: Rejection,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}: {}",
            self.cell.row, self.cell.col, self.id, self.rejection
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelReport {
    pub rows: usize,
    pub cols: usize,
    /// Non-zero values with no catalog entry. They load as empty cells.
    pub unknown: Vec<(Cell, i64)>,
    /// Element name and count, in catalog order. Absent elements are omitted.
    pub counts: Vec<(&'static str, usize)>,
    pub conflicts: Vec<Conflict>,
    pub grid: GridModel,
}

impl LevelReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.conflicts.is_empty()
    }
}

/// Build the report for one level. `expected` pins the dimensions.
pub fn check_level(
    level: &LevelData,
    catalog: &ElementCatalog,
    expected: Option<(usize, usize)>,
) -> Result<LevelReport, LevelError> {
    let (rows, cols) = match expected {
        Some((rows, cols)) => {
            level.expect_dimensions(rows, cols)?;
            (rows, cols)
        }
        None => level.dimensions()?,
    };
    let grid = GridModel::from_level(level, catalog)?;

    let unknown = level
        .rows
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &value)| (Cell::new(r, c), value))
        })
        .filter(|&(cell, value)| {
            value != 0 && grid.get(cell.row, cell.col) == Ok(ElementId::EMPTY)
        })
        .collect();

    let counts = catalog
        .iter()
        .map(|d| (d.name, grid.count_of(d.id)))
        .filter(|&(_, n)| n > 0)
        .collect();

    let conflicts = find_conflicts(&grid, catalog);

    Ok(LevelReport {
        rows,
        cols,
        unknown,
        counts,
        conflicts,
        grid,
    })
}

/// Every occupied cell whose element fails validation with that cell cleared.
pub fn find_conflicts(grid: &GridModel, catalog: &ElementCatalog) -> Vec<Conflict> {
    let validator = PlacementValidator::new(catalog);
    grid.occupied()
        .filter_map(|(cell, id)| {
            let mut without = grid.clone();
            without.set(cell.row, cell.col, ElementId::EMPTY).ok()?;
            validator
                .check(&without, cell.row, cell.col, Some(Tool::Place(id)))
                .err()
                .map(|rejection| Conflict {
                    cell,
                    id,
                    rejection,
                })
        })
        .collect()
}
