//! Placement validation: may tool T land at `(row, col)`?
//!
//! A candidate element is checked cell by cell over its footprint. Every
//! covered cell must pass the shared occupancy predicate (inside the grid,
//! empty, no shared-rule exclusion) and the element's own cell rule. A
//! count-limited element is additionally checked against the grid total.
//!
//! Validation is a pure function of the catalog, grid, and tool; it keeps
//! no state between calls and is cheap enough to run on every pointer move.

use crate::catalog::{AdjacencyRule, ElementCatalog, ElementDescriptor, ElementId};
use crate::grid::GridModel;
use crate::tool::Tool;
use std::fmt;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoTool,
    UnknownElement(ElementId),
    /// A footprint cell falls outside the grid.
    OutOfBounds { row: isize, col: isize },
    /// A footprint cell already holds an element.
    Occupied { row: isize, col: isize, by: ElementId },
    /// A footprint cell is excluded by a neighbor rule.
    Excluded {
        row: isize,
        col: isize,
        rule: AdjacencyRule,
    },
    CountLimit { id: ElementId, limit: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTool => f.write_str("no tool selected"),
            Self::UnknownElement(id) => write!(f, "element {id} is not in the catalog"),
            Self::OutOfBounds { row, col } => write!(f, "cell ({row}, {col}) is off the grid"),
            Self::Occupied { row, col, by } => write!(f, "cell ({row}, {col}) holds {by}"),
            Self::Excluded { row, col, rule } => {
                write!(f, "cell ({row}, {col}) is excluded by {rule:?}")
            }
            Self::CountLimit { id, limit } => write!(f, "{id} is limited to {limit} per level"),
        }
    }
}

/// Placement rules bound to a catalog.
#[derive(Debug, Clone, Copy)]
pub struct PlacementValidator<'a> {
    catalog: &'a ElementCatalog,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(catalog: &'a ElementCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a ElementCatalog {
        self.catalog
    }

    /// `true` when `tool` may be applied at `(row, col)`.
    ///
    /// Removal is always legal; no tool is never legal.
    pub fn is_valid(&self, grid: &GridModel, row: usize, col: usize, tool: Option<Tool>) -> bool {
        self.check(grid, row, col, tool).is_ok()
    }

    /// Like [`is_valid`](Self::is_valid), reporting the first failed rule.
    pub fn check(
        &self,
        grid: &GridModel,
        row: usize,
        col: usize,
        tool: Option<Tool>,
    ) -> Result<(), Rejection> {
        let id = match tool.ok_or(Rejection::NoTool)? {
            Tool::Remove => return Ok(()),
            Tool::Place(id) => id,
        };
        let descriptor = self
            .catalog
            .describe(id)
            .ok_or(Rejection::UnknownElement(id))?;
        self.check_descriptor(grid, row as isize, col as isize, descriptor)
    }

    /// The shared occupancy predicate: off-grid, filled, or excluded by a
    /// rule every element obeys.
    pub fn is_occupied(&self, grid: &GridModel, row: isize, col: isize) -> bool {
        self.occupancy(grid, row, col).is_err()
    }

    fn check_descriptor(
        &self,
        grid: &GridModel,
        row: isize,
        col: isize,
        descriptor: &ElementDescriptor,
    ) -> Result<(), Rejection> {
        if let AdjacencyRule::CountLimit(limit) = descriptor.rule
            && grid.count_of(descriptor.id) >= limit
        {
            return Err(Rejection::CountLimit {
                id: descriptor.id,
                limit,
            });
        }

        for (r, c) in descriptor.cells_at(row, col) {
            self.occupancy(grid, r, c)?;
            if violates(grid, r, c, descriptor.rule) {
                return Err(Rejection::Excluded {
                    row: r,
                    col: c,
                    rule: descriptor.rule,
                });
            }
        }
        Ok(())
    }

    fn occupancy(&self, grid: &GridModel, row: isize, col: isize) -> Result<(), Rejection> {
        let held = grid.at(row, col).ok_or(Rejection::OutOfBounds { row, col })?;
        if !held.is_empty() {
            return Err(Rejection::Occupied { row, col, by: held });
        }
        for rule in self.catalog.shared_rules() {
            if violates(grid, row, col, *rule) {
                return Err(Rejection::Excluded {
                    row,
                    col,
                    rule: *rule,
                });
            }
        }
        Ok(())
    }
}

/// Does `(row, col)` see the rule's excluded id in any probed neighbor?
fn violates(grid: &GridModel, row: isize, col: isize, rule: AdjacencyRule) -> bool {
    let Some(excluded) = rule.excluded() else {
        return false;
    };
    rule.probes()
        .iter()
        .any(|o| grid.at(row + o.d_row, col + o.d_col) == Some(excluded))
}
