//! Ghost preview under the pointer, recomputed on every pointer move.

use crate::grid::{Cell, GridModel};
use crate::placement::PlacementValidator;
use crate::tool::Tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewState {
    /// Hovered cell, `None` while the pointer is off the grid.
    pub cell: Option<Cell>,
    pub tool: Option<Tool>,
    pub is_valid: bool,
}

impl PreviewState {
    pub fn compute(
        validator: &PlacementValidator<'_>,
        grid: &GridModel,
        cell: Option<Cell>,
        tool: Option<Tool>,
    ) -> Self {
        let is_valid = cell.is_some_and(|c| validator.is_valid(grid, c.row, c.col, tool));
        Self {
            cell,
            tool,
            is_valid,
        }
    }

    /// Hovered cell and armed tool, when both are present.
    pub fn target(&self) -> Option<(Cell, Tool)> {
        Some((self.cell?, self.tool?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ElementCatalog, ElementId};

    #[test]
    fn off_grid_preview_is_invalid_and_hidden() {
        let catalog = ElementCatalog::standard();
        let v = PlacementValidator::new(&catalog);
        let grid = GridModel::new(13, 24);
        let p = PreviewState::compute(&v, &grid, None, Some(Tool::Remove));
        assert!(!p.is_valid);
        assert_eq!(p.target(), None);
    }

    #[test]
    fn preview_reflects_validator() {
        let catalog = ElementCatalog::standard();
        let v = PlacementValidator::new(&catalog);
        let mut grid = GridModel::new(13, 24);
        grid.set(1, 1, ElementId::BASE_BLOCK).unwrap();
        let tool = Some(Tool::Place(ElementId::STAR));

        assert!(PreviewState::compute(&v, &grid, Some(Cell::new(0, 0)), tool).is_valid);
        let blocked = PreviewState::compute(&v, &grid, Some(Cell::new(1, 1)), tool);
        assert!(!blocked.is_valid);
        assert_eq!(
            blocked.target(),
            Some((Cell::new(1, 1), Tool::Place(ElementId::STAR)))
        );
    }
}
