//! Grid + preview → ordered draw operations.
//!
//! Back to front: background, grid lines, placed elements in row-major
//! order, then the ghost preview. Multi-cell elements draw their
//! non-anchor cells first so the anchor sprite lands on top. Output is a
//! pure function of the inputs and safe to rebuild every frame.

use crate::hit::cell_rect;
use crate::ops::DrawOp;
use crate::theme::RenderTheme;
use kurbo::{Line, Rect};
use lf_core::{Cell, ElementCatalog, ElementDescriptor, GridModel, PreviewState, Tool};
use smallvec::SmallVec;

/// Build one frame.
pub fn render(
    grid: &GridModel,
    catalog: &ElementCatalog,
    cell_size: f64,
    preview: &PreviewState,
    theme: &RenderTheme,
) -> Vec<DrawOp> {
    let mut ops = Vec::new();

    let width = grid.cols() as f64 * cell_size;
    let height = grid.rows() as f64 * cell_size;
    ops.push(DrawOp::Background {
        rect: Rect::new(0.0, 0.0, width, height),
        color: theme.background,
    });
    ops.push(DrawOp::GridLines {
        lines: grid_lines(grid.rows(), grid.cols(), cell_size),
        color: theme.grid_line,
        width: theme.grid_line_width,
    });

    paint_elements(&mut ops, grid, catalog, cell_size);
    paint_preview(&mut ops, grid, catalog, cell_size, preview, theme);

    log::trace!(
        "frame: {} ops ({} sprites, {} overlays) for {}x{} grid, preview {:?}",
        ops.len(),
        ops.iter().filter(|op| op.is_sprite()).count(),
        ops.iter().filter(|op| op.is_overlay()).count(),
        grid.rows(),
        grid.cols(),
        preview.target()
    );
    ops
}

/// Vertical lines at every column boundary, then horizontal lines at every
/// row boundary, borders included.
fn grid_lines(rows: usize, cols: usize, cell_size: f64) -> Vec<Line> {
    let width = cols as f64 * cell_size;
    let height = rows as f64 * cell_size;
    let vertical = (0..=cols).map(|i| {
        let x = i as f64 * cell_size;
        Line::new((x, 0.0), (x, height))
    });
    let horizontal = (0..=rows).map(|j| {
        let y = j as f64 * cell_size;
        Line::new((0.0, y), (width, y))
    });
    vertical.chain(horizontal).collect()
}

fn paint_elements(ops: &mut Vec<DrawOp>, grid: &GridModel, catalog: &ElementCatalog, cell_size: f64) {
    for (anchor, id) in grid.occupied() {
        let Some(descriptor) = catalog.describe(id) else {
            log::trace!("skipping unknown element {id} at {anchor:?}");
            continue;
        };
        for cell in draw_cells(grid, descriptor, anchor) {
            ops.push(DrawOp::Sprite {
                element: id,
                rect: cell_rect(cell, cell_size),
                alpha: 1.0,
            });
        }
    }
}

fn paint_preview(
    ops: &mut Vec<DrawOp>,
    grid: &GridModel,
    catalog: &ElementCatalog,
    cell_size: f64,
    preview: &PreviewState,
    theme: &RenderTheme,
) {
    let Some((cell, tool)) = preview.target() else {
        return;
    };
    if cell.row >= grid.rows() || cell.col >= grid.cols() {
        return;
    }

    let id = match tool {
        Tool::Remove => {
            ops.push(DrawOp::Overlay {
                rect: cell_rect(cell, cell_size),
                fill: theme.remove_fill,
                stroke: Some(theme.remove_stroke),
            });
            return;
        }
        Tool::Place(id) => id,
    };
    let Some(descriptor) = catalog.describe(id) else {
        return;
    };

    let cells = draw_cells(grid, descriptor, cell);
    for c in &cells {
        ops.push(DrawOp::Sprite {
            element: id,
            rect: cell_rect(*c, cell_size),
            alpha: theme.preview_alpha,
        });
    }
    if !preview.is_valid {
        for c in &cells {
            ops.push(DrawOp::Overlay {
                rect: cell_rect(*c, cell_size),
                fill: theme.invalid_tint,
                stroke: None,
            });
        }
    }
}

/// Footprint cells in draw order: non-anchor cells first, anchor last.
/// Cells off the grid are dropped.
fn draw_cells(grid: &GridModel, descriptor: &ElementDescriptor, anchor: Cell) -> SmallVec<[Cell; 3]> {
    let (row, col) = anchor.signed();
    let (anchors, others): (SmallVec<[_; 3]>, SmallVec<[_; 3]>) = descriptor
        .footprint
        .iter()
        .partition(|o| o.is_anchor());

    others
        .into_iter()
        .chain(anchors)
        .map(|o| o.apply(row, col))
        .filter(|&(r, c)| grid.in_bounds(r, c))
        .map(|(r, c)| Cell::new(r as usize, c as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::ElementId;
    use pretty_assertions::assert_eq;

    fn sprite_rects(ops: &[DrawOp]) -> Vec<(u16, Rect, f64)> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Sprite {
                    element,
                    rect,
                    alpha,
                } => Some((element.0, *rect, *alpha)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn grid_lines_include_both_borders() {
        let lines = grid_lines(2, 3, 10.0);
        assert_eq!(lines.len(), 4 + 3);
        assert_eq!(lines[0], Line::new((0.0, 0.0), (0.0, 20.0)));
        assert_eq!(lines[3], Line::new((30.0, 0.0), (30.0, 20.0)));
        assert_eq!(lines[6], Line::new((0.0, 20.0), (30.0, 20.0)));
    }

    #[test]
    fn platform_draws_flanks_before_anchor() {
        let catalog = ElementCatalog::standard();
        let mut grid = GridModel::new(3, 5);
        grid.set(1, 2, ElementId::MOVING_PLATFORM).unwrap();

        let ops = render(&grid, &catalog, 10.0, &PreviewState::default(), &RenderTheme::light());
        assert_eq!(
            sprite_rects(&ops),
            vec![
                (6, Rect::new(10.0, 10.0, 20.0, 20.0), 1.0),
                (6, Rect::new(30.0, 10.0, 40.0, 20.0), 1.0),
                (6, Rect::new(20.0, 10.0, 30.0, 20.0), 1.0),
            ]
        );
    }

    #[test]
    fn platform_flank_off_grid_is_dropped() {
        let catalog = ElementCatalog::standard();
        let mut grid = GridModel::new(1, 3);
        grid.set(0, 0, ElementId::MOVING_PLATFORM).unwrap();

        let ops = render(&grid, &catalog, 10.0, &PreviewState::default(), &RenderTheme::light());
        assert_eq!(
            sprite_rects(&ops),
            vec![
                (6, Rect::new(10.0, 0.0, 20.0, 10.0), 1.0),
                (6, Rect::new(0.0, 0.0, 10.0, 10.0), 1.0),
            ]
        );
    }

    #[test]
    fn remove_preview_is_one_outlined_overlay() {
        let catalog = ElementCatalog::standard();
        let grid = GridModel::new(3, 3);
        let theme = RenderTheme::light();
        let preview = PreviewState {
            cell: Some(Cell::new(2, 1)),
            tool: Some(Tool::Remove),
            is_valid: true,
        };

        let ops = render(&grid, &catalog, 10.0, &preview, &theme);
        assert_eq!(
            ops.last(),
            Some(&DrawOp::Overlay {
                rect: Rect::new(10.0, 20.0, 20.0, 30.0),
                fill: theme.remove_fill,
                stroke: Some(theme.remove_stroke),
            })
        );
        assert_eq!(ops.iter().filter(|op| op.is_sprite()).count(), 0);
    }

    #[test]
    fn invalid_preview_tints_every_ghost_cell() {
        let catalog = ElementCatalog::standard();
        let grid = GridModel::new(3, 5);
        let theme = RenderTheme::light();
        let preview = PreviewState {
            cell: Some(Cell::new(0, 2)),
            tool: Some(Tool::Place(ElementId::MOVING_PLATFORM)),
            is_valid: false,
        };

        let ops = render(&grid, &catalog, 10.0, &preview, &theme);
        let ghosts = sprite_rects(&ops);
        assert_eq!(ghosts.len(), 3);
        assert!(ghosts.iter().all(|(_, _, alpha)| *alpha == 0.5));
        let tints: Vec<&DrawOp> = ops.iter().filter(|op| op.is_overlay()).collect();
        assert_eq!(tints.len(), 3);
    }

    #[test]
    fn valid_preview_has_no_tint() {
        let catalog = ElementCatalog::standard();
        let grid = GridModel::new(3, 3);
        let preview = PreviewState {
            cell: Some(Cell::new(1, 1)),
            tool: Some(Tool::Place(ElementId::STAR)),
            is_valid: true,
        };

        let ops = render(&grid, &catalog, 10.0, &preview, &RenderTheme::light());
        assert_eq!(
            sprite_rects(&ops),
            vec![(2, Rect::new(10.0, 10.0, 20.0, 20.0), 0.5)]
        );
        assert!(!ops.iter().any(DrawOp::is_overlay));
    }

    #[test]
    fn unknown_tool_preview_draws_nothing() {
        let catalog = ElementCatalog::standard();
        let grid = GridModel::new(3, 3);
        let preview = PreviewState {
            cell: Some(Cell::new(1, 1)),
            tool: Some(Tool::Place(ElementId(77))),
            is_valid: false,
        };

        let ops = render(&grid, &catalog, 10.0, &preview, &RenderTheme::light());
        assert_eq!(ops.len(), 2);
    }
}
