//! Integration tests: editing session (lf-editor ↔ lf-core ↔ lf-render).
//!
//! Drives the session with host-style pixel events and checks grid
//! contents and rendered frames.

use lf_core::{Cell, EditorConfig, ElementId, LevelData, LevelError, Tool};
use lf_editor::{CommitOutcome, EditorSession, EventQueue, InputEvent};
use lf_render::{DrawOp, RenderTheme};
use pretty_assertions::assert_eq;

fn loaded_session() -> EditorSession {
    let mut session = EditorSession::new(EditorConfig::default()).unwrap();
    let level = LevelData::from_json(include_str!("../../lf-core/tests/fixtures/mixed.json")).unwrap();
    session.load_level(&level).unwrap();
    session
}

/// Pixel center of a cell at the default 50-unit size.
fn center(row: usize, col: usize) -> (f64, f64) {
    (col as f64 * 50.0 + 25.0, row as f64 * 50.0 + 25.0)
}

fn overlay_count(ops: &[DrawOp]) -> usize {
    ops.iter().filter(|op| op.is_overlay()).count()
}

// ─── Pointer → preview ──────────────────────────────────────────────────

#[test]
fn preview_tracks_pointer_and_validity() {
    let mut session = loaded_session();
    session.handle(InputEvent::SelectTool(Some(Tool::Place(ElementId::MOVING_PLATFORM))));

    let (x, y) = center(8, 12);
    assert!(session.handle(InputEvent::PointerMove { x, y }));
    assert_eq!(session.preview().cell, Some(Cell::new(8, 12)));
    // (8,11) sits beside the loaded platform at (8,10).
    assert!(!session.preview().is_valid);
    assert_eq!(overlay_count(&session.render(&RenderTheme::light())), 3);

    let (x, y) = center(8, 13);
    session.handle(InputEvent::PointerMove { x, y });
    assert!(session.preview().is_valid);
    assert_eq!(overlay_count(&session.render(&RenderTheme::light())), 0);

    // Same cell, different pixel: nothing to redraw.
    assert!(!session.handle(InputEvent::PointerMove { x: x + 3.0, y: y - 3.0 }));

    assert!(session.handle(InputEvent::PointerLeave));
    assert_eq!(session.preview().cell, None);
    assert_eq!(session.render(&RenderTheme::light()).len(), 2 + 33);
}

// ─── Commits ────────────────────────────────────────────────────────────

#[test]
fn platform_commit_blocks_its_flanks() {
    let mut session = EditorSession::new(EditorConfig::default()).unwrap();
    let mut queue = EventQueue::new();
    let (x, y) = center(4, 6);
    queue.extend([
        InputEvent::SelectTool(Some(Tool::Place(ElementId::MOVING_PLATFORM))),
        InputEvent::CommitAt { x, y },
    ]);
    assert!(queue.drain_into(&mut session));
    assert_eq!(session.grid().get(4, 6), Ok(ElementId::MOVING_PLATFORM));
    // Flanks are not stored.
    assert_eq!(session.grid().get(4, 5), Ok(ElementId::EMPTY));

    session.select_tool(Some(Tool::Place(ElementId::BASE_BLOCK)));
    for (col, expected) in [(5, false), (7, false), (4, true), (8, true)] {
        session.hover(Some(Cell::new(4, col)));
        assert_eq!(session.preview().is_valid, expected, "col {col}");
    }

    session.hover(Some(Cell::new(4, 7)));
    assert!(matches!(session.commit(), Ok(CommitOutcome::Rejected(_))));
    assert_eq!(session.grid().get(4, 7), Ok(ElementId::EMPTY));
}

#[test]
fn star_limit_holds_through_the_session() {
    let mut session = loaded_session();
    session.select_tool(Some(Tool::Place(ElementId::STAR)));

    session.hover(Some(Cell::new(0, 0)));
    assert!(session.commit().unwrap().changed_grid());
    session.hover(Some(Cell::new(0, 5)));
    assert!(matches!(session.commit(), Ok(CommitOutcome::Rejected(_))));
    assert_eq!(session.grid().star_count(), 3);
}

#[test]
fn commit_off_grid_does_nothing() {
    let mut session = EditorSession::new(EditorConfig::default()).unwrap();
    session.select_tool(Some(Tool::Place(ElementId::STAR)));
    assert!(!session.handle(InputEvent::CommitAt { x: -5.0, y: 10.0 }));
    assert!(session.grid().is_blank());
}

// ─── Level loading ──────────────────────────────────────────────────────

#[test]
fn load_replaces_the_whole_grid() {
    let mut session = loaded_session();
    let blank = LevelData {
        rows: vec![vec![0; 24]; 13],
    };
    session.load_level(&blank).unwrap();
    assert!(session.grid().is_blank());
}

#[test]
fn mismatched_level_keeps_current_grid() {
    let mut session = loaded_session();
    let small = LevelData {
        rows: vec![vec![3; 4]; 2],
    };
    assert!(matches!(
        session.load_level(&small),
        Err(LevelError::DimensionMismatch { .. })
    ));
    assert_eq!(session.grid().star_count(), 2);
}
