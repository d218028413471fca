//! Input abstraction layer.
//!
//! Normalizes host UI events (pointer motion, toolbar clicks, confirm
//! presses) into one `InputEvent` enum consumed by the session.

use lf_core::Tool;

/// A normalized event from the host UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved, in surface pixels.
    PointerMove { x: f64, y: f64 },

    /// Pointer left the drawing surface.
    PointerLeave,

    /// Toolbar selection changed. `None` disarms.
    SelectTool(Option<Tool>),

    /// Apply the armed tool at the hovered cell.
    Commit,

    /// Pointer pressed: hover at `(x, y)`, then commit there.
    CommitAt { x: f64, y: f64 },
}

impl InputEvent {
    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::CommitAt { x, y }
    }
}
