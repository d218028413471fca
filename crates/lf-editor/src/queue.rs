//! FIFO of pending input events.
//!
//! Hosts that receive events from several sources (pointer, keyboard,
//! toolbar widgets) push them here and drain once per frame, so the
//! session sees one ordered stream and is the only writer of the grid.

use crate::input::InputEvent;
use crate::session::EditorSession;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply every queued event in arrival order.
    /// Returns `true` if any of them requires a redraw.
    pub fn drain_into(&mut self, session: &mut EditorSession) -> bool {
        let mut dirty = false;
        while let Some(event) = self.events.pop_front() {
            dirty |= session.handle(event);
        }
        dirty
    }
}

impl Extend<InputEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::{EditorConfig, ElementId, Tool};

    #[test]
    fn events_apply_in_arrival_order() {
        let mut session = EditorSession::new(EditorConfig::default()).unwrap();
        let mut queue = EventQueue::new();
        queue.extend([
            InputEvent::SelectTool(Some(Tool::Place(ElementId::STAR))),
            InputEvent::CommitAt { x: 10.0, y: 10.0 },
            InputEvent::SelectTool(Some(Tool::Remove)),
            InputEvent::CommitAt { x: 10.0, y: 10.0 },
            InputEvent::SelectTool(Some(Tool::Place(ElementId::BASE_BLOCK))),
            InputEvent::CommitAt { x: 10.0, y: 10.0 },
        ]);
        assert_eq!(queue.len(), 6);

        assert!(queue.drain_into(&mut session));
        assert!(queue.is_empty());
        assert_eq!(session.grid().get(0, 0), Ok(ElementId::BASE_BLOCK));
        assert_eq!(session.grid().star_count(), 0);
    }

    #[test]
    fn draining_an_empty_queue_is_clean() {
        let mut session = EditorSession::new(EditorConfig::default()).unwrap();
        assert!(!EventQueue::new().drain_into(&mut session));
    }
}
