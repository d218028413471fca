pub mod input;
pub mod queue;
pub mod session;

pub use input::InputEvent;
pub use queue::EventQueue;
pub use session::{CommitOutcome, EditorSession};
