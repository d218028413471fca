pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod level;
pub mod placement;
pub mod preview;
pub mod tool;

pub use catalog::{AdjacencyRule, ElementCatalog, ElementDescriptor, ElementId, Offset};
pub use config::EditorConfig;
pub use error::{ConfigError, GridError, LevelError};
pub use grid::{Cell, GridModel};
pub use level::LevelData;
pub use placement::{PlacementValidator, Rejection};
pub use preview::PreviewState;
pub use tool::Tool;
