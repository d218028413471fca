pub mod hit;
pub mod ops;
pub mod pipeline;
pub mod surface;
pub mod theme;

pub use hit::{PointerMapper, to_cell};
pub use ops::{Color, DrawOp};
pub use pipeline::render;
pub use surface::{AssetUnavailable, DrawSurface, ReplayStats, replay};
pub use theme::RenderTheme;
