//! Abstract 2-D drawing surface and the replay loop that feeds it.
//!
//! Concrete backends (browser canvas, software raster, test recorders)
//! implement [`DrawSurface`]. Sprites are resolved by element id; a backend
//! that cannot resolve one reports [`AssetUnavailable`] and the frame goes on.

use crate::ops::{Color, DrawOp};
use kurbo::{Line, Rect};
use lf_core::ElementId;
use thiserror::Error;

/// A sprite for this element is not loaded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no sprite loaded for element {0}")]
pub struct AssetUnavailable(pub ElementId);

pub trait DrawSurface {
    fn clear(&mut self, rect: Rect);

    /// Fill with a color; translucent colors composite over what is below.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Stroke every line as one path.
    fn stroke_lines(&mut self, lines: &[Line], color: Color, width: f64);

    fn draw_sprite(&mut self, element: ElementId, rect: Rect, alpha: f64) -> Result<(), AssetUnavailable>;
}

/// Outcome of one [`replay`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub drawn: usize,
    /// Sprites skipped for missing assets.
    pub skipped: usize,
}

/// Issue `ops` to `surface` in order.
pub fn replay<S: DrawSurface + ?Sized>(ops: &[DrawOp], surface: &mut S) -> ReplayStats {
    let mut stats = ReplayStats::default();
    for op in ops {
        match op {
            DrawOp::Background { rect, color } => {
                surface.clear(*rect);
                surface.fill_rect(*rect, *color);
            }
            DrawOp::GridLines {
                lines,
                color,
                width,
            } => surface.stroke_lines(lines, *color, *width),
            DrawOp::Sprite {
                element,
                rect,
                alpha,
            } => {
                if let Err(e) = surface.draw_sprite(*element, *rect, *alpha) {
                    log::warn!("{e}; skipping sprite at {rect:?}");
                    stats.skipped += 1;
                    continue;
                }
            }
            DrawOp::Overlay { rect, fill, stroke } => {
                surface.fill_rect(*rect, *fill);
                if let Some(stroke) = stroke {
                    surface.stroke_rect(*rect, *stroke, 1.0);
                }
            }
        }
        stats.drawn += 1;
    }
    stats
}
