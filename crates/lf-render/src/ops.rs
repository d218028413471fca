//! Declarative draw operations, consumed back-to-front by a drawing surface.

use kurbo::{Line, Rect};
use lf_core::ElementId;
use serde::Serialize;

/// RGBA color. Channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` string for canvas-style backends.
    pub fn to_css(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        format!("rgba({r}, {g}, {b}, {})", self.a)
    }
}

/// One step of a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Clear and fill the whole canvas.
    Background { rect: Rect, color: Color },
    /// Every grid line, stroked as one path.
    GridLines {
        lines: Vec<Line>,
        color: Color,
        width: f64,
    },
    /// An element's sprite scaled into `rect`.
    Sprite {
        element: ElementId,
        rect: Rect,
        alpha: f64,
    },
    /// A translucent cell highlight, optionally outlined.
    Overlay {
        rect: Rect,
        fill: Color,
        stroke: Option<Color>,
    },
}

impl DrawOp {
    pub fn is_sprite(&self) -> bool {
        matches!(self, Self::Sprite { .. })
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Overlay { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_rounds_channels_to_bytes() {
        let grey = Color::rgba(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0, 1.0);
        assert_eq!(grey.to_css(), "rgba(224, 224, 224, 1)");
        assert_eq!(
            Color::rgba(1.0, 0.0, 0.0, 0.35).to_css(),
            "rgba(255, 0, 0, 0.35)"
        );
    }
}
