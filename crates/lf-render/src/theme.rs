//! Colors and opacities used by the render pipeline.

use crate::ops::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTheme {
    pub background: Color,
    pub grid_line: Color,
    pub grid_line_width: f64,
    /// Opacity of ghost sprites under the pointer.
    pub preview_alpha: f64,
    /// Composited over ghost cells when the placement is invalid.
    pub invalid_tint: Color,
    pub remove_fill: Color,
    pub remove_stroke: Color,
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl RenderTheme {
    /// Grey editor canvas.
    pub fn light() -> Self {
        Self {
            background: Color::rgba(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0, 1.0),
            grid_line: Color::rgba(160.0 / 255.0, 160.0 / 255.0, 160.0 / 255.0, 1.0),
            grid_line_width: 1.0,
            preview_alpha: 0.5,
            invalid_tint: Color::rgba(1.0, 0.0, 0.0, 0.35),
            remove_fill: Color::rgba(1.0, 0.0, 0.0, 0.25),
            remove_stroke: Color::rgba(1.0, 0.0, 0.0, 1.0),
        }
    }
}
