//! Canvas2D backend for [`DrawSurface`].
//!
//! Draws replayed frames to an HTML `<canvas>` through
//! `CanvasRenderingContext2d`. Sprite images are requested once by
//! [`SpriteAtlas::preload`]; a sprite whose image has not finished loading
//! is reported as unavailable and skipped for that frame.

use crate::assets::AssetManifest;
use kurbo::{Line, Rect};
use lf_core::ElementId;
use lf_render::{AssetUnavailable, Color, DrawSurface};
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// Loaded (or loading) sprite images keyed by element.
#[derive(Default)]
pub struct SpriteAtlas {
    images: HashMap<ElementId, HtmlImageElement>,
}

impl SpriteAtlas {
    /// Start loading every image in `manifest`. Replaces any previous set.
    pub fn preload(&mut self, manifest: &AssetManifest) -> Result<(), JsValue> {
        let mut images = HashMap::with_capacity(manifest.len());
        for (id, url) in manifest.iter() {
            let img = HtmlImageElement::new()?;
            img.set_src(url);
            images.insert(id, img);
        }
        log::info!("requested {} sprite images", images.len());
        self.images = images;
        Ok(())
    }

    /// The image for `id`, if it has fully decoded.
    fn ready(&self, id: ElementId) -> Option<&HtmlImageElement> {
        self.images
            .get(&id)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    atlas: &'a SpriteAtlas,
}

impl<'a> Canvas2dSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, atlas: &'a SpriteAtlas) -> Self {
        Self { ctx, atlas }
    }
}

impl DrawSurface for Canvas2dSurface<'_> {
    fn clear(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_lines(&mut self, lines: &[Line], color: Color, width: f64) {
        self.ctx.begin_path();
        for line in lines {
            self.ctx.move_to(line.p0.x, line.p0.y);
            self.ctx.line_to(line.p1.x, line.p1.y);
        }
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn draw_sprite(
        &mut self,
        element: ElementId,
        rect: Rect,
        alpha: f64,
    ) -> Result<(), AssetUnavailable> {
        let img = self.atlas.ready(element).ok_or(AssetUnavailable(element))?;

        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        let drawn = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        self.ctx.restore();
        drawn.map_err(|_| AssetUnavailable(element))
    }
}
