//! Level Forge WASM bridge.
//!
//! Exposes a `LevelCanvas` to the browser host. Host listeners only enqueue
//! input; the queue is drained into the editing session at the start of
//! every `render` (or on an explicit `flush`), so the grid has one writer.

mod assets;
mod render2d;

pub use assets::AssetManifest;

use kurbo::Point;
use lf_core::{EditorConfig, LevelData, LevelError, Tool};
use lf_editor::{EditorSession, EventQueue, InputEvent};
use lf_render::{RenderTheme, replay};
use render2d::{Canvas2dSurface, SpriteAtlas};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[wasm_bindgen]
pub struct LevelCanvas {
    session: EditorSession,
    queue: EventQueue,
    theme: RenderTheme,
    atlas: SpriteAtlas,
    origin: Point,
}

#[wasm_bindgen]
impl LevelCanvas {
    /// Create an empty level.
    #[wasm_bindgen(constructor)]
    pub fn new(cell_size: f64, rows: usize, cols: usize) -> Result<LevelCanvas, JsValue> {
        console_error_panic_hook_setup();

        let config = EditorConfig {
            cell_size,
            rows,
            cols,
        };
        let session = EditorSession::new(config)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;

        Ok(Self {
            session,
            queue: EventQueue::new(),
            theme: RenderTheme::light(),
            atlas: SpriteAtlas::default(),
            origin: Point::ZERO,
        })
    }

    /// Request one sprite image per catalog element from `base_url`.
    /// Call once before the first render; images decode in the background.
    pub fn preload_assets(&mut self, base_url: &str) -> bool {
        let manifest = AssetManifest::for_catalog(self.session.catalog(), base_url);
        match self.atlas.preload(&manifest) {
            Ok(()) => true,
            Err(e) => {
                log::error!("sprite preload failed: {e:?}");
                false
            }
        }
    }

    /// Replace the grid with a level. Returns JSON:
    /// `{"ok":true}` or `{"ok":false,"error":"..."}`.
    pub fn load_level_json(&mut self, json: &str) -> String {
        self.flush();
        let result = match self.try_load(json) {
            Ok(()) => serde_json::json!({ "ok": true }),
            Err(e) => {
                log::warn!("level rejected: {e}");
                serde_json::json!({ "ok": false, "error": e.to_string() })
            }
        };
        result.to_string()
    }

    /// The current grid as a JSON array of rows.
    pub fn level_json(&mut self) -> String {
        self.flush();
        self.session.grid().to_level().to_json()
    }

    /// Arm a tool by name (`"remove"`, an element name, or a numeric id).
    /// An empty name disarms. Returns `false` for unrecognized names.
    pub fn set_tool(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            self.queue.push(InputEvent::SelectTool(None));
            return true;
        }
        match Tool::parse(name, self.session.catalog()) {
            Some(tool) => {
                self.queue.push(InputEvent::SelectTool(Some(tool)));
                true
            }
            None => {
                log::warn!("unknown tool name: {name:?}");
                false
            }
        }
    }

    /// Name of the armed tool, or `""` when none is armed.
    pub fn tool_name(&mut self) -> String {
        self.flush();
        match self.session.tool() {
            None => String::new(),
            Some(Tool::Remove) => Tool::REMOVE_NAME.to_string(),
            Some(Tool::Place(id)) => self
                .session
                .catalog()
                .describe(id)
                .map_or_else(|| id.0.to_string(), |d| d.name.to_string()),
        }
    }

    /// Names of every placeable element, for building a toolbar.
    pub fn element_names(&self) -> js_sys::Array {
        self.session
            .catalog()
            .iter()
            .map(|d| JsValue::from_str(d.name))
            .collect()
    }

    /// Offset of the grid's top-left corner on the canvas, in pixels.
    /// Pointer coordinates and drawing both follow it.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.flush();
        self.origin = Point::new(x, y);
        self.session.set_origin(self.origin);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.queue.push(InputEvent::from_pointer_move(x, y));
    }

    pub fn pointer_leave(&mut self) {
        self.queue.push(InputEvent::PointerLeave);
    }

    /// Apply the armed tool at the hovered cell.
    pub fn commit(&mut self) {
        self.queue.push(InputEvent::Commit);
    }

    /// Pointer pressed at `(x, y)`.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.queue.push(InputEvent::from_pointer_down(x, y));
    }

    /// Apply queued input. Returns `true` if the frame needs redrawing.
    pub fn flush(&mut self) -> bool {
        self.queue.drain_into(&mut self.session)
    }

    /// Whether the ghost under the pointer is a legal placement.
    pub fn preview_valid(&mut self) -> bool {
        self.flush();
        self.session.preview().is_valid
    }

    pub fn star_count(&self) -> usize {
        self.session.grid().star_count()
    }

    pub fn canvas_width(&self) -> f64 {
        self.session.config().canvas_width()
    }

    pub fn canvas_height(&self) -> f64 {
        self.session.config().canvas_height()
    }

    /// Apply queued input and draw the frame.
    /// Returns `true` if some sprite images were not loaded yet; the host
    /// should render again once they arrive.
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> bool {
        self.flush();
        let ops = self.session.render(&self.theme);
        ctx.save();
        if let Err(e) = ctx.translate(self.origin.x, self.origin.y) {
            log::warn!("canvas translate failed: {e:?}");
        }
        let mut surface = Canvas2dSurface::new(ctx, &self.atlas);
        let stats = replay(&ops, &mut surface);
        ctx.restore();
        stats.skipped > 0
    }
}

impl LevelCanvas {
    fn try_load(&mut self, json: &str) -> Result<(), LevelError> {
        let level = LevelData::from_json(json)?;
        self.session.load_level(&level)
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Level Forge WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
