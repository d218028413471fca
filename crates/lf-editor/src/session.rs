//! The editing session: single owner of the grid.
//!
//! All grid mutation goes through [`EditorSession::commit`], which validates
//! against the armed tool first. The ghost preview is recomputed after
//! every event, so it always reflects the current grid, tool, and pointer.

use crate::input::InputEvent;
use kurbo::Point;
use lf_core::{
    Cell, ConfigError, EditorConfig, ElementCatalog, ElementId, GridError, GridModel, LevelData,
    LevelError, PlacementValidator, PreviewState, Rejection, Tool,
};
use lf_render::{DrawOp, PointerMapper, RenderTheme, render};

/// What a commit did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Placed { cell: Cell, id: ElementId },
    /// `previous` is `EMPTY` when the cell was already clear.
    Removed { cell: Cell, previous: ElementId },
    Rejected(Rejection),
    /// The pointer is off the grid.
    NoTarget,
}

impl CommitOutcome {
    pub fn changed_grid(&self) -> bool {
        match self {
            Self::Placed { .. } => true,
            Self::Removed { previous, .. } => !previous.is_empty(),
            Self::Rejected(_) | Self::NoTarget => false,
        }
    }
}

pub struct EditorSession {
    config: EditorConfig,
    catalog: ElementCatalog,
    grid: GridModel,
    mapper: PointerMapper,
    tool: Option<Tool>,
    preview: PreviewState,
}

impl EditorSession {
    /// Empty grid with the standard catalog.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, ElementCatalog::standard())
    }

    pub fn with_catalog(config: EditorConfig, catalog: ElementCatalog) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: GridModel::new(config.rows, config.cols),
            mapper: PointerMapper::from_config(&config),
            config,
            catalog,
            tool: None,
            preview: PreviewState::default(),
        })
    }

    /// Replace the whole grid with `level`, which must match the session's
    /// dimensions. On error the current grid is kept.
    pub fn load_level(&mut self, level: &LevelData) -> Result<(), LevelError> {
        level.expect_dimensions(self.config.rows, self.config.cols)?;
        self.grid = GridModel::from_level(level, &self.catalog)?;
        self.refresh_preview();
        Ok(())
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ElementCatalog {
        &self.catalog
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Where the grid's top-left corner sits on the host surface.
    pub fn set_origin(&mut self, origin: Point) {
        self.mapper = self.mapper.with_origin(origin);
    }

    /// Apply one event. Returns `true` if the frame needs redrawing.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerMove { x, y } => self.hover(self.mapper.map(x, y)),
            InputEvent::PointerLeave => self.hover(None),
            InputEvent::SelectTool(tool) => self.select_tool(tool),
            InputEvent::Commit => self.commit_logged(),
            InputEvent::CommitAt { x, y } => {
                let moved = self.hover(self.mapper.map(x, y));
                self.commit_logged() || moved
            }
        }
    }

    pub fn select_tool(&mut self, tool: Option<Tool>) -> bool {
        if self.tool == tool {
            return false;
        }
        log::debug!("tool: {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
        self.refresh_preview()
    }

    /// Set the hovered cell. Returns `true` if the preview changed.
    pub fn hover(&mut self, cell: Option<Cell>) -> bool {
        if self.preview.cell == cell {
            return false;
        }
        self.preview.cell = cell;
        self.refresh_preview();
        true
    }

    /// Apply the armed tool at the hovered cell.
    pub fn commit(&mut self) -> Result<CommitOutcome, GridError> {
        let Some(cell) = self.preview.cell else {
            return Ok(CommitOutcome::NoTarget);
        };
        let validator = PlacementValidator::new(&self.catalog);
        if let Err(rejection) = validator.check(&self.grid, cell.row, cell.col, self.tool) {
            log::debug!("rejected {:?} at {cell:?}: {rejection}", self.tool);
            return Ok(CommitOutcome::Rejected(rejection));
        }

        let outcome = match self.tool {
            Some(Tool::Place(id)) => {
                self.grid.set(cell.row, cell.col, id)?;
                CommitOutcome::Placed { cell, id }
            }
            // `check` rejects a missing tool, so this is the remove tool.
            _ => {
                let previous = self.grid.set(cell.row, cell.col, ElementId::EMPTY)?;
                CommitOutcome::Removed { cell, previous }
            }
        };
        log::debug!("commit: {outcome:?}");
        self.refresh_preview();
        Ok(outcome)
    }

    /// Build the current frame.
    pub fn render(&self, theme: &RenderTheme) -> Vec<DrawOp> {
        render(
            &self.grid,
            &self.catalog,
            self.config.cell_size,
            &self.preview,
            theme,
        )
    }

    fn commit_logged(&mut self) -> bool {
        match self.commit() {
            Ok(outcome) => outcome.changed_grid(),
            Err(e) => {
                log::error!("commit failed: {e}");
                false
            }
        }
    }

    /// Recompute the preview verdict. Returns `true` if it changed.
    fn refresh_preview(&mut self) -> bool {
        let validator = PlacementValidator::new(&self.catalog);
        let next = PreviewState::compute(&validator, &self.grid, self.preview.cell, self.tool);
        let changed = next != self.preview;
        self.preview = next;
        changed
    }
}
