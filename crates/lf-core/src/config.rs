//! Session configuration, fixed for the lifetime of an editing session.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Grid dimensions and cell size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Edge length of one cell in canvas units.
    pub cell_size: f64,
    pub rows: usize,
    pub cols: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            rows: 13,
            cols: 24,
        }
    }
}

impl EditorConfig {
    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }

    pub fn canvas_width(&self) -> f64 {
        self.cols as f64 * self.cell_size
    }

    pub fn canvas_height(&self) -> f64 {
        self.rows as f64 * self.cell_size
    }
}
