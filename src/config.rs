//! Capture configuration.
//!
//! Margins default to the values measured for a standard decorated window
//! (8 px borders, 30 px title bar). An optional JSON file can override them,
//! e.g. `{"border_pixels": 1, "maximize_on_attach": true}`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Options controlling how a `WindowCapture` attaches to its window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureOptions {
    /// Pixels cropped from the left, right and bottom window edges.
    pub border_pixels: i32,
    /// Pixels cropped from the top of the window (title bar plus top border).
    pub titlebar_pixels: i32,
    /// Maximize the window before measuring it. Off by default since it
    /// mutates shared desktop state.
    pub maximize_on_attach: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            border_pixels: 8,
            titlebar_pixels: 30,
            maximize_on_attach: false,
        }
    }
}

impl CaptureOptions {
    /// Loads options from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
