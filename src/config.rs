//! Portfolio configuration module.
//!
//! Handles loading and normalizing the portfolio-level `config.json` that sits
//! in the root of the input directory, next to the project folders.
//!
//! ## Configuration Options
//!
//! ```json
//! {
//!   "title": "Portfolio",
//!   "subtitle": "",
//!   "author": "Artist",
//!   "email": "studio@example.com",
//!   "website": "https://example.com",
//!   "output": "portfolio.pdf",
//!   "pageSize": "A4",
//!   "orientation": "landscape",
//!   "margin": 50,
//!   "dpi": 300,
//!   "fonts": {
//!     "title": "Helvetica-Bold",
//!     "heading": "Helvetica-Bold",
//!     "body": "Helvetica",
//!     "caption": "Helvetica-Oblique"
//!   },
//!   "imageBorder": { "enabled": false, "width": 1, "color": "#000000" }
//! }
//! ```
//!
//! Every key is optional. Numeric values that are missing, zero or negative
//! are replaced by their defaults during [`PortfolioConfig::normalize`].
//!
//! ## Fallback
//!
//! A missing or unparsable config never aborts a run: [`load_config`] logs a
//! warning and substitutes the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

const DEFAULT_MARGIN: f32 = 50.0;
const DEFAULT_DPI: f32 = 300.0;
const DEFAULT_BORDER_WIDTH: f32 = 1.0;

/// Portfolio configuration loaded from `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Cover title and PDF document title.
    pub title: String,
    pub subtitle: String,
    /// Cover byline and PDF author metadata.
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Output file, used when the command line does not name one.
    pub output: String,
    /// Page size token (`A4`, `LETTER`, ...). See [`crate::geometry`].
    pub page_size: String,
    /// `portrait` or `landscape`.
    pub orientation: String,
    /// Page margin in points, applied on all four sides.
    pub margin: f32,
    /// Target raster resolution for embedded images.
    pub dpi: f32,
    pub fonts: FontConfig,
    pub image_border: ImageBorderConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            subtitle: String::new(),
            author: "Artist".to_string(),
            email: None,
            website: None,
            output: "portfolio.pdf".to_string(),
            page_size: "A4".to_string(),
            orientation: "landscape".to_string(),
            margin: DEFAULT_MARGIN,
            dpi: DEFAULT_DPI,
            fonts: FontConfig::default(),
            image_border: ImageBorderConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Replace non-positive or non-finite numbers and blank tokens with defaults.
    pub fn normalize(mut self) -> Self {
        if !positive(self.margin) {
            self.margin = DEFAULT_MARGIN;
        }
        if !positive(self.dpi) {
            self.dpi = DEFAULT_DPI;
        }
        if !positive(self.image_border.width) {
            self.image_border.width = DEFAULT_BORDER_WIDTH;
        }
        if self.page_size.trim().is_empty() {
            self.page_size = "A4".to_string();
        }
        if self.orientation.trim().is_empty() {
            self.orientation = "landscape".to_string();
        }
        self
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Font role map. Values are PDF base-14 font names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub title: String,
    pub heading: String,
    pub body: String,
    pub caption: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            title: "Helvetica-Bold".to_string(),
            heading: "Helvetica-Bold".to_string(),
            body: "Helvetica".to_string(),
            caption: "Helvetica-Oblique".to_string(),
        }
    }
}

/// Global image border policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageBorderConfig {
    pub enabled: bool,
    /// Stroke width in points.
    pub width: f32,
    /// Stroke color as `#rrggbb`.
    pub color: String,
}

impl Default for ImageBorderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            width: DEFAULT_BORDER_WIDTH,
            color: "#000000".to_string(),
        }
    }
}

/// Read and normalize a config file, surfacing any failure.
pub fn read_config(path: &Path) -> Result<PortfolioConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: PortfolioConfig = serde_json::from_str(&content)?;
    Ok(config.normalize())
}

/// Load `file_name` from `root`, falling back to defaults on any failure.
pub fn load_config(root: &Path, file_name: &str) -> PortfolioConfig {
    let path = root.join(file_name);
    if !path.exists() {
        log::warn!(
            "config file {} not found, using built-in defaults",
            path.display()
        );
        return PortfolioConfig::default();
    }
    match read_config(&path) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!(
                "could not load {} ({}), using built-in defaults",
                path.display(),
                e
            );
            PortfolioConfig::default()
        }
    }
}

/// Returns a stock `config.json` with every key set to its default.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_json() -> String {
    let stock = PortfolioConfig {
        email: Some(String::new()),
        website: Some(String::new()),
        ..PortfolioConfig::default()
    };
    // Plain data with string keys; serialization cannot fail.
    serde_json::to_string_pretty(&stock).unwrap_or_default()
}
