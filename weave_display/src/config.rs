//! Configuration file support for weave-display.
//!
//! Settings are read from `~/.config/weave-display/config.toml`. A missing
//! file means defaults; out-of-range values are clamped with a warning.
//!
//! ```toml
//! [grid]
//! rows = 16
//! cols = 32
//!
//! [layout]
//! min_cell = 14.0
//! max_cell = 28.0
//! gap = 32.0
//!
//! [export]
//! directory = "."
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use punch_card::encode::ENCODED_BITS;
use punch_card::{DEFAULT_COLS, DEFAULT_ROWS};
use serde::{Deserialize, Serialize};

const MAX_ROWS: usize = 64;
const MAX_COLS: usize = 128;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS, cols: DEFAULT_COLS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width used for sizing when the window reports less.
    pub min_width: f32,
    pub min_cell: f32,
    pub max_cell: f32,
    /// Vertical space between punch card and swatch.
    pub gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { min_width: 320.0, min_cell: 14.0, max_cell: 28.0, gap: 32.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub png_name: String,
    pub json_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            png_name: "weave.png".to_string(),
            json_name: "punchcard.json".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn png_path(&self) -> PathBuf {
        self.directory.join(&self.png_name)
    }

    pub fn json_path(&self) -> PathBuf {
        self.directory.join(&self.json_name)
    }
}

impl Config {
    /// `~/.config/weave-display/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("weave-display");
        Ok(dir.join("config.toml"))
    }

    /// Loads from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config = Self::parse(&text)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Applies command-line values on top of the file, then clamps again.
    pub fn apply_overrides(
        &mut self,
        rows: Option<usize>,
        cols: Option<usize>,
        export_dir: Option<PathBuf>,
    ) {
        if let Some(rows) = rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cols {
            self.grid.cols = cols;
        }
        if let Some(dir) = export_dir {
            self.export.directory = dir;
        }
        self.validate_and_clamp();
    }

    /// Clamps values the viewer cannot work with.
    pub fn validate_and_clamp(&mut self) {
        if !(ENCODED_BITS..=MAX_ROWS).contains(&self.grid.rows) {
            warn!(
                "Invalid grid rows {}, clamping to {}-{} range",
                self.grid.rows, ENCODED_BITS, MAX_ROWS
            );
            self.grid.rows = self.grid.rows.clamp(ENCODED_BITS, MAX_ROWS);
        }

        if !(1..=MAX_COLS).contains(&self.grid.cols) {
            warn!("Invalid grid cols {}, clamping to 1-{} range", self.grid.cols, MAX_COLS);
            self.grid.cols = self.grid.cols.clamp(1, MAX_COLS);
        }

        let defaults = LayoutConfig::default();

        if self.layout.min_cell.is_nan() {
            warn!("Invalid min_cell NaN, falling back to {:.1}", defaults.min_cell);
            self.layout.min_cell = defaults.min_cell;
        } else if !(4.0..=128.0).contains(&self.layout.min_cell) {
            warn!("Invalid min_cell {:.1}, clamping to 4.0-128.0 range", self.layout.min_cell);
            self.layout.min_cell = self.layout.min_cell.clamp(4.0, 128.0);
        }

        if self.layout.max_cell.is_nan() {
            let fallback = defaults.max_cell.max(self.layout.min_cell);
            warn!("Invalid max_cell NaN, falling back to {:.1}", fallback);
            self.layout.max_cell = fallback;
        } else if !(self.layout.min_cell..=128.0).contains(&self.layout.max_cell) {
            warn!(
                "Invalid max_cell {:.1}, clamping to {:.1}-128.0 range",
                self.layout.max_cell, self.layout.min_cell
            );
            self.layout.max_cell = self.layout.max_cell.clamp(self.layout.min_cell, 128.0);
        }

        if self.layout.gap.is_nan() {
            warn!("Invalid gap NaN, falling back to {:.1}", defaults.gap);
            self.layout.gap = defaults.gap;
        } else if !(0.0..=256.0).contains(&self.layout.gap) {
            warn!("Invalid gap {:.1}, clamping to 0.0-256.0 range", self.layout.gap);
            self.layout.gap = self.layout.gap.clamp(0.0, 256.0);
        }

        if self.layout.min_width.is_nan() || self.layout.min_width < 0.0 {
            warn!(
                "Invalid min_width {:.1}, falling back to {:.1}",
                self.layout.min_width, defaults.min_width
            );
            self.layout.min_width = defaults.min_width;
        }
    }
}
