//! Menu configuration.
//!
//! All fields default to the calibrated estimation constants, so an empty
//! JSON object (or a missing file) yields the stock behavior.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::dimensions::{
    EstimatorParams, ITEM_HEIGHT, PADDING, WIDTH_ESTIMATE_MULTIPLIER, WIDTH_EXTRA,
};
use crate::domain::windowing::DEFAULT_OVERSCAN_ROWS;

/// Default height cap of the menu viewport in pixels
pub const DEFAULT_MAX_HEIGHT: f32 = 300.0;

/// Tunables for the select menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub item_height: f32,
    pub width_multiplier: f32,
    pub padding: f32,
    pub width_extra: f32,
    pub overscan_rows: usize,
    pub max_height: f32,
    pub theme: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            item_height: ITEM_HEIGHT,
            width_multiplier: WIDTH_ESTIMATE_MULTIPLIER,
            padding: PADDING,
            width_extra: WIDTH_EXTRA,
            overscan_rows: DEFAULT_OVERSCAN_ROWS,
            max_height: DEFAULT_MAX_HEIGHT,
            theme: crate::theme::DEFAULT_THEME.to_string(),
        }
    }
}

impl MenuConfig {
    /// `<config dir>/rselect/menu.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rselect").join("menu.json"))
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MenuConfig = serde_json::from_str(json).context("Invalid menu config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Loads `path` (or the default path) if it exists, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) if p.exists() => p,
            _ => {
                log::debug!("no menu config file, using defaults");
                return Ok(Self::default());
            }
        };

        log::info!("loading menu config from {}", path.display());
        Self::load(&path)
    }

    /// Writes the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Rejects values that would break layout.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.item_height.is_finite() && self.item_height > 0.0,
            "item_height must be positive, got {}",
            self.item_height
        );
        ensure!(
            self.width_multiplier >= 0.0 && self.padding >= 0.0 && self.width_extra >= 0.0,
            "width_multiplier, padding and width_extra must not be negative"
        );
        ensure!(!self.max_height.is_nan(), "max_height must be a number");
        Ok(())
    }

    /// Estimation constants derived from this config.
    pub fn estimator_params(&self) -> EstimatorParams {
        EstimatorParams {
            item_height: self.item_height,
            width_multiplier: self.width_multiplier,
            padding: self.padding,
            width_extra: self.width_extra,
        }
    }
}
