//! Runtime options for a conversion session

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration for a conversion session
///
/// The defaults reproduce the desktop tool's behaviour: white background,
/// aliased text and an `output.png` save suggestion. The font itself is fixed
/// and cannot be configured.
///
/// # Examples
///
/// ```
/// let cfg = asciisnap::SnapConfig::default();
/// assert_eq!(cfg.default_output_name, "output.png");
/// assert!(!cfg.transparent);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Initial state of the transparency toggle
    pub transparent: bool,
    /// Blend partial glyph coverage instead of thresholding it
    pub antialias: bool,
    /// Largest canvas width or height accepted before allocation
    pub max_dimension: u32,
    /// File name suggested by the save dialog
    pub default_output_name: String,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            antialias: false,
            max_dimension: 16384,
            default_output_name: "output.png".to_string(),
        }
    }
}

impl SnapConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: SnapConfig =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(Error::ConfigError("max_dimension must be positive".to_string()));
        }
        if self.default_output_name.trim().is_empty() {
            return Err(Error::ConfigError(
                "default_output_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
