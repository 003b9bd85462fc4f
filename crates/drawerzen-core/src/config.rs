//! Engine configuration
//!
//! Everything that used to be module-level state in a layout designer lives
//! here and is handed to the engine at construction:
//! - Grid pitch and display emphasis
//! - Bin size constraints
//! - Standard catalog sizes used by gap filling
//! - Defaults for newly created bins
//! - Gap-fill limits
//!
//! Supports JSON and TOML files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coords::GRID_PITCH_MM;
use crate::error::{ConfigError, ConfigResult};
use crate::model::BinSize;

/// Size limits every drawn bin must satisfy (mm and mm²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinConstraints {
    pub min_width: f64,
    pub max_width: f64,
    pub min_length: f64,
    pub max_length: f64,
    pub min_area: f64,
}

impl Default for BinConstraints {
    fn default() -> Self {
        Self {
            min_width: 21.0,
            max_width: 420.0,
            min_length: 21.0,
            max_length: 420.0,
            min_area: 882.0,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Cell size all placements snap to.
    pub grid_pitch_mm: f64,
    /// Every n-th grid line is emphasised. Display only.
    pub emphasis_every: u32,
    pub constraints: BinConstraints,
    /// Candidate sizes for gap filling; sorted by the engine before use.
    pub standard_sizes: Vec<BinSize>,
    /// Colors cycled through for generated bins.
    pub palette: Vec<String>,
    pub default_bin_height_mm: f64,
    pub default_color: String,
    pub default_colorway: String,
    /// Smallest gap, in cells, the gap scan reports.
    pub min_gap_cells: u32,
    /// Hard ceiling on gap-fill passes.
    pub max_fill_iterations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let sizes: &[(f64, f64)] = &[
            (168.0, 168.0),
            (168.0, 126.0),
            (126.0, 168.0),
            (168.0, 84.0),
            (84.0, 168.0),
            (126.0, 126.0),
            (126.0, 84.0),
            (84.0, 126.0),
            (84.0, 84.0),
            (126.0, 42.0),
            (42.0, 126.0),
            (84.0, 42.0),
            (42.0, 84.0),
            (63.0, 42.0),
            (42.0, 63.0),
            (42.0, 42.0),
            (42.0, 21.0),
            (21.0, 42.0),
        ];
        Self {
            grid_pitch_mm: GRID_PITCH_MM,
            emphasis_every: 2,
            constraints: BinConstraints::default(),
            standard_sizes: sizes.iter().map(|&(w, l)| BinSize::new(w, l)).collect(),
            palette: [
                "#F5E6C8", "#A8D5BA", "#F7C59F", "#9CC3E6", "#E8A0BF", "#C3B1E1", "#FFE08A",
                "#B5C99A",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            default_bin_height_mm: 21.0,
            default_color: "#F5E6C8".to_string(),
            default_colorway: "cream".to_string(),
            min_gap_cells: 2,
            max_fill_iterations: 200,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;

        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.grid_pitch_mm.is_finite() && self.grid_pitch_mm > 0.0) {
            return Err(ConfigError::invalid(
                "gridPitchMm",
                "must be a positive number",
            ));
        }

        let c = &self.constraints;
        if c.min_width > c.max_width {
            return Err(ConfigError::invalid(
                "constraints.minWidth",
                "must not exceed maxWidth",
            ));
        }
        if c.min_length > c.max_length {
            return Err(ConfigError::invalid(
                "constraints.minLength",
                "must not exceed maxLength",
            ));
        }
        if c.min_width < 0.0 || c.min_length < 0.0 || c.min_area < 0.0 {
            return Err(ConfigError::invalid(
                "constraints",
                "minimums must not be negative",
            ));
        }

        if let Some(size) = self
            .standard_sizes
            .iter()
            .find(|s| !(s.width > 0.0 && s.length > 0.0))
        {
            return Err(ConfigError::invalid(
                "standardSizes",
                format!("{}x{} is not a positive size", size.width, size.length),
            ));
        }

        if self.palette.is_empty() {
            return Err(ConfigError::invalid("palette", "must contain a color"));
        }

        if self.max_fill_iterations == 0 {
            return Err(ConfigError::invalid(
                "maxFillIterations",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// Color for the `index`-th generated bin.
    pub fn palette_color(&self, index: usize) -> &str {
        match self.palette.len() {
            0 => &self.default_color,
            len => &self.palette[index % len],
        }
    }
}
