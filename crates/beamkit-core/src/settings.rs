//! Job configuration for toolpath planning and G-code generation.

use crate::error::{ParameterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one cutting job.
///
/// Owned by the caller and read-only to the planning pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSettings {
    /// X offset of the work area's minimum corner from the machine origin (mm).
    pub offset_x: f64,
    /// Y offset of the work area's minimum corner from the machine origin (mm).
    pub offset_y: f64,
    /// Number of passes over each shape.
    pub passes: u32,
    /// Total cut depth across all passes (mm, positive magnitude).
    pub depth: f64,
    /// Feed rate for cutting motions (mm/min).
    pub draw_feed: f64,
    /// Feed rate for repositioning motions (mm/min).
    pub travel_feed: f64,
    /// Beam power as a percentage (0-100).
    pub power_percent: f64,
    /// Full-scale beam power value for the S parameter (GRBL-style).
    pub power_scale: f64,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            passes: 1,
            depth: 4.0,
            draw_feed: 75.0,
            travel_feed: 1000.0,
            power_percent: 100.0,
            power_scale: 1000.0,
        }
    }
}

impl JobSettings {
    /// Validates the settings, naming the first offending parameter.
    pub fn validate(&self) -> std::result::Result<(), ParameterError> {
        if self.passes < 1 {
            return Err(ParameterError::OutOfRange {
                name: "passes".to_string(),
                value: self.passes as f64,
                min: 1.0,
                max: 1000.0,
            });
        }
        if !self.depth.is_finite() || self.depth < 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "depth".to_string(),
                reason: "must be a non-negative finite number".to_string(),
            });
        }
        if !(self.draw_feed > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "draw_feed".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !(self.travel_feed > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "travel_feed".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !(0.0..=100.0).contains(&self.power_percent) {
            return Err(ParameterError::OutOfRange {
                name: "power_percent".to_string(),
                value: self.power_percent,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(())
    }

    /// Height decrement applied after each pass.
    pub fn step_down(&self) -> f64 {
        self.depth / self.passes as f64
    }

    /// Loads settings from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves settings to a JSON file.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
