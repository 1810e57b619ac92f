use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::constants::MAX_SCHUR_ITERATIONS;
use crate::utils::errors::{Result, StabilityError};

/// Numerical and presentation settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of samples in each mode response (inclusive of both ends).
    pub samples: usize,
    /// Response horizon in multiples of the mode time constant.
    pub horizon_time_constants: f64,
    /// Upper bound on any response horizon (s).
    pub max_horizon: f64,
    /// Relative distance under which a numerator and a denominator root cancel.
    pub root_tolerance: f64,
    /// Relative size under which a transfer-function coefficient is dropped.
    pub coefficient_tolerance: f64,
    /// Significant digits used when rendering coefficients.
    pub significant_digits: u32,
    /// Convergence tolerance of the Schur decomposition.
    pub eigen_tolerance: f64,
    /// Iteration cap of the Schur decomposition.
    pub max_iterations: usize,
    pub plot: PlotSettings,
}

/// Mode-response image settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub width: u32,
    pub height: u32,
    /// Stroke width of the response traces (px).
    pub line_width: f32,
    /// Number of grid divisions along each axis.
    pub grid_divisions: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            samples: 1000,
            horizon_time_constants: 5.0,
            max_horizon: 5000.0,
            root_tolerance: 1e-6,
            coefficient_tolerance: 1e-12,
            significant_digits: 6,
            eigen_tolerance: f64::EPSILON,
            max_iterations: MAX_SCHUR_ITERATIONS,
            plot: PlotSettings::default(),
        }
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            line_width: 2.0,
            grid_divisions: 10,
        }
    }
}

impl AnalysisSettings {
    /// Loads settings from a YAML file; absent fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(StabilityError::InvalidConfiguration(
                "samples must be at least 2".to_string(),
            ));
        }
        if !(self.horizon_time_constants > 0.0) || !(self.max_horizon > 0.0) {
            return Err(StabilityError::InvalidConfiguration(
                "response horizons must be positive".to_string(),
            ));
        }
        if self.significant_digits == 0 {
            return Err(StabilityError::InvalidConfiguration(
                "significant_digits must be at least 1".to_string(),
            ));
        }
        if self.plot.width == 0 || self.plot.height == 0 {
            return Err(StabilityError::InvalidConfiguration(
                "plot dimensions must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = AnalysisSettings::from_yaml_str("samples: 250\nplot:\n  width: 800\n").unwrap();
        assert_eq!(settings.samples, 250);
        assert_eq!(settings.plot.width, 800);
        assert_eq!(settings.plot.height, 500);
        assert_eq!(settings.max_horizon, AnalysisSettings::default().max_horizon);
    }

    #[test]
    fn test_invalid_samples() {
        assert!(matches!(
            AnalysisSettings::from_yaml_str("samples: 1"),
            Err(StabilityError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            AnalysisSettings::from_yaml_str("samples: [1, 2"),
            Err(StabilityError::Settings(_))
        ));
    }
}
