use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::constants::{LATERAL_MATRIX_FILE, LONGITUDINAL_MATRIX_FILE};
use crate::utils::errors::StabilityError;

/// Decoupled set of linearised equations of motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// State (u, w, q, θ), controls (elevator, throttle).
    Longitudinal,
    /// State (v, p, r, φ), controls (aileron, rudder).
    Lateral,
}

impl Axis {
    pub fn state_names(&self) -> [&'static str; 4] {
        match self {
            Axis::Longitudinal => ["u", "w", "q", "theta"],
            Axis::Lateral => ["v", "p", "r", "phi"],
        }
    }

    /// Control channels in the column order of the control matrix.
    pub fn control_names(&self) -> [&'static str; 2] {
        match self {
            Axis::Longitudinal => ["elevator", "throttle"],
            Axis::Lateral => ["aileron", "rudder"],
        }
    }

    /// Symbol used for a control channel in transfer-function labels.
    pub fn control_symbols(&self) -> [&'static str; 2] {
        match self {
            Axis::Longitudinal => ["delta_e", "delta_T"],
            Axis::Lateral => ["delta_a", "delta_r"],
        }
    }

    /// The last row of the system matrix: the body rate integrates to the attitude angle.
    pub fn kinematic_row(&self) -> [f64; 4] {
        match self {
            Axis::Longitudinal => [0.0, 0.0, 1.0, 0.0],
            Axis::Lateral => [0.0, 1.0, 0.0, 0.0],
        }
    }

    pub fn matrix_file_name(&self) -> &'static str {
        match self {
            Axis::Longitudinal => LONGITUDINAL_MATRIX_FILE,
            Axis::Lateral => LATERAL_MATRIX_FILE,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitudinal => write!(f, "longitudinal"),
            Axis::Lateral => write!(f, "lateral"),
        }
    }
}

impl FromStr for Axis {
    type Err = StabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "longitudinal" | "lon" | "long" => Ok(Axis::Longitudinal),
            "lateral" | "lat" => Ok(Axis::Lateral),
            other => Err(StabilityError::InvalidConfiguration(format!(
                "unknown axis '{}'",
                other
            ))),
        }
    }
}
