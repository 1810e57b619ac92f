use serde::{Deserialize, Serialize};

use crate::components::flight::ParameterTable;
use crate::components::Axis;
use crate::utils::errors::Result;

/// Dimensionless longitudinal stability and control derivatives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalCoefficients {
    /// Drag coefficient due to forward speed.
    pub c_d_u: f64,
    /// Lift curve slope.
    pub c_l_alpha: f64,
    /// Lift coefficient due to forward speed.
    pub c_l_u: f64,
    /// Lift coefficient due to angle of attack rate (α̇).
    pub c_l_alpha_dot: f64,
    /// Lift coefficient due to pitch rate (q).
    pub c_l_q: f64,
    /// Pitch moment coefficient due to forward speed.
    pub c_m_u: f64,
    /// Pitch moment coefficient due to angle of attack (α).
    pub c_m_alpha: f64,
    /// Pitch moment coefficient due to angle of attack rate (α̇).
    pub c_m_alpha_dot: f64,
    /// Pitch moment coefficient due to pitch rate (q).
    pub c_m_q: f64,
    /// Drag coefficient due to elevator deflection.
    pub c_d_delta_e: f64,
    /// Lift coefficient due to elevator deflection.
    pub c_l_delta_e: f64,
    /// Pitch moment coefficient due to elevator deflection.
    pub c_m_delta_e: f64,
    /// Drag coefficient due to throttle.
    pub c_d_delta_t: f64,
    /// Lift coefficient due to throttle.
    pub c_l_delta_t: f64,
    /// Pitch moment coefficient due to throttle.
    pub c_m_delta_t: f64,
}

impl LongitudinalCoefficients {
    /// Throttle derivatives are optional and default to zero.
    pub fn from_table(table: &ParameterTable) -> Result<Self> {
        Ok(Self {
            c_d_u: table.value("C_D_u")?,
            c_l_alpha: table.value("C_L_alpha")?,
            c_l_u: table.value("C_L_u")?,
            c_l_alpha_dot: table.value("C_L_alpha_dot")?,
            c_l_q: table.value("C_L_q")?,
            c_m_u: table.value("C_m_u")?,
            c_m_alpha: table.value("C_m_alpha")?,
            c_m_alpha_dot: table.value("C_m_alpha_dot")?,
            c_m_q: table.value("C_m_q")?,
            c_d_delta_e: table.value("C_D_d_E")?,
            c_l_delta_e: table.value("C_L_d_E")?,
            c_m_delta_e: table.value("C_m_d_E")?,
            c_d_delta_t: table.optional("C_D_d_T").unwrap_or(0.0),
            c_l_delta_t: table.optional("C_L_d_T").unwrap_or(0.0),
            c_m_delta_t: table.optional("C_m_d_T").unwrap_or(0.0),
        })
    }

    pub fn business_jet() -> Self {
        Self {
            c_d_u: 0.104,
            c_l_alpha: 5.84,
            c_l_u: 0.40,
            c_l_alpha_dot: 2.2,
            c_l_q: 4.7,
            c_m_u: 0.05,
            c_m_alpha: -0.64,
            c_m_alpha_dot: -6.7,
            c_m_q: -15.5,
            c_d_delta_e: 0.0,
            c_l_delta_e: 0.46,
            c_m_delta_e: -1.24,
            c_d_delta_t: 0.0,
            c_l_delta_t: 0.0,
            c_m_delta_t: 0.0,
        }
    }
}

/// Dimensionless lateral-directional stability and control derivatives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralCoefficients {
    /// Side-force coefficient due to sideslip angle (β).
    pub c_y_beta: f64,
    /// Side-force coefficient due to roll rate (p).
    pub c_y_p: f64,
    /// Side-force coefficient due to yaw rate (r).
    pub c_y_r: f64,
    /// Roll moment coefficient due to sideslip angle (β).
    pub c_l_beta: f64,
    /// Roll moment coefficient due to roll rate (p).
    pub c_l_p: f64,
    /// Roll moment coefficient due to yaw rate (r).
    pub c_l_r: f64,
    /// Yaw moment coefficient due to sideslip angle (β).
    pub c_n_beta: f64,
    /// Yaw moment coefficient due to roll rate (p).
    pub c_n_p: f64,
    /// Yaw moment coefficient due to yaw rate (r).
    pub c_n_r: f64,
    /// Side-force coefficient due to aileron deflection.
    pub c_y_delta_a: f64,
    /// Side-force coefficient due to rudder deflection.
    pub c_y_delta_r: f64,
    /// Roll moment coefficient due to aileron deflection.
    pub c_l_delta_a: f64,
    /// Roll moment coefficient due to rudder deflection.
    pub c_l_delta_r: f64,
    /// Yaw moment coefficient due to aileron deflection.
    pub c_n_delta_a: f64,
    /// Yaw moment coefficient due to rudder deflection.
    pub c_n_delta_r: f64,
}

impl LateralCoefficients {
    /// `C_y_d_A` is optional and defaults to zero.
    pub fn from_table(table: &ParameterTable) -> Result<Self> {
        Ok(Self {
            c_y_beta: table.value("C_y_beta")?,
            c_y_p: table.value("C_y_p")?,
            c_y_r: table.value("C_y_r")?,
            c_l_beta: table.value("C_l_beta")?,
            c_l_p: table.value("C_l_p")?,
            c_l_r: table.value("C_l_r")?,
            c_n_beta: table.value("C_n_beta")?,
            c_n_p: table.value("C_n_p")?,
            c_n_r: table.value("C_n_r")?,
            c_y_delta_a: table.optional("C_y_d_A").unwrap_or(0.0),
            c_y_delta_r: table.value("C_y_d_R")?,
            c_l_delta_a: table.value("C_l_d_A")?,
            c_l_delta_r: table.value("C_l_d_R")?,
            c_n_delta_a: table.value("C_n_d_A")?,
            c_n_delta_r: table.value("C_n_d_R")?,
        })
    }

    pub fn business_jet() -> Self {
        Self {
            c_y_beta: -0.72,
            c_y_p: 0.0,
            c_y_r: 0.0,
            c_l_beta: -0.13,
            c_l_p: -0.45,
            c_l_r: 0.10,
            c_n_beta: 0.137,
            c_n_p: -0.016,
            c_n_r: -0.16,
            c_y_delta_a: 0.0,
            c_y_delta_r: 0.157,
            c_l_delta_a: 0.054,
            c_l_delta_r: 0.0147,
            c_n_delta_a: -0.0075,
            c_n_delta_r: -0.0726,
        }
    }
}

/// The coefficient table of one analysis axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AerodynamicCoefficients {
    Longitudinal(LongitudinalCoefficients),
    Lateral(LateralCoefficients),
}

impl AerodynamicCoefficients {
    pub fn from_table(axis: Axis, table: &ParameterTable) -> Result<Self> {
        Ok(match axis {
            Axis::Longitudinal => Self::Longitudinal(LongitudinalCoefficients::from_table(table)?),
            Axis::Lateral => Self::Lateral(LateralCoefficients::from_table(table)?),
        })
    }

    pub fn axis(&self) -> Axis {
        match self {
            Self::Longitudinal(_) => Axis::Longitudinal,
            Self::Lateral(_) => Axis::Lateral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::StabilityError;

    fn longitudinal_table() -> ParameterTable {
        ParameterTable::new()
            .with("C_D_u", 0.104)
            .with("C_L_alpha", 5.84)
            .with("C_L_u", 0.40)
            .with("C_L_alpha_dot", 2.2)
            .with("C_L_q", 4.7)
            .with("C_m_u", 0.05)
            .with("C_m_alpha", -0.64)
            .with("C_m_alpha_dot", -6.7)
            .with("C_m_q", -15.5)
            .with("C_D_d_E", 0.0)
            .with("C_L_d_E", 0.46)
            .with("C_m_d_E", -1.24)
    }

    #[test]
    fn test_longitudinal_from_table() {
        let coefficients = LongitudinalCoefficients::from_table(&longitudinal_table()).unwrap();
        assert_eq!(coefficients, LongitudinalCoefficients::business_jet());
    }

    #[test]
    fn test_longitudinal_throttle_is_optional() {
        let table = longitudinal_table().with("C_D_d_T", -0.05);
        let coefficients = LongitudinalCoefficients::from_table(&table).unwrap();
        assert_eq!(coefficients.c_d_delta_t, -0.05);
        assert_eq!(coefficients.c_m_delta_t, 0.0);
    }

    #[test]
    fn test_lateral_missing_rudder_derivative() {
        let table = ParameterTable::new()
            .with("C_y_beta", -0.72)
            .with("C_y_p", 0.0)
            .with("C_y_r", 0.0)
            .with("C_l_beta", -0.13)
            .with("C_l_p", -0.45)
            .with("C_l_r", 0.10)
            .with("C_n_beta", 0.137)
            .with("C_n_p", -0.016)
            .with("C_n_r", -0.16)
            .with("C_y_d_R", 0.157)
            .with("C_l_d_A", 0.054)
            .with("C_l_d_R", 0.0147)
            .with("C_n_d_A", -0.0075);

        match AerodynamicCoefficients::from_table(Axis::Lateral, &table) {
            Err(StabilityError::MissingInput(msg)) => assert!(msg.contains("C_n_d_R")),
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }
}
