use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::components::Axis;
use crate::utils::errors::{Result, StabilityError};

/// Dimensional longitudinal derivatives (SI units, body axes).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalDerivatives {
    pub x_u: f64,
    pub x_w: f64,
    pub z_u: f64,
    pub z_w: f64,
    pub z_w_dot: f64,
    pub z_q: f64,
    pub m_u: f64,
    pub m_w: f64,
    pub m_w_dot: f64,
    pub m_q: f64,
    pub x_delta_e: f64,
    pub z_delta_e: f64,
    pub m_delta_e: f64,
    pub x_delta_t: f64,
    pub z_delta_t: f64,
    pub m_delta_t: f64,
}

/// Dimensional lateral-directional derivatives (SI units, body axes).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralDerivatives {
    pub y_v: f64,
    pub y_p: f64,
    pub y_r: f64,
    pub l_v: f64,
    pub l_p: f64,
    pub l_r: f64,
    pub n_v: f64,
    pub n_p: f64,
    pub n_r: f64,
    pub y_delta_a: f64,
    pub y_delta_r: f64,
    pub l_delta_a: f64,
    pub l_delta_r: f64,
    pub n_delta_a: f64,
    pub n_delta_r: f64,
}

/// Closed set of derivative names that can be inspected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivativeName {
    Xu,
    Xw,
    Zu,
    Zw,
    ZwDot,
    Zq,
    Mu,
    Mw,
    MwDot,
    Mq,
    XDeltaE,
    ZDeltaE,
    MDeltaE,
    XDeltaT,
    ZDeltaT,
    MDeltaT,
    Yv,
    Yp,
    Yr,
    Lv,
    Lp,
    Lr,
    Nv,
    Np,
    Nr,
    YDeltaA,
    YDeltaR,
    LDeltaA,
    LDeltaR,
    NDeltaA,
    NDeltaR,
}

impl DerivativeName {
    pub const LONGITUDINAL: [DerivativeName; 16] = [
        Self::Xu,
        Self::Xw,
        Self::Zu,
        Self::Zw,
        Self::ZwDot,
        Self::Zq,
        Self::Mu,
        Self::Mw,
        Self::MwDot,
        Self::Mq,
        Self::XDeltaE,
        Self::ZDeltaE,
        Self::MDeltaE,
        Self::XDeltaT,
        Self::ZDeltaT,
        Self::MDeltaT,
    ];

    pub const LATERAL: [DerivativeName; 15] = [
        Self::Yv,
        Self::Yp,
        Self::Yr,
        Self::Lv,
        Self::Lp,
        Self::Lr,
        Self::Nv,
        Self::Np,
        Self::Nr,
        Self::YDeltaA,
        Self::YDeltaR,
        Self::LDeltaA,
        Self::LDeltaR,
        Self::NDeltaA,
        Self::NDeltaR,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xu => "Xu",
            Self::Xw => "Xw",
            Self::Zu => "Zu",
            Self::Zw => "Zw",
            Self::ZwDot => "Zw_dot",
            Self::Zq => "Zq",
            Self::Mu => "Mu",
            Self::Mw => "Mw",
            Self::MwDot => "Mw_dot",
            Self::Mq => "Mq",
            Self::XDeltaE => "X_delta_e",
            Self::ZDeltaE => "Z_delta_e",
            Self::MDeltaE => "M_delta_e",
            Self::XDeltaT => "X_delta_T",
            Self::ZDeltaT => "Z_delta_T",
            Self::MDeltaT => "M_delta_T",
            Self::Yv => "Yv",
            Self::Yp => "Yp",
            Self::Yr => "Yr",
            Self::Lv => "Lv",
            Self::Lp => "Lp",
            Self::Lr => "Lr",
            Self::Nv => "Nv",
            Self::Np => "Np",
            Self::Nr => "Nr",
            Self::YDeltaA => "Y_delta_a",
            Self::YDeltaR => "Y_delta_r",
            Self::LDeltaA => "L_delta_a",
            Self::LDeltaR => "L_delta_r",
            Self::NDeltaA => "N_delta_a",
            Self::NDeltaR => "N_delta_r",
        }
    }
}

impl fmt::Display for DerivativeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DerivativeName {
    type Err = StabilityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::LONGITUDINAL
            .iter()
            .chain(Self::LATERAL.iter())
            .find(|name| name.as_str() == s)
            .copied()
            .ok_or_else(|| StabilityError::MissingInput(format!("unknown derivative '{}'", s)))
    }
}

/// Output of the derivative calculator for one axis. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DimensionalDerivativeSet {
    Longitudinal(LongitudinalDerivatives),
    Lateral(LateralDerivatives),
}

impl DimensionalDerivativeSet {
    pub fn axis(&self) -> Axis {
        match self {
            Self::Longitudinal(_) => Axis::Longitudinal,
            Self::Lateral(_) => Axis::Lateral,
        }
    }

    /// Looks a derivative up by name (e.g. `"Mw_dot"`).
    ///
    /// Names outside the closed set, or belonging to the other axis, are
    /// reported as missing input.
    pub fn get(&self, name: &str) -> Result<f64> {
        let key: DerivativeName = name.parse()?;
        self.value(key).ok_or_else(|| {
            StabilityError::MissingInput(format!(
                "derivative '{}' is not part of the {} set",
                name,
                self.axis()
            ))
        })
    }

    pub fn value(&self, name: DerivativeName) -> Option<f64> {
        use DerivativeName::*;
        match (self, name) {
            (Self::Longitudinal(d), Xu) => Some(d.x_u),
            (Self::Longitudinal(d), Xw) => Some(d.x_w),
            (Self::Longitudinal(d), Zu) => Some(d.z_u),
            (Self::Longitudinal(d), Zw) => Some(d.z_w),
            (Self::Longitudinal(d), ZwDot) => Some(d.z_w_dot),
            (Self::Longitudinal(d), Zq) => Some(d.z_q),
            (Self::Longitudinal(d), Mu) => Some(d.m_u),
            (Self::Longitudinal(d), Mw) => Some(d.m_w),
            (Self::Longitudinal(d), MwDot) => Some(d.m_w_dot),
            (Self::Longitudinal(d), Mq) => Some(d.m_q),
            (Self::Longitudinal(d), XDeltaE) => Some(d.x_delta_e),
            (Self::Longitudinal(d), ZDeltaE) => Some(d.z_delta_e),
            (Self::Longitudinal(d), MDeltaE) => Some(d.m_delta_e),
            (Self::Longitudinal(d), XDeltaT) => Some(d.x_delta_t),
            (Self::Longitudinal(d), ZDeltaT) => Some(d.z_delta_t),
            (Self::Longitudinal(d), MDeltaT) => Some(d.m_delta_t),
            (Self::Lateral(d), Yv) => Some(d.y_v),
            (Self::Lateral(d), Yp) => Some(d.y_p),
            (Self::Lateral(d), Yr) => Some(d.y_r),
            (Self::Lateral(d), Lv) => Some(d.l_v),
            (Self::Lateral(d), Lp) => Some(d.l_p),
            (Self::Lateral(d), Lr) => Some(d.l_r),
            (Self::Lateral(d), Nv) => Some(d.n_v),
            (Self::Lateral(d), Np) => Some(d.n_p),
            (Self::Lateral(d), Nr) => Some(d.n_r),
            (Self::Lateral(d), YDeltaA) => Some(d.y_delta_a),
            (Self::Lateral(d), YDeltaR) => Some(d.y_delta_r),
            (Self::Lateral(d), LDeltaA) => Some(d.l_delta_a),
            (Self::Lateral(d), LDeltaR) => Some(d.l_delta_r),
            (Self::Lateral(d), NDeltaA) => Some(d.n_delta_a),
            (Self::Lateral(d), NDeltaR) => Some(d.n_delta_r),
            _ => None,
        }
    }

    /// Name/value pairs of every derivative in this set, in a stable order.
    pub fn entries(&self) -> Vec<(DerivativeName, f64)> {
        let names: &[DerivativeName] = match self {
            Self::Longitudinal(_) => &DerivativeName::LONGITUDINAL,
            Self::Lateral(_) => &DerivativeName::LATERAL,
        };
        names
            .iter()
            .filter_map(|&name| self.value(name).map(|v| (name, v)))
            .collect()
    }
}
