use nalgebra::{Complex, Matrix4, Vector4};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::components::{Axis, Polynomial};
use crate::utils::errors::{Result, StabilityError};
use crate::utils::math::{damping_ratio, natural_frequency};

/// Eigen-decomposition of a system matrix. Column `i` of `eigenvectors`
/// belongs to `eigenvalues[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSet {
    pub eigenvalues: Vector4<Complex<f64>>,
    pub eigenvectors: Matrix4<Complex<f64>>,
}

impl ModalSet {
    pub fn eigenvector(&self, index: usize) -> Vector4<Complex<f64>> {
        self.eigenvectors.column(index).into_owned()
    }

    /// Monic characteristic polynomial rebuilt from the eigenvalues.
    pub fn characteristic_polynomial(&self) -> Polynomial {
        Polynomial::from_roots(self.eigenvalues.as_slice())
    }

    /// Eigenvalue indices sorted by ascending real part.
    pub fn indices_by_real_part(&self) -> [usize; 4] {
        let mut idx = [0, 1, 2, 3];
        idx.sort_by(|&a, &b| {
            self.eigenvalues[a]
                .re
                .partial_cmp(&self.eigenvalues[b].re)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        idx
    }
}

/// Named physical modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    /// Roll subsidence, a fast real mode.
    Rolling,
    /// Slow real mode.
    Spiral,
    DutchRoll,
    ShortPeriod,
    Phugoid,
}

impl ModeKind {
    pub fn for_axis(axis: Axis) -> &'static [ModeKind] {
        match axis {
            Axis::Longitudinal => &[ModeKind::ShortPeriod, ModeKind::Phugoid],
            Axis::Lateral => &[ModeKind::Rolling, ModeKind::Spiral, ModeKind::DutchRoll],
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            ModeKind::Rolling | ModeKind::Spiral | ModeKind::DutchRoll => Axis::Lateral,
            ModeKind::ShortPeriod | ModeKind::Phugoid => Axis::Longitudinal,
        }
    }

    /// Real first-order modes respond as a pure exponential.
    pub fn is_real(&self) -> bool {
        matches!(self, ModeKind::Rolling | ModeKind::Spiral)
    }

    /// Horizon used when the mode time constant cannot be used (s).
    pub fn default_horizon(&self) -> f64 {
        match self {
            ModeKind::Rolling => 20.0,
            ModeKind::Spiral => 2500.0,
            ModeKind::DutchRoll => 100.0,
            ModeKind::ShortPeriod => 10.0,
            ModeKind::Phugoid => 600.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModeKind::Rolling => "Rolling",
            ModeKind::Spiral => "Spiral",
            ModeKind::DutchRoll => "Dutch Roll",
            ModeKind::ShortPeriod => "Short Period",
            ModeKind::Phugoid => "Phugoid",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModeKind {
    type Err = StabilityError;

    /// Accepts labels such as `"Dutch Roll"`, `"short_period"` or `"phugoid"`.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "rolling" | "roll" => Ok(ModeKind::Rolling),
            "spiral" => Ok(ModeKind::Spiral),
            "dutchroll" => Ok(ModeKind::DutchRoll),
            "shortperiod" => Ok(ModeKind::ShortPeriod),
            "phugoid" => Ok(ModeKind::Phugoid),
            _ => Err(StabilityError::UnknownMode(s.to_string())),
        }
    }
}

/// An identified mode and the eigenvalue that represents it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    pub kind: ModeKind,
    /// Index into [`ModalSet::eigenvalues`].
    pub index: usize,
    pub eigenvalue: Complex<f64>,
}

impl Mode {
    pub fn natural_frequency(&self) -> f64 {
        natural_frequency(self.eigenvalue)
    }

    pub fn damping_ratio(&self) -> f64 {
        damping_ratio(self.eigenvalue)
    }

    /// Time constant `1/|Re λ|` (s).
    pub fn time_constant(&self) -> f64 {
        1.0 / self.eigenvalue.re.abs()
    }
}

/// The modes found for one axis, in [`ModeKind::for_axis`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifiedModes {
    pub axis: Axis,
    pub modes: Vec<Mode>,
}

impl IdentifiedModes {
    pub fn get(&self, kind: ModeKind) -> Result<&Mode> {
        self.modes.iter().find(|m| m.kind == kind).ok_or_else(|| {
            StabilityError::UnknownMode(format!("{} is not a {} mode", kind, self.axis))
        })
    }

    pub fn natural_frequencies(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.natural_frequency()).collect()
    }

    pub fn damping_ratios(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.damping_ratio()).collect()
    }
}

/// One sampled state trace of a mode response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSeries {
    pub state: String,
    pub label: String,
    pub values: Vec<f64>,
}

/// Time response of the four states for a single mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeResponse {
    pub mode: ModeKind,
    pub time: Vec<f64>,
    pub series: Vec<ResponseSeries>,
}

impl ModeResponse {
    pub fn horizon(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    pub fn series_for(&self, state: &str) -> Option<&ResponseSeries> {
        self.series.iter().find(|s| s.state == state)
    }

    /// State values at sample `k`, in state order.
    pub fn sample(&self, k: usize) -> Vec<f64> {
        self.series.iter().map(|s| s.values[k]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_parse() {
        assert_eq!("Dutch Roll".parse::<ModeKind>().unwrap(), ModeKind::DutchRoll);
        assert_eq!("short_period".parse::<ModeKind>().unwrap(), ModeKind::ShortPeriod);
        assert_eq!("Rolling".parse::<ModeKind>().unwrap(), ModeKind::Rolling);
        assert!(matches!(
            "yaw".parse::<ModeKind>(),
            Err(StabilityError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_mode_axes() {
        for axis in [Axis::Longitudinal, Axis::Lateral] {
            assert!(ModeKind::for_axis(axis).iter().all(|m| m.axis() == axis));
        }
        assert!(ModeKind::Spiral.is_real());
        assert!(!ModeKind::Phugoid.is_real());
    }

    #[test]
    fn test_sort_by_real_part() {
        let modal = ModalSet {
            eigenvalues: Vector4::new(
                Complex::new(-0.01, 0.1),
                Complex::new(-0.01, -0.1),
                Complex::new(-1.2, 3.0),
                Complex::new(-1.2, -3.0),
            ),
            eigenvectors: Matrix4::identity(),
        };
        let idx = modal.indices_by_real_part();
        assert_eq!(modal.eigenvalues[idx[0]].re, -1.2);
        assert_eq!(modal.eigenvalues[idx[3]].re, -0.01);
    }
}
