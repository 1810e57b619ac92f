use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::flight::ParameterTable;
use crate::utils::constants::UNSET_DYNAMIC_PRESSURE;
use crate::utils::errors::{Result, StabilityError};

/// Moments of inertia about the body axes (kg·m²). Each analysis axis only
/// needs a subset, so missing entries are reported when they are asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Inertia {
    pub ixx: Option<f64>,
    pub iyy: Option<f64>,
    pub izz: Option<f64>,
}

impl Inertia {
    pub fn ixx(&self) -> Result<f64> {
        require(self.ixx, "Ixx")
    }

    pub fn iyy(&self) -> Result<f64> {
        require(self.iyy, "Iyy")
    }

    pub fn izz(&self) -> Result<f64> {
        require(self.izz, "Izz")
    }
}

/// Trim (reference) condition the model is linearised about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruiseCondition {
    /// True airspeed V (m/s).
    pub airspeed: f64,
    /// Air density ρ (kg/m³), only needed to derive the dynamic pressure.
    pub density: Option<f64>,
    /// Dynamic pressure q̄ (Pa), already resolved from the sentinel.
    pub dynamic_pressure: f64,
    /// Aircraft mass (kg).
    pub mass: f64,
    pub inertia: Inertia,
    /// Trim pitch angle θ (degrees).
    pub theta_deg: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Trim drag coefficient.
    pub c_d_0: Option<f64>,
    /// Trim lift coefficient.
    pub c_l_0: Option<f64>,
}

impl CruiseCondition {
    /// Builds the cruise condition from its parameter table.
    ///
    /// A `q_mean` equal to the reserved sentinel is replaced by `ρV²/2` here,
    /// so downstream calculations always read a resolved dynamic pressure.
    pub fn from_table(table: &ParameterTable) -> Result<Self> {
        let airspeed = table.value("V")?;
        let density = table.optional("rho");
        let q_mean = table.value("q_mean")?;

        let dynamic_pressure = if q_mean == UNSET_DYNAMIC_PRESSURE {
            let rho = density.ok_or_else(|| {
                StabilityError::MissingInput(
                    "required key 'rho' (q_mean is unset and must be derived)".to_string(),
                )
            })?;
            let q = resolve_dynamic_pressure(rho, airspeed);
            debug!("q_mean unset, derived dynamic pressure {:.3} Pa", q);
            q
        } else {
            q_mean
        };

        Ok(Self {
            airspeed,
            density,
            dynamic_pressure,
            mass: table.value("m")?,
            inertia: Inertia {
                ixx: table.optional("Ixx"),
                iyy: table.optional("Iyy"),
                izz: table.optional("Izz"),
            },
            theta_deg: table.value("theta")?,
            gravity: table.value("g")?,
            c_d_0: table.optional("C_D_0"),
            c_l_0: table.optional("C_L_0"),
        })
    }

    pub fn c_d_0(&self) -> Result<f64> {
        require(self.c_d_0, "C_D_0")
    }

    pub fn c_l_0(&self) -> Result<f64> {
        require(self.c_l_0, "C_L_0")
    }

    /// Business jet at 40,000 ft cruise.
    pub fn business_jet() -> Self {
        let density = 0.3809;
        let airspeed = 206.0;
        Self {
            airspeed,
            density: Some(density),
            dynamic_pressure: resolve_dynamic_pressure(density, airspeed),
            mass: 6000.0,
            inertia: Inertia {
                ixx: Some(8000.0),
                iyy: Some(25000.0),
                izz: Some(30000.0),
            },
            theta_deg: 0.0,
            gravity: 9.81,
            c_d_0: Some(0.0335),
            c_l_0: Some(0.41),
        }
    }
}

/// Dynamic pressure ρV²/2.
#[inline]
pub fn resolve_dynamic_pressure(density: f64, airspeed: f64) -> f64 {
    (density * airspeed.powi(2)) / 2.0
}

fn require(value: Option<f64>, key: &str) -> Result<f64> {
    value.ok_or_else(|| StabilityError::MissingInput(format!("required key '{}'", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_table() -> ParameterTable {
        ParameterTable::new()
            .with("V", 206.0)
            .with("rho", 0.3809)
            .with("m", 6000.0)
            .with("Iyy", 25000.0)
            .with("theta", 0.0)
            .with("g", 9.81)
            .with("C_D_0", 0.0335)
            .with("C_L_0", 0.41)
    }

    #[test]
    fn test_sentinel_dynamic_pressure() {
        let table = base_table().with("q_mean", UNSET_DYNAMIC_PRESSURE);
        let cruise = CruiseCondition::from_table(&table).unwrap();
        assert_relative_eq!(cruise.dynamic_pressure, 0.3809 * 206.0 * 206.0 / 2.0);
    }

    #[test]
    fn test_explicit_dynamic_pressure_is_kept() {
        let table = base_table().with("q_mean", 8000.0);
        let cruise = CruiseCondition::from_table(&table).unwrap();
        assert_eq!(cruise.dynamic_pressure, 8000.0);
    }

    #[test]
    fn test_sentinel_without_density() {
        let mut table = ParameterTable::new()
            .with("V", 206.0)
            .with("m", 6000.0)
            .with("theta", 0.0)
            .with("g", 9.81);
        table.insert("q_mean", crate::components::flight::Parameter::new(-1111.0));

        assert!(matches!(
            CruiseCondition::from_table(&table),
            Err(StabilityError::MissingInput(_))
        ));
    }

    #[test]
    fn test_inertia_lookup() {
        let table = base_table().with("q_mean", 8000.0);
        let cruise = CruiseCondition::from_table(&table).unwrap();
        assert_eq!(cruise.inertia.iyy().unwrap(), 25000.0);
        assert!(matches!(
            cruise.inertia.ixx(),
            Err(StabilityError::MissingInput(_))
        ));
    }
}
