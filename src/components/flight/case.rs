use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::flight::{
    AerodynamicCoefficients, CruiseCondition, Geometry, LateralCoefficients,
    LongitudinalCoefficients, ParameterTable,
};
use crate::components::Axis;
use crate::utils::errors::{Result, StabilityError};

/// Everything the engine needs for one flight condition on one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightCase {
    /// Name of the aircraft.
    pub name: String,
    /// The cruise condition the model is linearised about.
    pub cruise: CruiseCondition,
    /// Wing geometry.
    pub geometry: Geometry,
    /// Dimensionless derivatives for the analysed axis.
    pub coefficients: AerodynamicCoefficients,
    /// The raw cruise table, kept for lookups by name.
    #[serde(default)]
    pub cruise_table: ParameterTable,
}

/// Where a flight case comes from.
#[derive(Debug, Clone)]
pub enum FlightCaseSource {
    /// The built in business jet preset.
    BusinessJet(Axis),
    /// Three JSON files: cruise condition, coefficients, geometry.
    Files {
        axis: Axis,
        cruise: PathBuf,
        coefficients: PathBuf,
        geometry: PathBuf,
    },
}

impl FlightCase {
    /// Creates a flight case from a given source.
    ///
    /// # Arguments
    /// * `source` - Either the programmed preset or a set of JSON files.
    ///
    /// # Returns
    /// The loaded case, or the first missing key / format error encountered.
    pub fn new(source: FlightCaseSource) -> Result<Self> {
        match source {
            FlightCaseSource::BusinessJet(axis) => Ok(Self::business_jet(axis)),
            FlightCaseSource::Files {
                axis,
                cruise,
                coefficients,
                geometry,
            } => Self::from_files(axis, cruise, coefficients, geometry),
        }
    }

    pub fn from_tables(
        name: &str,
        axis: Axis,
        cruise: &ParameterTable,
        coefficients: &ParameterTable,
        geometry: &ParameterTable,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            cruise: CruiseCondition::from_table(cruise)?,
            geometry: Geometry::from_table(geometry)?,
            coefficients: AerodynamicCoefficients::from_table(axis, coefficients)?,
            cruise_table: cruise.clone(),
        })
    }

    pub fn from_json_strs(
        axis: Axis,
        cruise: &str,
        coefficients: &str,
        geometry: &str,
    ) -> Result<Self> {
        Self::from_tables(
            "aircraft",
            axis,
            &ParameterTable::from_json_str(cruise)?,
            &ParameterTable::from_json_str(coefficients)?,
            &ParameterTable::from_json_str(geometry)?,
        )
    }

    pub fn from_files<P: AsRef<Path>>(
        axis: Axis,
        cruise: P,
        coefficients: P,
        geometry: P,
    ) -> Result<Self> {
        let name = coefficients
            .as_ref()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("aircraft")
            .to_string();
        info!(
            "Loading {} case from {}",
            axis,
            coefficients.as_ref().display()
        );
        Self::from_tables(
            &name,
            axis,
            &ParameterTable::from_file(cruise)?,
            &ParameterTable::from_file(coefficients)?,
            &ParameterTable::from_file(geometry)?,
        )
    }

    pub fn business_jet(axis: Axis) -> Self {
        let coefficients = match axis {
            Axis::Longitudinal => {
                AerodynamicCoefficients::Longitudinal(LongitudinalCoefficients::business_jet())
            }
            Axis::Lateral => AerodynamicCoefficients::Lateral(LateralCoefficients::business_jet()),
        };
        Self {
            name: "Business JET".to_string(),
            cruise: CruiseCondition::business_jet(),
            geometry: Geometry::business_jet(),
            coefficients,
            cruise_table: ParameterTable::new(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.coefficients.axis()
    }

    /// Looks up a cruise-condition value by its key, e.g. `"V"`.
    ///
    /// Known keys read the resolved condition, so `q_mean` is the dynamic
    /// pressure in use rather than the unset marker. Other keys fall back to
    /// the loaded table.
    pub fn cruise_value(&self, key: &str) -> Result<f64> {
        let cruise = &self.cruise;
        let value = match key {
            "V" => Some(cruise.airspeed),
            "rho" => cruise.density,
            "q_mean" => Some(cruise.dynamic_pressure),
            "m" => Some(cruise.mass),
            "Ixx" => cruise.inertia.ixx,
            "Iyy" => cruise.inertia.iyy,
            "Izz" => cruise.inertia.izz,
            "theta" => Some(cruise.theta_deg),
            "g" => Some(cruise.gravity),
            "C_D_0" => cruise.c_d_0,
            "C_L_0" => cruise.c_l_0,
            _ => None,
        };
        match value {
            Some(v) => Ok(v),
            None => self.cruise_table.optional(key).ok_or_else(|| {
                StabilityError::MissingInput(format!("cruise condition '{}'", key))
            }),
        }
    }
}
