use serde::{Deserialize, Serialize};

use crate::components::flight::ParameterTable;
use crate::utils::constants::DEFAULT_TAPER_RATIO;
use crate::utils::errors::Result;

/// Wing geometry shared by the longitudinal and lateral analyses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// Wing aspect ratio, b²/S.
    pub aspect_ratio: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    pub mean_chord: f64,
    /// Oswald span efficiency factor.
    pub oswald: f64,
    /// Wing taper ratio, tip chord over root chord.
    pub taper: f64,
}

impl Geometry {
    /// Creates a new `Geometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The total wing area of the aircraft (m²).
    /// * `aspect_ratio` - The wing aspect ratio.
    /// * `wing_span` - The wing span of the aircraft (m).
    /// * `mean_chord` - The mean aerodynamic chord (m).
    /// * `oswald` - Oswald efficiency factor.
    /// * `taper` - Taper ratio.
    pub fn new(
        wing_area: f64,
        aspect_ratio: f64,
        wing_span: f64,
        mean_chord: f64,
        oswald: f64,
        taper: f64,
    ) -> Self {
        Self {
            wing_area,
            aspect_ratio,
            wing_span,
            mean_chord,
            oswald,
            taper,
        }
    }

    /// Reads the `S`, `AR`, `b`, `c`, `e` and optional `taper` keys.
    pub fn from_table(table: &ParameterTable) -> Result<Self> {
        Ok(Self {
            wing_area: table.value("S")?,
            aspect_ratio: table.value("AR")?,
            wing_span: table.value("b")?,
            mean_chord: table.value("c")?,
            oswald: table.value("e")?,
            taper: table.optional("taper").unwrap_or(DEFAULT_TAPER_RATIO),
        })
    }

    pub fn business_jet() -> Self {
        Self::new(21.55, 5.09, 10.48, 2.13, 0.94, 0.5)
    }
}
