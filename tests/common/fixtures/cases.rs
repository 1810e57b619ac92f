use aerostab::components::{Axis, FlightCase, FlightCaseSource};
use std::path::PathBuf;

/// Directory holding the business jet JSON inputs.
pub fn business_jet_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("business_jet")
}

/// The business jet as a set of input files for the given axis.
pub fn business_jet_files(axis: Axis) -> FlightCaseSource {
    let dir = business_jet_dir();
    let coefficients = match axis {
        Axis::Longitudinal => "longitudinal.json",
        Axis::Lateral => "lateral.json",
    };
    FlightCaseSource::Files {
        axis,
        cruise: dir.join("cruise.json"),
        coefficients: dir.join(coefficients),
        geometry: dir.join("geometry.json"),
    }
}

/// Loads the business jet from its input files.
pub fn load_business_jet(axis: Axis) -> FlightCase {
    FlightCase::new(business_jet_files(axis)).expect("business jet inputs should load")
}
