mod case;
mod coefficients;
mod cruise;
mod geometry;
mod table;

pub use case::{FlightCase, FlightCaseSource};
pub use coefficients::{AerodynamicCoefficients, LateralCoefficients, LongitudinalCoefficients};
pub use cruise::{resolve_dynamic_pressure, CruiseCondition, Inertia};
pub use geometry::Geometry;
pub use table::{Parameter, ParameterTable};
