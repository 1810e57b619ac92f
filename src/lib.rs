pub mod components;
pub mod rendering;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{Axis, FlightCase, FlightCaseSource, ModeKind, StateSpaceModel};
pub use resources::AnalysisSettings;
pub use systems::{StabilityAnalysis, StabilityReport, SymbolicLinearSystem};
pub use utils::errors::{Result, StabilityError};
