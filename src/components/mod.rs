pub mod axis;
pub mod derivatives;
pub mod flight;
pub mod model;
pub mod modes;
pub mod polynomial;
pub mod transfer;

pub use axis::Axis;
pub use derivatives::{
    DerivativeName, DimensionalDerivativeSet, LateralDerivatives, LongitudinalDerivatives,
};
pub use flight::{
    AerodynamicCoefficients, CruiseCondition, FlightCase, FlightCaseSource, Geometry, Inertia,
    LateralCoefficients, LongitudinalCoefficients, Parameter, ParameterTable,
};
pub use model::{MatrixRecord, StateSpaceModel};
pub use modes::{IdentifiedModes, ModalSet, Mode, ModeKind, ModeResponse, ResponseSeries};
pub use polynomial::Polynomial;
pub use transfer::{RationalFunction, TransferChannel, TransferFunctionSet};
