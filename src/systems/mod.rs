mod analysis;
mod assembly;
mod derivatives;
mod modal;
mod response;
mod transfer;

pub use analysis::{StabilityAnalysis, StabilityReport};
pub use assembly::{assemble_lateral, assemble_longitudinal, assemble_model};
pub use derivatives::{
    calculate_derivatives, calculate_lateral_derivatives, calculate_longitudinal_derivatives,
};
pub use modal::{decompose, identify_lateral, identify_longitudinal, identify_modes};
pub use response::{mode_response, oscillatory_response, real_response, response_horizon};
pub use transfer::{
    resolvent_terms, FrequencySampling, ResolventExpansion, Simplification, SymbolicLinearSystem,
};
