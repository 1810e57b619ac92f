#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{
    assert_coefficients_close, assert_eigenpairs, assert_model_valid, assert_response_valid,
};

pub use helpers::*;

pub use fixtures::*;
