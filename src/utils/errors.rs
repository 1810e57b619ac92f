use std::io;
use thiserror::Error;

/// Errors surfaced by the stability pipeline.
///
/// Nothing in the pipeline recovers from these locally, the first failure is
/// returned to the caller.
#[derive(Error, Debug)]
pub enum StabilityError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    #[error("Configuration format error: {0}")]
    ConfigurationFormat(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Mode identification failed: {0}")]
    ModeIdentification(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, StabilityError>;
