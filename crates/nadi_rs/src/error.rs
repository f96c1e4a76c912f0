//! Error type for the calculation pipeline.

use nadi_time::TimeError;
use thiserror::Error;

use crate::validate::ValidationError;

/// Errors from [`crate::Calculator`].
///
/// Only `MalformedInput` can occur with the default configuration; the
/// other variants are opt-in through [`crate::CalculatorConfig`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NadiError {
    /// Date or time text did not have the expected numeric components.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] TimeError),

    /// Offset text could not be parsed and the strict policy is active.
    #[error("unparseable UTC offset {0:?}")]
    UnparseableOffset(String),

    /// Input failed range validation.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration values are inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// Configuration text was not valid JSON for [`crate::CalculatorConfig`].
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
