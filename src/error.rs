//! Crate-level error type.
//!
//! Configuration problems (bad input data, out-of-range parameters) surface
//! as [`Error`] before any generation is created. Broken permutation
//! invariants are defects and panic instead of being returned here.

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading data or configuring a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input items or scores failed integrity checks.
    #[error("invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// A run parameter is outside its allowed range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// An individual contains an item that has no score.
    #[error("no score for item {0}")]
    MissingScore(String),

    /// An engine transition was requested from the wrong state.
    #[error("engine is {actual:?}, expected {expected:?}")]
    InvalidState {
        expected: crate::ga::EngineState,
        actual: crate::ga::EngineState,
    },

    /// None of the candidate headers were found in the data file.
    #[error("dataset must contain a {kind} column, tried: {}", .tried.join(", "))]
    MissingColumn {
        kind: &'static str,
        tried: Vec<&'static str>,
    },

    /// A rating cell could not be parsed as a number.
    #[error("row {row}: rating {value:?} is not a number")]
    InvalidRating { row: usize, value: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}
