//! Error types for solver operations.

use thiserror::Error;
use vs_core::error::VsError;

/// Errors that can occur during a root search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("All {tried} seeds failed for {what}")]
    SeedsExhausted { what: String, tried: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for VsError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ConvergenceFailed { what: _ } => VsError::InvalidArg {
                what: "convergence",
            },
            SolverError::Numeric { what: _ } => VsError::InvalidArg { what: "numeric" },
            SolverError::SeedsExhausted { .. } => VsError::InvalidArg {
                what: "seed ladder",
            },
        }
    }
}
