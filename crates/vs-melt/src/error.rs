//! Melt property errors.

use thiserror::Error;
use vs_core::VsError;

/// Result type for melt operations.
pub type MeltResult<T> = Result<T, MeltError>;

/// Errors that can occur while evaluating melt state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeltError {
    /// Non-physical values (negative fraction, density, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A calculation needed an oxide the composition does not carry.
    #[error("Composition has no {oxide}")]
    MissingOxide { oxide: &'static str },

    /// Shared numeric guard failure.
    #[error(transparent)]
    Core(#[from] VsError),
}

impl From<MeltError> for VsError {
    fn from(err: MeltError) -> Self {
        match err {
            MeltError::NonPhysical { what } => VsError::Invariant { what },
            MeltError::InvalidArg { what } => VsError::InvalidArg { what },
            MeltError::MissingOxide { .. } => VsError::InvalidArg {
                what: "composition is missing a required oxide",
            },
            MeltError::Core(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MeltError::NonPhysical {
            what: "negative oxide fraction",
        };
        assert!(err.to_string().contains("negative oxide"));

        let err = MeltError::MissingOxide { oxide: "FeO" };
        assert!(err.to_string().contains("FeO"));
    }

    #[test]
    fn error_to_vs_error() {
        let melt_err = MeltError::InvalidArg { what: "empty" };
        let vs_err: VsError = melt_err.into();
        assert!(matches!(vs_err, VsError::InvalidArg { what: "empty" }));

        let core = VsError::NonFinite {
            what: "density",
            value: f64::NAN,
        };
        let round: VsError = MeltError::from(core).into();
        assert!(matches!(round, VsError::NonFinite { what: "density", .. }));
    }
}
