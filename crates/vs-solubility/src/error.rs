//! Solubility engine errors.

use thiserror::Error;
use vs_core::VsError;
use vs_melt::MeltError;
use vs_solver::SolverError;

/// Result type for solubility operations.
pub type SolubilityResult<T> = Result<T, SolubilityError>;

/// Errors raised by the solubility laws, their dispatch and configuration.
#[derive(Error, Debug)]
pub enum SolubilityError {
    /// Input outside the domain of a power or log law, or a non-finite result.
    #[error("Domain error for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// An implicit solve found no acceptable root.
    #[error("Convergence failure: {what}")]
    ConvergenceFailure { what: String },

    /// Unknown law name, missing coefficients or an invalid configuration value.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Melt error: {0}")]
    Melt(#[from] MeltError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<VsError> for SolubilityError {
    fn from(err: VsError) -> Self {
        match err {
            VsError::NonFinite { what, value } | VsError::NonPositive { what, value } => {
                SolubilityError::Domain { what, value }
            }
            other => SolubilityError::Melt(MeltError::Core(other)),
        }
    }
}

/// Guard for values fed to a power or log law.
pub(crate) fn positive(value: f64, what: &'static str) -> SolubilityResult<f64> {
    Ok(vs_core::numeric::ensure_positive(value, what)?)
}

/// Guard for melt contents fed to an inverse; an absent species is 0.
pub(crate) fn non_negative(value: f64, what: &'static str) -> SolubilityResult<f64> {
    Ok(vs_core::numeric::ensure_non_negative(value, what)?)
}

/// Guard for a law's result.
pub(crate) fn finite(value: f64, what: &'static str) -> SolubilityResult<f64> {
    Ok(vs_core::numeric::ensure_finite(value, what)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolubilityError::Domain {
            what: "CO fugacity",
            value: -1.0,
        };
        assert!(err.to_string().contains("CO fugacity"));

        let err = SolubilityError::Configuration {
            what: "unknown H2 law 'foo2020'".into(),
        };
        assert!(err.to_string().contains("foo2020"));
    }

    #[test]
    fn numeric_guards_become_domain_errors() {
        let err = positive(0.0, "pressure").unwrap_err();
        assert!(matches!(err, SolubilityError::Domain { what: "pressure", .. }));
        let err = finite(f64::NAN, "result").unwrap_err();
        assert!(matches!(err, SolubilityError::Domain { what: "result", .. }));
    }

    #[test]
    fn solver_errors_wrap() {
        let err: SolubilityError = SolverError::Numeric {
            what: "zero derivative".into(),
        }
        .into();
        assert!(err.to_string().contains("zero derivative"));
    }
}
