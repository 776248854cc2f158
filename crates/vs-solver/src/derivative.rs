//! Finite difference derivatives for scalar residuals.

use crate::error::{SolverError, SolverResult};

/// Forward-difference derivative of `f` at `x`, given `f_x = f(x)`.
///
/// The step is relative to `x` so that it never leaves the positive axis for
/// tiny positive `x`; at `x == 0` the raw `epsilon` is used.
pub fn forward_difference<F>(x: f64, f_x: f64, f: F, epsilon: f64) -> SolverResult<f64>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    let dx = if x == 0.0 { epsilon } else { epsilon * x.abs() };
    let f_perturbed = f(x + dx)?;
    let df = (f_perturbed - f_x) / dx;
    if !df.is_finite() {
        return Err(SolverError::Numeric {
            what: format!("non-finite derivative at x = {x:e}"),
        });
    }
    Ok(df)
}
