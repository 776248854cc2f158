//! Damped scalar Newton solver with a positivity constraint.

use crate::derivative::forward_difference;
use crate::error::{SolverError, SolverResult};
use serde::{Deserialize, Serialize};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on |residual|
    pub abs_tol: f64,
    /// Tolerance on |residual| relative to the residual at the seed
    pub rel_tol: f64,
    /// Converged once the accepted step is below `step_tol * |x|`
    pub step_tol: f64,
    /// Iterates must stay strictly above this value
    pub lower_bound: Option<f64>,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
    /// Relative finite difference step
    pub fd_epsilon: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-18,
            rel_tol: 1e-12,
            step_tol: 1e-12,
            lower_bound: Some(0.0),
            line_search_beta: 0.5,
            max_line_search_iters: 60,
            fd_epsilon: 1e-7,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// Root estimate
    pub x: f64,
    /// Residual at `x`
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
}

/// Solve `residual_fn(x) = 0` from the seed `x0`.
///
/// Each Newton step is backtracked until the trial point stays above
/// `lower_bound` and reduces |residual|; a non-finite residual never counts as
/// a reduction. Fails if no such point exists or `max_iterations` runs out.
pub fn newton_solve<F>(x0: f64, residual_fn: F, config: &NewtonConfig) -> SolverResult<NewtonResult>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    if !x0.is_finite() {
        return Err(SolverError::Numeric {
            what: format!("non-finite seed {x0}"),
        });
    }
    if config.lower_bound.is_some_and(|lb| x0 <= lb) {
        return Err(SolverError::Numeric {
            what: format!("seed {x0:e} not above lower bound"),
        });
    }

    let mut x = x0;
    let mut r = residual_fn(x)?;
    if !r.is_finite() {
        return Err(SolverError::Numeric {
            what: format!("non-finite residual at seed {x0:e}"),
        });
    }
    let r0 = r.abs();

    for iter in 0..config.max_iterations {
        // Check convergence
        if r.abs() <= config.abs_tol || r.abs() <= config.rel_tol * r0 {
            return Ok(NewtonResult {
                x,
                residual: r,
                iterations: iter,
            });
        }

        let slope = forward_difference(x, r, &residual_fn, config.fd_epsilon)?;
        if slope == 0.0 {
            return Err(SolverError::Numeric {
                what: format!("zero derivative at x = {x:e}"),
            });
        }
        let dx = -r / slope;

        // Line search with positivity constraint
        let mut alpha = 1.0;
        let mut accepted = None;
        for _ in 0..config.max_line_search_iters {
            let x_new = x + alpha * dx;
            let in_bounds = config.lower_bound.is_none_or(|lb| x_new > lb);
            if in_bounds {
                let r_new = residual_fn(x_new)?;
                if r_new.is_finite() && r_new.abs() < r.abs() {
                    accepted = Some((x_new, r_new));
                    break;
                }
            }
            // Backtrack
            alpha *= config.line_search_beta;
        }

        let Some((x_new, r_new)) = accepted else {
            return Err(SolverError::ConvergenceFailed {
                what: format!("line search stagnated at iteration {iter}, x = {x:e}"),
            });
        };

        tracing::trace!(iter, x = x_new, residual = r_new, alpha, "newton step");

        let step = (x_new - x).abs();
        x = x_new;
        r = r_new;

        // A stalled step only counts once the residual has also come down
        if step <= config.step_tol * x.abs() && r.abs() <= config.rel_tol.sqrt() * r0 {
            return Ok(NewtonResult {
                x,
                residual: r,
                iterations: iter + 1,
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {:e}",
            config.max_iterations, r
        ),
    })
}
