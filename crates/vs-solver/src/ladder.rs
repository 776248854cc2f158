//! Bounded multi-seed retry around `newton_solve`.

use crate::error::{SolverError, SolverResult};
use crate::newton::{NewtonConfig, newton_solve};

/// Root found by one rung of the seed ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderSolution {
    /// Root estimate
    pub x: f64,
    /// Seed that produced it
    pub seed: f64,
    /// Seeds tried, including the successful one
    pub attempts: usize,
    /// Newton iterations of the successful attempt
    pub iterations: usize,
}

/// Run `newton_solve` from each seed in order and return the first acceptable root.
///
/// An attempt is rejected when the solver fails or when it ends on a
/// non-finite or negative root. Once every seed has been rejected the error is
/// `SolverError::SeedsExhausted` naming `what`.
pub fn solve_with_seed_ladder<F>(
    what: &str,
    seeds: &[f64],
    residual_fn: F,
    config: &NewtonConfig,
) -> SolverResult<LadderSolution>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    for (i, &seed) in seeds.iter().enumerate() {
        tracing::debug!(what, seed, attempt = i + 1, "seed ladder attempt");
        match newton_solve(seed, &residual_fn, config) {
            Ok(result) if result.x.is_finite() && result.x >= 0.0 => {
                return Ok(LadderSolution {
                    x: result.x,
                    seed,
                    attempts: i + 1,
                    iterations: result.iterations,
                });
            }
            Ok(result) => {
                tracing::warn!(what, seed, x = result.x, "seed converged to an unphysical root");
            }
            Err(err) => {
                tracing::warn!(what, seed, error = %err, "seed failed");
            }
        }
    }

    Err(SolverError::SeedsExhausted {
        what: what.to_string(),
        tried: seeds.len(),
    })
}
