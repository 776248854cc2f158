//! Libourel et al. (2003) nitrogen solubility.
//!
//! Dissolved N = a·pN2 + b·fO2^(−3/4)·pN2^(1/2), with the N2 partial pressure
//! in atm: the linear term is physically dissolved N2, the square-root term
//! chemically bound nitride.

use crate::error::{SolubilityError, SolubilityResult, finite, non_negative, positive};
use vs_core::units::constants::ATM_PER_BAR;
use vs_solver::{NewtonConfig, SolverResult, solve_with_seed_ladder};

const PHYSICAL: f64 = 0.0611e-6;
const CHEMICAL: f64 = 5.97e-16;

/// Starting points for the partial-pressure search [atm], tried in order.
pub const N2_SEEDS: [f64; 9] = [1.0, 1e-10, 1e-11, 1e-12, 1e-13, 1e-14, 1e-15, 1e-16, 1e-17];

fn dissolved(p_n2_atm: f64, fo2: f64) -> f64 {
    PHYSICAL * p_n2_atm + CHEMICAL * fo2.powf(-0.75) * p_n2_atm.sqrt()
}

/// N weight fraction in a melt under gas with N2 mole fraction `m_n2`.
pub fn libourel2003(m_n2: f64, fo2: f64, p_bar: f64) -> SolubilityResult<f64> {
    let m_n2 = non_negative(m_n2, "N2 mole fraction")?;
    let fo2 = positive(fo2, "oxygen fugacity")?;
    let p_bar = positive(p_bar, "pressure")?;
    let w = finite(dissolved(p_bar * ATM_PER_BAR * m_n2, fo2), "N melt content")?;
    tracing::trace!(m_n2, fo2, p_bar, w, "libourel2003 N");
    Ok(w)
}

/// N2 fugacity [bar] of a melt holding `n_melt` N (weight fraction).
///
/// The partial pressure has no closed form, so it is found by a Newton search
/// from each of [`N2_SEEDS`] in turn.
pub fn libourel2003_fugacity(
    n_melt: f64,
    y_n2: f64,
    fo2: f64,
    p_bar: f64,
    solver: &NewtonConfig,
) -> SolubilityResult<f64> {
    let n_melt = non_negative(n_melt, "N melt content")?;
    let fo2 = positive(fo2, "oxygen fugacity")?;
    let p_bar = positive(p_bar, "pressure")?;

    let residual = |x: f64| -> SolverResult<f64> { Ok(dissolved(x, fo2) - n_melt) };
    let solution = solve_with_seed_ladder("N2 partial pressure", &N2_SEEDS, residual, solver)
        .map_err(|err| SolubilityError::ConvergenceFailure {
            what: format!("{err} (N = {n_melt:e}, fO2 = {fo2:e})"),
        })?;
    tracing::debug!(
        p_n2_atm = solution.x,
        seed = solution.seed,
        attempts = solution.attempts,
        "libourel2003 N2 solved"
    );

    let m_n2 = solution.x / (p_bar * ATM_PER_BAR);
    finite(y_n2 * m_n2 * p_bar, "N2 fugacity")
}
