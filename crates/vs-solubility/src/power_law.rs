//! Shared `w = a · x^b` form behind the Burguisser (2015) laws.

use crate::error::{SolubilityError, SolubilityResult, finite, non_negative, positive};
use vs_melt::{GasSpecies, SolubilityCoefficients};

/// Coefficients of a species record, validated for use in a power law.
pub(crate) fn coefficients(species: &GasSpecies) -> SolubilityResult<SolubilityCoefficients> {
    let Some(coeffs) = species.sol_con else {
        return Err(SolubilityError::Configuration {
            what: format!("{} has no solubility coefficients", species.species),
        });
    };
    positive(coeffs.a, "solubility coefficient a")?;
    positive(coeffs.b, "solubility coefficient b")?;
    Ok(coeffs)
}

pub(crate) fn forward(coeffs: SolubilityCoefficients, x: f64) -> SolubilityResult<f64> {
    let x = positive(x, "power-law argument")?;
    finite(coeffs.a * x.powf(coeffs.b), "power-law melt content")
}

pub(crate) fn inverse(coeffs: SolubilityCoefficients, w: f64) -> SolubilityResult<f64> {
    let w = non_negative(w, "melt content")?;
    finite((w / coeffs.a).powf(1.0 / coeffs.b), "power-law fugacity")
}
