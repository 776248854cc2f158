//! H2 and H2O solubility laws.

use crate::error::{SolubilityResult, finite, non_negative, positive};
use crate::power_law;
use vs_core::units::{bar, to_g_cm3};
use vs_melt::{GasSpecies, MeltModel};

/// Gaillard et al. (2003) prefactor [wt fraction · g/cm³ / bar^1.28].
const GAILLARD_K: f64 = 3.4e-7;
const GAILLARD_N: f64 = 1.28;

/// Burguisser et al. (2015) H2: `w = a · (Y · m · P)^b`.
pub fn burguisser2015_h2(
    m_h2: f64,
    p_bar: f64,
    h2: &GasSpecies,
    y: Option<f64>,
) -> SolubilityResult<f64> {
    let coeffs = power_law::coefficients(h2)?;
    let w = power_law::forward(coeffs, h2.y(y) * m_h2 * p_bar)?;
    tracing::trace!(m_h2, p_bar, w, "burguisser2015 H2");
    Ok(w)
}

/// Inverse of [`burguisser2015_h2`]: H2 fugacity [bar].
pub fn burguisser2015_h2_fugacity(w: f64, h2: &GasSpecies) -> SolubilityResult<f64> {
    power_law::inverse(power_law::coefficients(h2)?, w)
}

/// Gaillard et al. (2003) H2, scaled by the melt density at `p_bar`.
pub fn gaillard2003_h2<M: MeltModel + ?Sized>(
    m_h2: f64,
    p_bar: f64,
    h2: &GasSpecies,
    melt: &M,
    y: Option<f64>,
) -> SolubilityResult<f64> {
    let f = positive(h2.y(y) * m_h2 * p_bar, "H2 fugacity")?;
    let rho = to_g_cm3(melt.rho(bar(p_bar))?);
    let w = finite(GAILLARD_K * f.powf(GAILLARD_N) / rho, "H2 melt content")?;
    tracing::trace!(m_h2, p_bar, rho, w, "gaillard2003 H2");
    Ok(w)
}

/// Inverse of [`gaillard2003_h2`].
///
/// Uses the density at the melt's reference conditions, not at the pressure of
/// the forward call, so the pair only round-trips for an incompressible melt.
pub fn gaillard2003_h2_fugacity<M: MeltModel + ?Sized>(w: f64, melt: &M) -> SolubilityResult<f64> {
    let w = non_negative(w, "H2 melt content")?;
    let rho = to_g_cm3(melt.rho_reference()?);
    finite((w * rho / GAILLARD_K).powf(1.0 / GAILLARD_N), "H2 fugacity")
}

/// Burguisser et al. (2015) H2O: `w = a · (Y · m · P)^b`.
pub fn burguisser2015_h2o(
    m_h2o: f64,
    p_bar: f64,
    h2o: &GasSpecies,
    y: Option<f64>,
) -> SolubilityResult<f64> {
    let coeffs = power_law::coefficients(h2o)?;
    let w = power_law::forward(coeffs, h2o.y(y) * m_h2o * p_bar)?;
    tracing::trace!(m_h2o, p_bar, w, "burguisser2015 H2O");
    Ok(w)
}

/// Inverse of [`burguisser2015_h2o`]: H2O fugacity [bar].
pub fn burguisser2015_h2o_fugacity(w: f64, h2o: &GasSpecies) -> SolubilityResult<f64> {
    power_law::inverse(power_law::coefficients(h2o)?, w)
}
