//! Closed-form CO2, CO and CH4 laws.
//!
//! The Eguchi & Dasgupta (2018) CO2 speciation model lives in [`crate::eguchi`].

use crate::error::{SolubilityResult, finite, non_negative, positive};
use crate::power_law;
use vs_core::units::constants::{GPA_PER_BAR, PPM};
use vs_melt::GasSpecies;

/// Burguisser et al. (2015) CO2: `w = a · fCO2^b`.
pub fn burguisser2015_co2(f_co2: f64, co2: &GasSpecies) -> SolubilityResult<f64> {
    let w = power_law::forward(power_law::coefficients(co2)?, f_co2)?;
    tracing::trace!(f_co2, w, "burguisser2015 CO2");
    Ok(w)
}

/// Inverse of [`burguisser2015_co2`]: CO2 fugacity [bar].
pub fn burguisser2015_co2_fugacity(w: f64, co2: &GasSpecies) -> SolubilityResult<f64> {
    power_law::inverse(power_law::coefficients(co2)?, w)
}

/// Armstrong et al. (2015) CO in ppm: `log10 C = −0.738 + 0.876 log10 fCO − 5.44e-5 P`.
pub fn armstrong2015(f_co: f64, p_bar: f64) -> SolubilityResult<f64> {
    let f_co = positive(f_co, "CO fugacity")?;
    let ppm = 10f64.powf(-0.738 + 0.876 * f_co.log10() - 5.44e-5 * p_bar);
    finite(ppm * PPM, "CO melt content")
}

/// Inverse of [`armstrong2015`]: CO fugacity [bar].
pub fn armstrong2015_fugacity(w: f64, p_bar: f64) -> SolubilityResult<f64> {
    let ppm = non_negative(w, "CO melt content")? / PPM;
    finite(
        10f64.powf((ppm.log10() + 0.738 + 5.44e-5 * p_bar) / 0.876),
        "CO fugacity",
    )
}

/// Ardia et al. (2013) CH4 Henry constant [ppm/GPa] at `p_bar`.
fn ardia_k(p_bar: f64) -> f64 {
    (4.93 - 1.93e-4 * p_bar * GPA_PER_BAR).exp()
}

/// Ardia et al. (2013) CH4: `w = k(P) · fCH4[GPa] · 1e-6`.
pub fn ardia2013(f_ch4: f64, p_bar: f64) -> SolubilityResult<f64> {
    let f_gpa = positive(f_ch4, "CH4 fugacity")? * GPA_PER_BAR;
    finite(ardia_k(p_bar) * f_gpa * PPM, "CH4 melt content")
}

/// Inverse of [`ardia2013`]: CH4 fugacity [bar].
pub fn ardia2013_fugacity(w: f64, p_bar: f64) -> SolubilityResult<f64> {
    let ppm = non_negative(w, "CH4 melt content")? / PPM;
    finite(ppm / ardia_k(p_bar) / GPA_PER_BAR, "CH4 fugacity")
}
