//! Unit conversions between melt contents and molar amounts.

use crate::composition::OxideComposition;
use crate::error::MeltResult;
use crate::oxide::Oxide;
use crate::species::Species;

/// Mass of FeO equivalent to one unit mass of Fe2O3.
pub const FE2O3_TO_FEO: f64 = 0.8998;

/// Moles of dissolved species per gram of melt, from its weight fraction.
pub fn moles_per_gram(species: Species, weight_fraction: f64) -> f64 {
    weight_fraction / species.dissolved_molar_mass()
}

/// Weight fraction of a dissolved species from moles per gram of melt.
pub fn weight_fraction_from_moles(species: Species, moles_per_gram: f64) -> f64 {
    moles_per_gram * species.dissolved_molar_mass()
}

/// Mole composition with ferric iron folded into FeO (FeOt).
///
/// The 0.8998 mass factor is applied to the Fe2O3 mole fraction directly,
/// matching the published O'Neill (2021) capacity workflow, then the result
/// is renormalised.
pub fn total_iron_as_feo(comp: &OxideComposition) -> MeltResult<OxideComposition> {
    let mole = comp.to_mole();
    let fe2o3 = mole.fraction(Oxide::Fe2O3);
    if fe2o3 <= 0.0 {
        return Ok(mole);
    }
    let feo_total = mole.fraction(Oxide::FeO) + fe2o3 * FE2O3_TO_FEO;
    mole.with_fractions([(Oxide::FeO, feo_total), (Oxide::Fe2O3, 0.0)])
}
