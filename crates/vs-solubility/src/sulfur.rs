//! Sulfur speciation and sulfide capacity laws.

use crate::conditions::Conditions;
use crate::error::{SolubilityResult, finite};
use vs_melt::conversions::total_iron_as_feo;
use vs_melt::{MeltModel, Oxide, OxideComposition};

/// Nash et al. (2019) S⁶⁺/S²⁻ ratio from the melt's Fe³⁺/Fe²⁺ at `cond`.
pub fn nash2019<M: MeltModel + ?Sized>(cond: &Conditions, melt: &M) -> SolubilityResult<f64> {
    let fe3_fe2 = melt.ferric_ratio(cond.t, cond.p, cond.ln_fo2())?;
    let t = cond.t_kelvin();
    let log_ratio = 8.0 * fe3_fe2.log10() + 8.7436e6 / (t * t) - 27703.0 / t + 20.273;
    let ratio = finite(10f64.powf(log_ratio), "sulfate/sulfide ratio")?;
    tracing::trace!(fe3_fe2, ratio, "nash2019 S6+/S2-");
    Ok(ratio)
}

/// O'Neill & Mavrogenes (2002) sulfide capacity (weight fraction), FeO taken
/// from the melt speciated at `cond`.
pub fn oneill2002<M: MeltModel + ?Sized>(cond: &Conditions, melt: &M) -> SolubilityResult<f64> {
    let speciated = melt.iron_fraction(cond.t, cond.p, cond.ln_fo2())?.composition;
    let feo = 100.0 * speciated.to_weight().fraction(Oxide::FeO);
    finite(
        0.0003 * (100.0 - feo) * (0.21 * feo).exp() * 1e-6,
        "sulfide capacity",
    )
}

/// O'Neill (2021) sulfide capacity (weight fraction) of a dry composition.
///
/// Ferric iron is folded into FeO on mole fractions (see
/// [`total_iron_as_feo`]) before the single-cation conversion.
pub fn oneill2020(t_kelvin: f64, comp: &OxideComposition) -> SolubilityResult<f64> {
    let cat = total_iron_as_feo(comp)?.single_cation();
    let x = |oxide| cat.fraction(oxide);

    let fe_x = x(Oxide::FeO) + x(Oxide::MnO);
    let composition_term = 6.7 * (x(Oxide::Na2O) + x(Oxide::K2O))
        + 1.8 * x(Oxide::Al2O3)
        + 4.9 * x(Oxide::MgO)
        + 8.1 * x(Oxide::CaO)
        + 5.0 * x(Oxide::TiO2)
        + 8.9 * fe_x
        - 22.2 * fe_x * x(Oxide::TiO2)
        + 7.2 * fe_x * x(Oxide::SiO2);

    let ln_c = -23590.0 / t_kelvin + 8.77 + (1673.0 / t_kelvin) * composition_term
        - 2.06 * libm::erf(-7.2 * fe_x);
    finite(ln_c.exp() * 1e-6, "sulfide capacity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_core::numeric::{Tolerances, nearly_equal};
    use vs_core::units::{bar, k};
    use vs_melt::{FO2Buffer, SilicateMelt};

    fn basalt() -> OxideComposition {
        OxideComposition::from_weight_percent([
            (Oxide::SiO2, 47.95),
            (Oxide::TiO2, 1.67),
            (Oxide::Al2O3, 17.32),
            (Oxide::FeO, 10.24),
            (Oxide::MnO, 0.17),
            (Oxide::MgO, 5.76),
            (Oxide::CaO, 10.93),
            (Oxide::Na2O, 3.45),
            (Oxide::K2O, 1.99),
            (Oxide::P2O5, 0.51),
        ])
        .unwrap()
    }

    #[test]
    fn sulfate_dominates_when_oxidised() {
        let melt = SilicateMelt::new(basalt()).unwrap();
        let reduced = Conditions::at_buffer(bar(1000.0), k(1473.15), FO2Buffer::FMQ, -1.0).unwrap();
        let oxidised = Conditions::at_buffer(bar(1000.0), k(1473.15), FO2Buffer::FMQ, 2.0).unwrap();
        let low = nash2019(&reduced, &melt).unwrap();
        let high = nash2019(&oxidised, &melt).unwrap();
        assert!(low < 1.0);
        assert!(high > 1.0);
        // Eight times the log Fe3+/Fe2+ shift, 0.196 per natural-log unit of fO2
        let expected = 8.0 * 0.196 * 3.0;
        assert!(nearly_equal(
            high.log10() - low.log10(),
            expected,
            Tolerances::relative(1e-6)
        ));
    }

    #[test]
    fn oneill2002_matches_feo_form() {
        let melt = SilicateMelt::new(basalt()).unwrap();
        let cond = Conditions::at_buffer(bar(1000.0), k(1473.15), FO2Buffer::FMQ, 0.0).unwrap();
        let c = oneill2002(&cond, &melt).unwrap();
        // FeO drops below its bulk 10.24 wt% once some iron is ferric
        assert!(c > 0.0003 * 92.0 * (0.21f64 * 8.0).exp() * 1e-6);
        assert!(c < 0.0003 * 90.0 * (0.21f64 * 10.24).exp() * 1e-6);
    }

    #[test]
    fn oneill2020_pins_mole_basis_fold() {
        let comp = OxideComposition::from_mole_fractions([
            (Oxide::SiO2, 0.5),
            (Oxide::Al2O3, 0.1),
            (Oxide::FeO, 0.08),
            (Oxide::Fe2O3, 0.02),
            (Oxide::MgO, 0.12),
            (Oxide::CaO, 0.13),
            (Oxide::Na2O, 0.05),
        ])
        .unwrap();
        let c = oneill2020(1473.15, &comp).unwrap();
        assert!(
            nearly_equal(c, 1.1454649560438206e-7, Tolerances::relative(1e-9)),
            "capacity = {c}"
        );
    }

    #[test]
    fn oneill2020_reads_fe2o3_through_the_fold() {
        // Moving iron from FeO to Fe2O3 on a mole basis loses FeOt
        let ferrous = OxideComposition::from_mole_fractions([
            (Oxide::SiO2, 0.5),
            (Oxide::Al2O3, 0.1),
            (Oxide::FeO, 0.1),
            (Oxide::MgO, 0.12),
            (Oxide::CaO, 0.13),
            (Oxide::Na2O, 0.05),
        ])
        .unwrap();
        let a = oneill2020(1473.15, &basalt()).unwrap();
        assert!(a > 1e-8 && a < 1e-6, "capacity = {a}");
        assert!(oneill2020(1473.15, &ferrous).unwrap() > 1.1454649560438206e-7);
    }
}
