//! Forward/inverse consistency of the closed-form laws.

use proptest::prelude::*;
use vs_core::numeric::{Tolerances, nearly_equal};
use vs_core::units::{bar, k};
use vs_melt::{DensityModel, FerricModel, GasSpecies, Oxide, OxideComposition, SilicateMelt, Species};
use vs_solubility::*;

const TOL: Tolerances = Tolerances::relative(1e-9);

fn conditions(p_bar: f64) -> Conditions {
    Conditions::new(bar(p_bar), k(1473.15), 1e-8).unwrap()
}

fn incompressible_melt() -> SilicateMelt {
    let comp = OxideComposition::from_weight_percent([
        (Oxide::SiO2, 50.0),
        (Oxide::Al2O3, 15.0),
        (Oxide::FeO, 10.0),
        (Oxide::MgO, 8.0),
        (Oxide::CaO, 11.0),
        (Oxide::Na2O, 3.0),
    ])
    .unwrap();
    SilicateMelt::with_models(comp, DensityModel::incompressible(2750.0), FerricModel::default())
        .unwrap()
}

proptest! {
    #[test]
    fn h2o_burguisser_roundtrip(
        m in 1e-4_f64..1.0,
        p in 1.0_f64..5000.0,
        a in 1e-6_f64..1e-3,
        b in 0.3_f64..1.5,
    ) {
        let h2o = GasSpecies::new(Species::H2O).with_coefficients(a, b);
        let cond = conditions(p);
        let w = h2o_melt(m, &h2o, &cond, H2OLaw::Burguisser2015, None).unwrap();
        let f = h2o_fugacity(w, &h2o, H2OLaw::Burguisser2015).unwrap();
        prop_assert!(nearly_equal(f, m * p, TOL));
    }

    #[test]
    fn h2_burguisser_roundtrip(
        m in 1e-4_f64..1.0,
        p in 1.0_f64..5000.0,
        y in 0.8_f64..1.5,
    ) {
        let h2 = GasSpecies::new(Species::H2)
            .with_coefficients(3.4e-7, 1.28)
            .with_fugacity_coefficient(y);
        let melt = incompressible_melt();
        let cond = conditions(p);
        let w = h2_melt(m, &h2, &cond, &melt, H2Law::Burguisser2015, None).unwrap();
        let f = h2_fugacity(w, &h2, &melt, H2Law::Burguisser2015).unwrap();
        prop_assert!(nearly_equal(f, y * m * p, TOL));
    }

    #[test]
    fn h2_gaillard_roundtrip_incompressible(m in 1e-4_f64..1.0, p in 1.0_f64..5000.0) {
        let h2 = GasSpecies::new(Species::H2);
        let melt = incompressible_melt();
        let cond = conditions(p);
        let w = h2_melt(m, &h2, &cond, &melt, H2Law::Gaillard2003, None).unwrap();
        let f = h2_fugacity(w, &h2, &melt, H2Law::Gaillard2003).unwrap();
        prop_assert!(nearly_equal(f, m * p, TOL));
    }

    #[test]
    fn co2_burguisser_roundtrip(f in 1e-2_f64..1e4, a in 1e-8_f64..1e-5, b in 0.5_f64..1.5) {
        let co2 = GasSpecies::new(Species::CO2).with_coefficients(a, b);
        let mut melt = incompressible_melt();
        let cond = conditions(1000.0);
        let w = co2_melt(f, &co2, &cond, &melt, CO2Law::Burguisser2015).unwrap();
        let back = co2_fugacity(w, &co2, &cond, &mut melt, CO2Law::Burguisser2015, &Default::default())
            .unwrap();
        prop_assert!(nearly_equal(back, f, TOL));
    }

    #[test]
    fn co_armstrong_roundtrip(f in 1e-3_f64..1e4, p in 1.0_f64..5000.0) {
        let cond = conditions(p);
        let w = co_melt(f, &cond, COLaw::Armstrong2015).unwrap();
        let back = co_fugacity(w, &cond, COLaw::Armstrong2015).unwrap();
        prop_assert!(nearly_equal(back, f, TOL));
    }

    #[test]
    fn ch4_ardia_roundtrip(f in 1e-3_f64..1e4, p in 1.0_f64..5000.0) {
        let cond = conditions(p);
        let w = ch4_melt(f, &cond, CH4Law::Ardia2013).unwrap();
        let back = ch4_fugacity(w, &cond, CH4Law::Ardia2013).unwrap();
        prop_assert!(nearly_equal(back, f, TOL));
    }
}
