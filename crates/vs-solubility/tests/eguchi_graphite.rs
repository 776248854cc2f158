//! CO2 inverse below and above graphite saturation.

use vs_core::numeric::{Tolerances, nearly_equal};
use vs_core::units::{bar, k};
use vs_melt::{FO2Buffer, GasSpecies, MeltModel, Oxide, OxideComposition, SilicateMelt, Species};
use vs_solubility::*;
use vs_solver::NewtonConfig;

const T_K: f64 = 1473.15;
const P_BAR: f64 = 1000.0;
const TARGET: f64 = 2.89e-4;

fn basalt() -> SilicateMelt {
    let comp = OxideComposition::from_weight_percent([
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
    .unwrap();
    SilicateMelt::new(comp).unwrap()
}

#[test]
fn below_graphite_buffer_returns_solved_fugacity() {
    let mut melt = basalt();
    melt.set_graphite_saturated(true);
    let co2 = GasSpecies::new(Species::CO2);
    let cond = Conditions::at_buffer(bar(P_BAR), k(T_K), FO2Buffer::FMQ, 0.0).unwrap();

    let f = co2_fugacity(TARGET, &co2, &cond, &mut melt, CO2Law::Eguchi2018, &NewtonConfig::default())
        .unwrap();

    assert!(!melt.graphite_saturated());
    assert!(f < graphite_fco2(T_K, P_BAR, cond.fo2));
    // Plugging the result back in recovers the melt content
    let w = co2_melt(f, &co2, &cond, &melt, CO2Law::Eguchi2018).unwrap();
    assert!(nearly_equal(w, TARGET, Tolerances::relative(1e-9)));
    assert!(f > 100.0 && f < 1e4, "fCO2 = {f}");
}

#[test]
fn above_graphite_buffer_caps_and_flags() {
    let mut melt = basalt();
    let co2 = GasSpecies::new(Species::CO2);
    let cond = Conditions::at_buffer(bar(P_BAR), k(T_K), FO2Buffer::FMQ, -4.0).unwrap();

    let f = co2_fugacity(TARGET, &co2, &cond, &mut melt, CO2Law::Eguchi2018, &NewtonConfig::default())
        .unwrap();

    assert!(melt.graphite_saturated());
    assert_eq!(f, graphite_fco2(T_K, P_BAR, cond.fo2));
}

#[test]
fn flag_is_rewritten_on_every_call() {
    let mut melt = basalt();
    let co2 = GasSpecies::new(Species::CO2);
    let reduced = Conditions::at_buffer(bar(P_BAR), k(T_K), FO2Buffer::FMQ, -4.0).unwrap();
    let oxidised = Conditions::at_buffer(bar(P_BAR), k(T_K), FO2Buffer::FMQ, 0.0).unwrap();
    let solver = NewtonConfig::default();

    co2_fugacity(TARGET, &co2, &reduced, &mut melt, CO2Law::Eguchi2018, &solver).unwrap();
    assert!(melt.graphite_saturated());
    co2_fugacity(TARGET, &co2, &oxidised, &mut melt, CO2Law::Eguchi2018, &solver).unwrap();
    assert!(!melt.graphite_saturated());
}

#[test]
fn exhausted_newton_budget_is_a_convergence_failure() {
    let mut melt = basalt();
    let co2 = GasSpecies::new(Species::CO2);
    let cond = Conditions::at_buffer(bar(P_BAR), k(T_K), FO2Buffer::FMQ, 0.0).unwrap();
    let solver = NewtonConfig {
        max_iterations: 1,
        ..NewtonConfig::default()
    };

    let err = co2_fugacity(TARGET, &co2, &cond, &mut melt, CO2Law::Eguchi2018, &solver).unwrap_err();
    assert!(matches!(err, SolubilityError::ConvergenceFailure { .. }));
}
