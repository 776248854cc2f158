//! Eguchi & Dasgupta (2018) CO2 speciation with graphite saturation.
//!
//! Dissolved carbon is split into molecular CO2 and carbonate (CO3²⁻). Each
//! species follows
//!
//! ```text
//! ln X = −ΔV·P/RT + ΔH/RT + B·ln fCO2/T + ΔS/R + y·NBO + (A_CaO·X_CaO + A_Na2O·X_Na2O + A_K2O·X_K2O)/RT
//! ```
//!
//! with P in Pa and oxide mole fractions of the dry, iron-speciated melt.

use crate::conditions::Conditions;
use crate::error::{SolubilityError, SolubilityResult, finite, non_negative, positive};
use vs_core::units::constants::R_J_MOL_K;
use vs_core::units::to_pa;
use vs_melt::{MeltModel, Oxide, OxideComposition, Species};
use vs_solver::{NewtonConfig, SolverResult, newton_solve};

/// Seed of the fCO2 search [bar].
const FCO2_SEED: f64 = 1.0;

struct SpeciationConstants {
    dh: f64,
    dv: f64,
    ds: f64,
    b: f64,
    y_nbo: f64,
    a_cao: f64,
    a_na2o: f64,
    a_k2o: f64,
}

const MOLECULAR_CO2: SpeciationConstants = SpeciationConstants {
    dh: -90212.0,
    dv: 1.9244e-5,
    ds: -43.0815,
    b: 1114.9,
    y_nbo: -7.0937,
    a_cao: 0.0,
    a_na2o: 0.0,
    a_k2o: 0.0,
};

const CARBONATE: SpeciationConstants = SpeciationConstants {
    dh: -164480.0,
    dv: 2.384e-5,
    ds: -43.6385,
    b: 1473.2,
    y_nbo: 3.291,
    a_cao: 1.68e5,
    a_na2o: 1.759e5,
    a_k2o: 2.1085e5,
};

/// Non-bridging oxygens of a mole composition.
///
/// Al fills tetrahedral sites up to the charge-balancing cations; any deficit
/// is made up by ferric iron.
pub fn nbo(ox: &OxideComposition) -> f64 {
    let x = |oxide| ox.fraction(oxide);

    let n_si = x(Oxide::SiO2);
    let n_ti = x(Oxide::TiO2);
    let n_al = 2.0 * x(Oxide::Al2O3);
    let n_fe2 = x(Oxide::FeO);
    let n_fe3 = 2.0 * x(Oxide::Fe2O3);
    let n_mn = x(Oxide::MnO);
    let n_mg = x(Oxide::MgO);
    let n_ca = x(Oxide::CaO);
    let n_na = 2.0 * x(Oxide::Na2O);
    let n_k = 2.0 * x(Oxide::K2O);
    let n_p = 2.0 * x(Oxide::P2O5);

    let oxygen = Oxide::ALL
        .into_iter()
        .map(|oxide| x(oxide) * oxide.oxygens())
        .sum::<f64>();

    let network_modifiers = n_mg + n_ca + n_fe2 + n_na + n_k + n_mn;
    let excess_al = n_al - network_modifiers;

    let al_tet = if excess_al > 0.0 { network_modifiers } else { n_al };
    let fe_tet = if excess_al > 0.0 {
        0.0
    } else if n_fe3 + excess_al > 0.0 {
        -excess_al
    } else {
        n_fe3
    };

    let tetrahedral = n_si + n_ti + n_p + al_tet + fe_tet;
    2.0 * oxygen - 4.0 * tetrahedral
}

/// Graphite-buffered CO2 fugacity [bar] (C + O2 = CO2).
pub fn graphite_fco2(t_kelvin: f64, p_bar: f64, fo2: f64) -> f64 {
    let t = t_kelvin;
    let log_k = 40.07639 - 2.53932e-2 * t + 5.27096e-6 * t * t + 0.0267 * (p_bar - 1.0) / t;
    10f64.powf(log_k) * fo2
}

/// Melt properties the speciation model reads, fixed for one set of conditions.
struct CarbonateHost {
    nbo: f64,
    cao: f64,
    na2o: f64,
    k2o: f64,
    formula_weight: f64,
    t: f64,
    p_pa: f64,
}

impl CarbonateHost {
    fn new<M: MeltModel + ?Sized>(cond: &Conditions, melt: &M) -> SolubilityResult<Self> {
        let oxides = melt.iron_fraction(cond.t, cond.p, cond.ln_fo2())?.composition;
        let formula_weight = melt.formula_weight(cond.t, cond.p, cond.fo2)?;
        Ok(Self {
            nbo: nbo(&oxides),
            cao: oxides.fraction(Oxide::CaO),
            na2o: oxides.fraction(Oxide::Na2O),
            k2o: oxides.fraction(Oxide::K2O),
            formula_weight,
            t: cond.t_kelvin(),
            p_pa: to_pa(cond.p),
        })
    }

    fn mole_fraction(&self, c: &SpeciationConstants, f_co2: f64) -> f64 {
        let rt = R_J_MOL_K * self.t;
        let ln_x = -(c.dv * self.p_pa) / rt
            + c.dh / rt
            + f_co2.ln() * c.b / self.t
            + c.ds / R_J_MOL_K
            + c.y_nbo * self.nbo
            + (c.a_cao * self.cao + c.a_na2o * self.na2o + c.a_k2o * self.k2o) / rt;
        ln_x.exp()
    }

    /// Total dissolved CO2 weight fraction; may be non-finite far outside the fit.
    fn weight_fraction(&self, f_co2: f64) -> f64 {
        let m_co2 = Species::CO2.molar_mass();
        let x_co2 = self.mole_fraction(&MOLECULAR_CO2, f_co2);
        let x_co3 = self.mole_fraction(&CARBONATE, f_co2);
        let host = (1.0 - (x_co2 + x_co3)) * self.formula_weight;
        m_co2 * x_co2 / (m_co2 * x_co2 + host) + m_co2 * x_co3 / (m_co2 * x_co3 + host)
    }
}

/// CO2 weight fraction in the melt at fugacity `f_co2` [bar].
pub fn eguchi2018<M: MeltModel + ?Sized>(
    f_co2: f64,
    cond: &Conditions,
    melt: &M,
) -> SolubilityResult<f64> {
    let f_co2 = positive(f_co2, "CO2 fugacity")?;
    let host = CarbonateHost::new(cond, melt)?;
    let w = finite(host.weight_fraction(f_co2), "CO2 melt content")?;
    tracing::trace!(f_co2, nbo = host.nbo, w, "eguchi2018 CO2");
    Ok(w)
}

/// CO2 fugacity [bar] of a melt holding `w` CO2, capped at graphite saturation.
///
/// Writes the melt's graphite flag on every call: set when the cap applies,
/// cleared otherwise.
pub fn eguchi2018_fugacity<M: MeltModel + ?Sized>(
    w: f64,
    cond: &Conditions,
    melt: &mut M,
    solver: &NewtonConfig,
) -> SolubilityResult<f64> {
    let target = non_negative(w, "CO2 melt content")?;
    if target == 0.0 {
        melt.set_graphite_saturated(false);
        return Ok(0.0);
    }
    let host = CarbonateHost::new(cond, &*melt)?;

    let residual = |f: f64| -> SolverResult<f64> { Ok(host.weight_fraction(f) - target) };
    let solved = newton_solve(FCO2_SEED, residual, solver).map_err(|err| {
        SolubilityError::ConvergenceFailure {
            what: format!("CO2 fugacity for melt content {target:e}: {err}"),
        }
    })?;
    tracing::debug!(f_co2 = solved.x, iterations = solved.iterations, "eguchi2018 CO2 solved");

    let graphite = graphite_fco2(cond.t_kelvin(), cond.p_bar(), cond.fo2);
    if solved.x > graphite {
        tracing::warn!(
            solved = solved.x,
            graphite,
            "CO2 fugacity above graphite saturation, capping"
        );
        melt.set_graphite_saturated(true);
        Ok(graphite)
    } else {
        melt.set_graphite_saturated(false);
        Ok(solved.x)
    }
}
