//! Species-level conversions between gas state and melt content.
//!
//! Every `*_melt` function returns a melt weight fraction; every `*_fugacity`
//! function returns a fugacity in bar. The law argument selects the published
//! relation, and `Insoluble` yields exactly zero in both directions.

use crate::carbon;
use crate::conditions::Conditions;
use crate::eguchi;
use crate::error::{SolubilityResult, finite, non_negative, positive};
use crate::hydrogen;
use crate::law::{CH4Law, CO2Law, COLaw, H2Law, H2OLaw, N2Law, SulfateLaw, SulfideCapacityLaw};
use crate::nitrogen;
use crate::sulfur;
use vs_melt::{GasSpecies, MeltModel};
use vs_solver::NewtonConfig;

/// H2 melt content from the gas mole fraction `m_h2`.
///
/// `y` replaces the record's fugacity coefficient for this call when given.
pub fn h2_melt<M: MeltModel + ?Sized>(
    m_h2: f64,
    h2: &GasSpecies,
    cond: &Conditions,
    melt: &M,
    law: H2Law,
    y: Option<f64>,
) -> SolubilityResult<f64> {
    match law {
        H2Law::Burguisser2015 => hydrogen::burguisser2015_h2(m_h2, cond.p_bar(), h2, y),
        H2Law::Gaillard2003 => hydrogen::gaillard2003_h2(m_h2, cond.p_bar(), h2, melt, y),
    }
}

pub fn h2_fugacity<M: MeltModel + ?Sized>(
    w: f64,
    h2: &GasSpecies,
    melt: &M,
    law: H2Law,
) -> SolubilityResult<f64> {
    match law {
        H2Law::Burguisser2015 => hydrogen::burguisser2015_h2_fugacity(w, h2),
        H2Law::Gaillard2003 => hydrogen::gaillard2003_h2_fugacity(w, melt),
    }
}

/// H2O melt content from the gas mole fraction `m_h2o`.
pub fn h2o_melt(
    m_h2o: f64,
    h2o: &GasSpecies,
    cond: &Conditions,
    law: H2OLaw,
    y: Option<f64>,
) -> SolubilityResult<f64> {
    match law {
        H2OLaw::Burguisser2015 => hydrogen::burguisser2015_h2o(m_h2o, cond.p_bar(), h2o, y),
    }
}

pub fn h2o_fugacity(w: f64, h2o: &GasSpecies, law: H2OLaw) -> SolubilityResult<f64> {
    match law {
        H2OLaw::Burguisser2015 => hydrogen::burguisser2015_h2o_fugacity(w, h2o),
    }
}

pub fn co2_melt<M: MeltModel + ?Sized>(
    f_co2: f64,
    co2: &GasSpecies,
    cond: &Conditions,
    melt: &M,
    law: CO2Law,
) -> SolubilityResult<f64> {
    match law {
        CO2Law::Burguisser2015 => carbon::burguisser2015_co2(f_co2, co2),
        CO2Law::Eguchi2018 => eguchi::eguchi2018(f_co2, cond, melt),
    }
}

/// CO2 fugacity of a melt holding `w` CO2.
///
/// Under `Eguchi2018` the melt's graphite flag is rewritten; read it before
/// the next call.
pub fn co2_fugacity<M: MeltModel + ?Sized>(
    w: f64,
    co2: &GasSpecies,
    cond: &Conditions,
    melt: &mut M,
    law: CO2Law,
    solver: &NewtonConfig,
) -> SolubilityResult<f64> {
    match law {
        CO2Law::Burguisser2015 => carbon::burguisser2015_co2_fugacity(w, co2),
        CO2Law::Eguchi2018 => eguchi::eguchi2018_fugacity(w, cond, melt, solver),
    }
}

pub fn co_melt(f_co: f64, cond: &Conditions, law: COLaw) -> SolubilityResult<f64> {
    match law {
        COLaw::Armstrong2015 => carbon::armstrong2015(f_co, cond.p_bar()),
        COLaw::Insoluble => Ok(0.0),
    }
}

pub fn co_fugacity(w: f64, cond: &Conditions, law: COLaw) -> SolubilityResult<f64> {
    match law {
        COLaw::Armstrong2015 => carbon::armstrong2015_fugacity(w, cond.p_bar()),
        COLaw::Insoluble => Ok(0.0),
    }
}

pub fn ch4_melt(f_ch4: f64, cond: &Conditions, law: CH4Law) -> SolubilityResult<f64> {
    match law {
        CH4Law::Ardia2013 => carbon::ardia2013(f_ch4, cond.p_bar()),
        CH4Law::Insoluble => Ok(0.0),
    }
}

pub fn ch4_fugacity(w: f64, cond: &Conditions, law: CH4Law) -> SolubilityResult<f64> {
    match law {
        CH4Law::Ardia2013 => carbon::ardia2013_fugacity(w, cond.p_bar()),
        CH4Law::Insoluble => Ok(0.0),
    }
}

/// N melt content (weight fraction) from the gas N2 mole fraction `m_n2`.
pub fn n_melt(m_n2: f64, cond: &Conditions, law: N2Law) -> SolubilityResult<f64> {
    match law {
        N2Law::Libourel2003 => nitrogen::libourel2003(m_n2, cond.fo2, cond.p_bar()),
    }
}

/// N2 fugacity of a melt holding `w` N; `y` overrides the record's fugacity coefficient.
pub fn n2_fugacity(
    w: f64,
    n2: &GasSpecies,
    cond: &Conditions,
    law: N2Law,
    y: Option<f64>,
    solver: &NewtonConfig,
) -> SolubilityResult<f64> {
    match law {
        N2Law::Libourel2003 => nitrogen::libourel2003_fugacity(
            w,
            n2.y(y),
            cond.fo2,
            cond.p_bar(),
            solver,
        ),
    }
}

/// Sulfide capacity of the melt under `law`.
///
/// O'Neill (2020) reads the cached dry composition when one exists.
fn sulfide_capacity<M: MeltModel + ?Sized>(
    cond: &Conditions,
    melt: &M,
    law: SulfideCapacityLaw,
) -> SolubilityResult<f64> {
    match law {
        SulfideCapacityLaw::ONeill2002 => sulfur::oneill2002(cond, melt),
        SulfideCapacityLaw::ONeill2020 => {
            let comp = melt.cm_dry().unwrap_or_else(|| melt.cm());
            sulfur::oneill2020(cond.t_kelvin(), comp)
        }
    }
}

fn sulfate_ratio<M: MeltModel + ?Sized>(
    cond: &Conditions,
    melt: &M,
    law: SulfateLaw,
) -> SolubilityResult<f64> {
    match law {
        SulfateLaw::Nash2019 => sulfur::nash2019(cond, melt),
    }
}

/// Sulfide (S²⁻) melt content at S2 fugacity `f_s2`: `C · (fS2/fO2)^½`.
pub fn sulfide_melt<M: MeltModel + ?Sized>(
    f_s2: f64,
    cond: &Conditions,
    melt: &M,
    law: SulfideCapacityLaw,
) -> SolubilityResult<f64> {
    let f_s2 = positive(f_s2, "S2 fugacity")?;
    let capacity = sulfide_capacity(cond, melt, law)?;
    finite(capacity * (f_s2 / cond.fo2).sqrt(), "sulfide melt content")
}

/// Sulfate (S⁶⁺) melt content at S2 fugacity `f_s2`.
pub fn sulfate_melt<M: MeltModel + ?Sized>(
    f_s2: f64,
    cond: &Conditions,
    melt: &M,
    sulfate: SulfateLaw,
    sulfide: SulfideCapacityLaw,
) -> SolubilityResult<f64> {
    let ratio = sulfate_ratio(cond, melt, sulfate)?;
    Ok(ratio * sulfide_melt(f_s2, cond, melt, sulfide)?)
}

/// Store the dry iron-speciated composition at `cond` as the melt's `cm_dry`.
pub fn cache_dry_composition<M: MeltModel + ?Sized>(
    cond: &Conditions,
    melt: &mut M,
) -> SolubilityResult<()> {
    let dry = melt.iron_fraction(cond.t, cond.p, cond.ln_fo2())?.composition;
    melt.set_cm_dry(dry);
    Ok(())
}

/// S2 fugacity of a melt holding `s_total` sulfur across both oxidation states.
///
/// Caches the dry iron-speciated composition on the melt first, so a following
/// `sulfide_melt`/`sulfate_melt` at the same conditions sees the same capacity.
pub fn s2_fugacity<M: MeltModel + ?Sized>(
    s_total: f64,
    cond: &Conditions,
    melt: &mut M,
    sulfide: SulfideCapacityLaw,
    sulfate: SulfateLaw,
) -> SolubilityResult<f64> {
    let s_total = non_negative(s_total, "S melt content")?;
    cache_dry_composition(cond, melt)?;

    let ratio = sulfate_ratio(cond, &*melt, sulfate)?;
    let s_sulfide = s_total / (1.0 + ratio);
    let capacity = sulfide_capacity(cond, &*melt, sulfide)?;
    let f_s2 = finite((s_sulfide / capacity).powi(2) * cond.fo2, "S2 fugacity")?;
    tracing::debug!(s_total, ratio, capacity, f_s2, "S2 fugacity");
    Ok(f_s2)
}
