//! Scenario files: melt, conditions, law choices and the volatile inventory.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use vs_core::units::{bar, k};
use vs_melt::conversions::moles_per_gram;
use vs_melt::{FO2Buffer, MeltDef, MeltModel, SilicateMelt, Species};
use vs_solubility::{
    CO2Law, Conditions, SolubilityConfig, SolubilityResult, cache_dry_composition, ch4_fugacity,
    ch4_melt, co_fugacity, co_melt, co2_fugacity, co2_melt, h2_fugacity, h2_melt, h2o_fugacity,
    h2o_melt, n_melt, n2_fugacity, s2_fugacity, sulfate_melt, sulfide_melt,
};

/// Oxygen fugacity as an absolute value or relative to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FO2Def {
    Buffer {
        buffer: FO2Buffer,
        #[serde(default)]
        delta: f64,
    },
    Absolute {
        /// fO2 [bar]
        absolute_bar: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ConditionsDef {
    pub temperature_k: f64,
    pub pressure_bar: f64,
    pub fo2: FO2Def,
}

impl ConditionsDef {
    pub fn resolve(&self) -> SolubilityResult<Conditions> {
        let p = bar(self.pressure_bar);
        let t = k(self.temperature_k);
        match self.fo2 {
            FO2Def::Buffer { buffer, delta } => Conditions::at_buffer(p, t, buffer, delta),
            FO2Def::Absolute { absolute_bar } => Conditions::new(p, t, absolute_bar),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub conditions: ConditionsDef,
    pub melt: MeltDef,
    #[serde(default)]
    pub solubility: SolubilityConfig,
    /// Dissolved weight fractions; S2 and N2 hold total S and N.
    #[serde(default)]
    pub melt_contents: BTreeMap<Species, f64>,
    #[serde(default)]
    pub gas_mole_fractions: BTreeMap<Species, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FugacityRow {
    pub species: Species,
    pub fugacity_bar: f64,
    pub mole_fraction: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FugacityReport {
    pub rows: Vec<FugacityRow>,
    /// Set when CO2 was inverted with the graphite-limited law.
    pub graphite_saturated: Option<bool>,
    /// S⁶⁺/S²⁻ when sulfur was given.
    pub sulfate_sulfide: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeltRow {
    pub species: Species,
    pub weight_fraction: f64,
    pub moles_per_gram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SulfurSplit {
    pub sulfide: f64,
    pub sulfate: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeltReport {
    pub rows: Vec<MeltRow>,
    pub sulfur: Option<SulfurSplit>,
}

impl Scenario {
    pub fn from_yaml_str(content: &str) -> SolubilityResult<Self> {
        let scenario: Scenario = serde_yaml::from_str(content)?;
        scenario.solubility.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> SolubilityResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Gas fugacities in equilibrium with `melt_contents`.
    pub fn fugacities(&self) -> SolubilityResult<FugacityReport> {
        let cond = self.conditions.resolve()?;
        let mut melt = SilicateMelt::from_def(&self.melt)?;
        let config = &self.solubility;
        let laws = config.laws;
        let mut report = FugacityReport::default();

        for (&species, &w) in &self.melt_contents {
            let record = config.gas_species(species);
            let f = match species {
                Species::H2 => h2_fugacity(w, &record, &melt, laws.h2)?,
                Species::H2O => h2o_fugacity(w, &record, laws.h2o)?,
                Species::CO2 => {
                    let f = co2_fugacity(w, &record, &cond, &mut melt, laws.co2, &config.solver)?;
                    if laws.co2 == CO2Law::Eguchi2018 {
                        report.graphite_saturated = Some(melt.graphite_saturated());
                    }
                    f
                }
                Species::CO => co_fugacity(w, &cond, laws.co)?,
                Species::CH4 => ch4_fugacity(w, &cond, laws.ch4)?,
                Species::N2 => n2_fugacity(w, &record, &cond, laws.n2, None, &config.solver)?,
                Species::S2 => {
                    let f = s2_fugacity(w, &cond, &mut melt, laws.sulfide, laws.sulfate)?;
                    if f > 0.0 {
                        let sulfide = sulfide_melt(f, &cond, &melt, laws.sulfide)?;
                        let sulfate = sulfate_melt(f, &cond, &melt, laws.sulfate, laws.sulfide)?;
                        report.sulfate_sulfide = Some(sulfate / sulfide);
                    }
                    f
                }
                Species::O2 => {
                    tracing::warn!("O2 has no solubility law, skipped");
                    continue;
                }
            };
            report.rows.push(FugacityRow {
                species,
                fugacity_bar: f,
                mole_fraction: f / (record.fugacity_coefficient * cond.p_bar()),
            });
        }
        Ok(report)
    }

    /// Melt contents in equilibrium with `gas_mole_fractions`.
    pub fn melt_contents(&self) -> SolubilityResult<MeltReport> {
        let cond = self.conditions.resolve()?;
        let mut melt = SilicateMelt::from_def(&self.melt)?;
        let config = &self.solubility;
        let laws = config.laws;
        let mut report = MeltReport::default();

        for (&species, &m) in &self.gas_mole_fractions {
            let record = config.gas_species(species);
            let f = record.fugacity_coefficient * m * cond.p_bar();
            let w = match species {
                Species::H2 => h2_melt(m, &record, &cond, &melt, laws.h2, None)?,
                Species::H2O => h2o_melt(m, &record, &cond, laws.h2o, None)?,
                Species::CO2 => co2_melt(f, &record, &cond, &melt, laws.co2)?,
                Species::CO => co_melt(f, &cond, laws.co)?,
                Species::CH4 => ch4_melt(f, &cond, laws.ch4)?,
                Species::N2 => n_melt(m, &cond, laws.n2)?,
                Species::S2 => {
                    cache_dry_composition(&cond, &mut melt)?;
                    let sulfide = sulfide_melt(f, &cond, &melt, laws.sulfide)?;
                    let sulfate = sulfate_melt(f, &cond, &melt, laws.sulfate, laws.sulfide)?;
                    report.sulfur = Some(SulfurSplit { sulfide, sulfate });
                    sulfide + sulfate
                }
                Species::O2 => {
                    tracing::warn!("O2 has no solubility law, skipped");
                    continue;
                }
            };
            report.rows.push(MeltRow {
                species,
                weight_fraction: w,
                moles_per_gram: moles_per_gram(species, w),
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_core::numeric::{Tolerances, nearly_equal};
    use vs_solubility::SolubilityError;

    const BASALT: &str = include_str!("../scenarios/basalt.yaml");

    fn row(report: &FugacityReport, species: Species) -> FugacityRow {
        *report.rows.iter().find(|r| r.species == species).unwrap()
    }

    fn content(report: &MeltReport, species: Species) -> f64 {
        report
            .rows
            .iter()
            .find(|r| r.species == species)
            .unwrap()
            .weight_fraction
    }

    #[test]
    fn shipped_scenario_parses() {
        let scenario = Scenario::from_yaml_str(BASALT).unwrap();
        assert_eq!(scenario.solubility.laws.co2, CO2Law::Eguchi2018);
        assert_eq!(scenario.melt_contents.len(), 7);
        assert!(matches!(
            scenario.conditions.fo2,
            FO2Def::Buffer {
                buffer: FO2Buffer::FMQ,
                ..
            }
        ));
    }

    #[test]
    fn fugacity_report_covers_inventory() {
        let report = Scenario::from_yaml_str(BASALT).unwrap().fugacities().unwrap();
        assert_eq!(report.rows.len(), 7);
        assert!(report.rows.iter().all(|r| r.fugacity_bar > 0.0));

        let h2o = row(&report, Species::H2O);
        let expected = (0.02f64 / 6.8e-4).powi(2);
        assert!(nearly_equal(h2o.fugacity_bar, expected, Tolerances::relative(1e-9)));
        assert!(nearly_equal(
            h2o.mole_fraction,
            expected / 1000.0,
            Tolerances::relative(1e-9)
        ));

        assert_eq!(report.graphite_saturated, Some(false));
        assert!(report.sulfate_sulfide.unwrap() > 0.0);
    }

    #[test]
    fn melt_report_splits_sulfur() {
        let report = Scenario::from_yaml_str(BASALT).unwrap().melt_contents().unwrap();
        let split = report.sulfur.unwrap();
        assert!(nearly_equal(
            content(&report, Species::S2),
            split.sulfide + split.sulfate,
            Tolerances::relative(1e-12)
        ));

        let h2o = content(&report, Species::H2O);
        assert!(nearly_equal(h2o, 6.8e-4 * 800f64.sqrt(), Tolerances::relative(1e-9)));
        let n = report.rows.iter().find(|r| r.species == Species::N2).unwrap();
        assert!(nearly_equal(
            n.moles_per_gram,
            n.weight_fraction / 14.007,
            Tolerances::relative(1e-12)
        ));
    }

    #[test]
    fn melt_contents_invert_back_to_gas() {
        let mut scenario = Scenario::from_yaml_str(BASALT).unwrap();
        let melt = scenario.melt_contents().unwrap();
        scenario.melt_contents = melt
            .rows
            .iter()
            .filter(|r| matches!(r.species, Species::H2O | Species::CO | Species::CH4 | Species::S2))
            .map(|r| (r.species, r.weight_fraction))
            .collect();

        let gas = scenario.fugacities().unwrap();
        for (species, tol) in [
            (Species::H2O, 1e-9),
            (Species::CO, 1e-9),
            (Species::CH4, 1e-9),
            (Species::S2, 1e-3),
        ] {
            let m = scenario.gas_mole_fractions[&species];
            assert!(
                nearly_equal(row(&gas, species).mole_fraction, m, Tolerances::relative(tol)),
                "{species}: {} vs {m}",
                row(&gas, species).mole_fraction
            );
        }
    }

    #[test]
    fn absolute_fo2_and_oxygen_entry() {
        let yaml = BASALT
            .replace("    buffer: FMQ\n    delta: 0.0\n", "    absolute_bar: 1.0e-8\n")
            .replace("  H2O: 0.02\n", "  H2O: 0.02\n  O2: 0.5\n");
        let scenario = Scenario::from_yaml_str(&yaml).unwrap();
        assert_eq!(scenario.conditions.fo2, FO2Def::Absolute { absolute_bar: 1.0e-8 });
        assert_eq!(scenario.conditions.resolve().unwrap().fo2, 1.0e-8);
        let report = scenario.fugacities().unwrap();
        assert!(report.rows.iter().all(|r| r.species != Species::O2));
    }

    #[test]
    fn sulfur_free_melt_has_no_sulfur_gas() {
        let mut scenario = Scenario::from_yaml_str(BASALT).unwrap();
        scenario.melt_contents.insert(Species::S2, 0.0);
        let report = scenario.fugacities().unwrap();
        assert_eq!(row(&report, Species::S2).fugacity_bar, 0.0);
        assert_eq!(report.sulfate_sulfide, None);
    }

    #[test]
    fn missing_coefficients_fail_on_load() {
        let yaml = BASALT.replace("  coefficients:\n    H2O: { a: 6.8e-4, b: 0.5 }\n", "");
        let err = Scenario::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, SolubilityError::Configuration { .. }));
    }
}
