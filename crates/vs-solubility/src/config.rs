//! Run configuration: law selection, species coefficients and solver settings.

use crate::error::{SolubilityError, SolubilityResult};
use crate::law::{CH4Law, CO2Law, COLaw, H2Law, H2OLaw, N2Law, SulfateLaw, SulfideCapacityLaw};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use vs_melt::{GasSpecies, SolubilityCoefficients, Species};
use vs_solver::NewtonConfig;

/// Law chosen for each species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LawSelection {
    pub h2: H2Law,
    pub h2o: H2OLaw,
    pub co2: CO2Law,
    pub co: COLaw,
    pub ch4: CH4Law,
    pub n2: N2Law,
    pub sulfide: SulfideCapacityLaw,
    pub sulfate: SulfateLaw,
}

/// Solubility settings of a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolubilityConfig {
    pub laws: LawSelection,
    /// Power-law coefficients keyed by species.
    pub coefficients: BTreeMap<Species, SolubilityCoefficients>,
    /// Fugacity coefficients (Y); species not listed are ideal.
    pub fugacity_coefficients: BTreeMap<Species, f64>,
    pub solver: NewtonConfig,
}

impl SolubilityConfig {
    /// Species record assembled from this configuration.
    pub fn gas_species(&self, species: Species) -> GasSpecies {
        let mut record = GasSpecies::new(species);
        record.sol_con = self.coefficients.get(&species).copied();
        if let Some(y) = self.fugacity_coefficients.get(&species) {
            record.fugacity_coefficient = *y;
        }
        record
    }

    /// Species whose selected law needs `a`/`b` coefficients.
    pub fn species_needing_coefficients(&self) -> Vec<Species> {
        let mut needed = Vec::new();
        if self.laws.h2 == H2Law::Burguisser2015 {
            needed.push(Species::H2);
        }
        match self.laws.h2o {
            H2OLaw::Burguisser2015 => needed.push(Species::H2O),
        }
        if self.laws.co2 == CO2Law::Burguisser2015 {
            needed.push(Species::CO2);
        }
        needed
    }

    pub fn validate(&self) -> SolubilityResult<()> {
        for species in self.species_needing_coefficients() {
            if !self.coefficients.contains_key(&species) {
                return Err(config_error(format!(
                    "{species} law needs solubility coefficients a and b"
                )));
            }
        }

        for (species, c) in &self.coefficients {
            if !(c.a.is_finite() && c.a > 0.0 && c.b.is_finite() && c.b > 0.0) {
                return Err(config_error(format!(
                    "{species} coefficients must be positive and finite (a = {}, b = {})",
                    c.a, c.b
                )));
            }
        }

        for (species, y) in &self.fugacity_coefficients {
            if !(y.is_finite() && *y > 0.0) {
                return Err(config_error(format!(
                    "{species} fugacity coefficient must be positive and finite, got {y}"
                )));
            }
        }

        let s = &self.solver;
        if s.max_iterations == 0 {
            return Err(config_error("solver.max_iterations must be at least 1"));
        }
        if !(s.line_search_beta > 0.0 && s.line_search_beta < 1.0) {
            return Err(config_error("solver.line_search_beta must lie in (0, 1)"));
        }
        for (name, value) in [
            ("abs_tol", s.abs_tol),
            ("rel_tol", s.rel_tol),
            ("step_tol", s.step_tol),
            ("fd_epsilon", s.fd_epsilon),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(config_error(format!(
                    "solver.{name} must be positive and finite, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> SolubilityResult<Self> {
        let config: SolubilityConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

fn config_error(what: impl Into<String>) -> SolubilityError {
    SolubilityError::Configuration { what: what.into() }
}

pub fn load_yaml(path: &Path) -> SolubilityResult<SolubilityConfig> {
    let content = std::fs::read_to_string(path)?;
    SolubilityConfig::from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, config: &SolubilityConfig) -> SolubilityResult<()> {
    config.validate()?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> SolubilityResult<SolubilityConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SolubilityConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
