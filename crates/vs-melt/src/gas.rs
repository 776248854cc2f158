//! Gas-species records carrying solubility-law coefficients.

use crate::species::Species;
use serde::{Deserialize, Serialize};

/// Fitted coefficients of a power-law solubility relation `w = a · f^b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolubilityCoefficients {
    pub a: f64,
    pub b: f64,
}

/// A gas species as seen by the solubility engine.
///
/// Plain configuration record: the engine only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct GasSpecies {
    pub species: Species,
    /// Law coefficients, required by the power-law laws only.
    pub sol_con: Option<SolubilityCoefficients>,
    /// Fugacity coefficient (Y), dimensionless.
    pub fugacity_coefficient: f64,
}

impl GasSpecies {
    /// Ideal species (Y = 1) without law coefficients.
    pub fn new(species: Species) -> Self {
        Self {
            species,
            sol_con: None,
            fugacity_coefficient: 1.0,
        }
    }

    pub fn with_coefficients(mut self, a: f64, b: f64) -> Self {
        self.sol_con = Some(SolubilityCoefficients { a, b });
        self
    }

    pub fn with_fugacity_coefficient(mut self, y: f64) -> Self {
        self.fugacity_coefficient = y;
        self
    }

    /// Fugacity coefficient for one call: the override wins outright when given.
    pub fn y(&self, y_override: Option<f64>) -> f64 {
        y_override.unwrap_or(self.fugacity_coefficient)
    }
}
