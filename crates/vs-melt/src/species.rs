//! Volatile species definitions.

use serde::{Deserialize, Serialize};

/// Volatile species exchanged between the melt and the gas phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    /// Hydrogen (H₂)
    H2,
    /// Water (H₂O)
    H2O,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Carbon monoxide (CO)
    CO,
    /// Methane (CH₄)
    CH4,
    /// Diatomic sulfur (S₂)
    S2,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
}

impl Species {
    pub const ALL: [Species; 8] = [
        Species::H2,
        Species::H2O,
        Species::CO2,
        Species::CO,
        Species::CH4,
        Species::S2,
        Species::N2,
        Species::O2,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::H2 => "H2",
            Species::H2O => "H2O",
            Species::CO2 => "CO2",
            Species::CO => "CO",
            Species::CH4 => "CH4",
            Species::S2 => "S2",
            Species::N2 => "N2",
            Species::O2 => "O2",
        }
    }

    /// Molar mass of the gas molecule [g/mol].
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::H2 => 2.016,
            Species::H2O => 18.015,
            Species::CO2 => 44.01,
            Species::CO => 28.01,
            Species::CH4 => 16.043,
            Species::S2 => 64.13,
            Species::N2 => 28.014,
            Species::O2 => 31.999,
        }
    }

    /// Molar mass of the dissolved unit [g/mol].
    ///
    /// Nitrogen and sulfur dissolve as atoms, so their melt contents are counted
    /// per N and per S rather than per molecule.
    pub fn dissolved_molar_mass(&self) -> f64 {
        match self {
            Species::N2 => 14.007,
            Species::S2 => 32.065,
            other => other.molar_mass(),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "H2O" | "WATER" => Ok(Species::H2O),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "S2" | "SULFUR" | "SULPHUR" => Ok(Species::S2),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "O2" | "OXYGEN" => Ok(Species::O2),
            _ => Err("unknown species"),
        }
    }
}
