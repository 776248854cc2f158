//! Major-element oxide definitions.

use serde::{Deserialize, Serialize};

/// Major-element oxides of a silicate melt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Oxide {
    SiO2,
    TiO2,
    Al2O3,
    FeO,
    Fe2O3,
    MnO,
    MgO,
    CaO,
    Na2O,
    K2O,
    P2O5,
}

impl Oxide {
    pub const COUNT: usize = 11;

    pub const ALL: [Oxide; Oxide::COUNT] = [
        Oxide::SiO2,
        Oxide::TiO2,
        Oxide::Al2O3,
        Oxide::FeO,
        Oxide::Fe2O3,
        Oxide::MnO,
        Oxide::MgO,
        Oxide::CaO,
        Oxide::Na2O,
        Oxide::K2O,
        Oxide::P2O5,
    ];

    /// Position in `Oxide::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(&self) -> &'static str {
        match self {
            Oxide::SiO2 => "SiO2",
            Oxide::TiO2 => "TiO2",
            Oxide::Al2O3 => "Al2O3",
            Oxide::FeO => "FeO",
            Oxide::Fe2O3 => "Fe2O3",
            Oxide::MnO => "MnO",
            Oxide::MgO => "MgO",
            Oxide::CaO => "CaO",
            Oxide::Na2O => "Na2O",
            Oxide::K2O => "K2O",
            Oxide::P2O5 => "P2O5",
        }
    }

    /// Molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        match self {
            Oxide::SiO2 => 60.0843,
            Oxide::TiO2 => 79.8658,
            Oxide::Al2O3 => 101.9613,
            Oxide::FeO => 71.8444,
            Oxide::Fe2O3 => 159.6882,
            Oxide::MnO => 70.9374,
            Oxide::MgO => 40.3044,
            Oxide::CaO => 56.0774,
            Oxide::Na2O => 61.9789,
            Oxide::K2O => 94.196,
            Oxide::P2O5 => 141.9445,
        }
    }

    /// Cations per formula unit.
    pub fn cations(&self) -> f64 {
        match self {
            Oxide::Al2O3 | Oxide::Fe2O3 | Oxide::Na2O | Oxide::K2O | Oxide::P2O5 => 2.0,
            _ => 1.0,
        }
    }

    /// Oxygens per formula unit.
    pub fn oxygens(&self) -> f64 {
        match self {
            Oxide::SiO2 | Oxide::TiO2 => 2.0,
            Oxide::Al2O3 | Oxide::Fe2O3 => 3.0,
            Oxide::P2O5 => 5.0,
            _ => 1.0,
        }
    }
}

impl std::fmt::Display for Oxide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Oxide {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Oxide::ALL
            .into_iter()
            .find(|oxide| oxide.key().eq_ignore_ascii_case(wanted))
            .ok_or("unknown oxide")
    }
}
