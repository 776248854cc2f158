//! Melt oxide composition on mole, weight or single-cation basis.

use crate::error::{MeltError, MeltResult};
use crate::oxide::Oxide;

/// How the fractions of an `OxideComposition` are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Mole fraction of each oxide formula unit.
    Mole,
    /// Mass fraction of each oxide.
    Weight,
    /// Mole fraction on a one-cation basis (SiO2, AlO1.5, NaO0.5, ...).
    SingleCation,
}

/// Oxide composition defined by normalized fractions.
///
/// The composition is always normalized (fractions sum to 1.0). Oxides that are
/// not present read as 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct OxideComposition {
    basis: Basis,
    fractions: [f64; Oxide::COUNT],
}

impl OxideComposition {
    /// Create a composition from raw amounts on the given basis.
    ///
    /// Validates that all amounts are finite, non-negative, and have a positive sum,
    /// then normalizes to sum=1. Repeated oxides accumulate.
    pub fn new<I>(basis: Basis, amounts: I) -> MeltResult<Self>
    where
        I: IntoIterator<Item = (Oxide, f64)>,
    {
        let mut raw = [0.0; Oxide::COUNT];
        let mut any = false;
        for (oxide, amount) in amounts {
            if !amount.is_finite() {
                return Err(MeltError::NonPhysical {
                    what: "non-finite oxide fraction",
                });
            }
            if amount < 0.0 {
                return Err(MeltError::NonPhysical {
                    what: "negative oxide fraction",
                });
            }
            raw[oxide.index()] += amount;
            any = true;
        }

        if !any {
            return Err(MeltError::InvalidArg {
                what: "empty composition",
            });
        }

        Self::normalized(basis, raw)
    }

    /// Composition from weight percent (or any mass units).
    pub fn from_weight_percent<I>(amounts: I) -> MeltResult<Self>
    where
        I: IntoIterator<Item = (Oxide, f64)>,
    {
        Self::new(Basis::Weight, amounts)
    }

    /// Composition from mole fractions (or any molar amounts).
    pub fn from_mole_fractions<I>(amounts: I) -> MeltResult<Self>
    where
        I: IntoIterator<Item = (Oxide, f64)>,
    {
        Self::new(Basis::Mole, amounts)
    }

    fn normalized(basis: Basis, raw: [f64; Oxide::COUNT]) -> MeltResult<Self> {
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(MeltError::NonPhysical {
                what: "oxide fractions sum to zero or non-finite",
            });
        }

        let mut fractions = raw;
        for f in fractions.iter_mut() {
            *f /= sum;
        }
        Ok(Self { basis, fractions })
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Fraction of an oxide (0.0 if not present).
    pub fn fraction(&self, oxide: Oxide) -> f64 {
        self.fractions[oxide.index()]
    }

    /// Iterate over all oxides with non-zero fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Oxide, f64)> + '_ {
        Oxide::ALL
            .into_iter()
            .map(|oxide| (oxide, self.fraction(oxide)))
            .filter(|(_, f)| *f > 0.0)
    }

    /// Same composition on a mole basis.
    pub fn to_mole(&self) -> Self {
        match self.basis {
            Basis::Mole => self.clone(),
            Basis::Weight => self.rescale(Basis::Mole, |oxide, w| w / oxide.molar_mass()),
            Basis::SingleCation => self.rescale(Basis::Mole, |oxide, x| x / oxide.cations()),
        }
    }

    /// Same composition on a weight basis.
    pub fn to_weight(&self) -> Self {
        match self.basis {
            Basis::Weight => self.clone(),
            _ => self
                .to_mole()
                .rescale(Basis::Weight, |oxide, x| x * oxide.molar_mass()),
        }
    }

    /// Same composition as one-cation mole fractions.
    pub fn single_cation(&self) -> Self {
        match self.basis {
            Basis::SingleCation => self.clone(),
            _ => self
                .to_mole()
                .rescale(Basis::SingleCation, |oxide, x| x * oxide.cations()),
        }
    }

    /// Mean formula weight per cation [g/mol], i.e. Σ xᵢMᵢ / Σ xᵢnᵢ on a mole basis.
    pub fn formula_weight(&self) -> f64 {
        let mole = self.to_mole();
        let (mass, cations) = mole.iter().fold((0.0, 0.0), |(m, c), (oxide, x)| {
            (m + x * oxide.molar_mass(), c + x * oxide.cations())
        });
        mass / cations
    }

    /// Replace the listed oxides' fractions and renormalize on the same basis.
    pub fn with_fractions<I>(&self, replacements: I) -> MeltResult<Self>
    where
        I: IntoIterator<Item = (Oxide, f64)>,
    {
        let mut raw = self.fractions;
        for (oxide, value) in replacements {
            if !value.is_finite() || value < 0.0 {
                return Err(MeltError::NonPhysical {
                    what: "replacement oxide fraction",
                });
            }
            raw[oxide.index()] = value;
        }
        Self::normalized(self.basis, raw)
    }

    fn rescale(&self, basis: Basis, f: impl Fn(Oxide, f64) -> f64) -> Self {
        let mut raw = [0.0; Oxide::COUNT];
        for oxide in Oxide::ALL {
            raw[oxide.index()] = f(oxide, self.fraction(oxide));
        }
        // A valid composition stays valid under positive per-oxide scaling.
        let sum: f64 = raw.iter().sum();
        for r in raw.iter_mut() {
            *r /= sum;
        }
        Self {
            basis,
            fractions: raw,
        }
    }
}
