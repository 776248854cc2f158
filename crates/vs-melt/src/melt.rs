//! Melt model trait and the silicate melt implementation.

use crate::composition::OxideComposition;
use crate::error::{MeltError, MeltResult};
use crate::oxide::Oxide;
use crate::redox::{FerricModel, speciate_iron};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vs_core::numeric::ensure_positive;
use vs_core::units::{Density, Pressure, Temperature, bar, kg_m3, to_bar};

/// Dry melt composition after the iron redox split.
#[derive(Debug, Clone, PartialEq)]
pub struct IronSpeciation {
    /// Mole fractions with FeO and Fe2O3 in equilibrium with the given fO2.
    pub composition: OxideComposition,
    /// X(Fe2O3)/X(FeO)
    pub ferric_ferrous: f64,
}

/// Melt state consumed by the solubility laws.
///
/// The two mutable slots (graphite flag and the dry-composition snapshot) are
/// written by the CO2 and S2 conversions respectively and are only meaningful
/// directly after the call that wrote them.
pub trait MeltModel {
    /// Melt density at pressure `p`.
    fn rho(&self, p: Pressure) -> MeltResult<Density>;

    /// Melt density at the model's reference conditions.
    fn rho_reference(&self) -> MeltResult<Density>;

    /// Dry bulk composition on a mole basis.
    fn cm(&self) -> &OxideComposition;

    /// Ferric model used for the iron redox split.
    fn ferric_model(&self) -> FerricModel;

    /// Cation ratio Fe³⁺/Fe²⁺ of the bulk melt at (T, P, ln fO2).
    fn ferric_ratio(&self, t: Temperature, p: Pressure, ln_fo2: f64) -> MeltResult<f64> {
        Ok(2.0 * self.ferric_model().ferric_ferrous(self.cm(), t, p, ln_fo2)?)
    }

    /// Dry oxide mole fractions with iron speciated at (T, P, ln fO2).
    fn iron_fraction(
        &self,
        t: Temperature,
        p: Pressure,
        ln_fo2: f64,
    ) -> MeltResult<IronSpeciation> {
        let ferric_ferrous = self.ferric_model().ferric_ferrous(self.cm(), t, p, ln_fo2)?;
        let composition = speciate_iron(self.cm(), ferric_ferrous)?;
        Ok(IronSpeciation {
            composition,
            ferric_ferrous,
        })
    }

    /// Mean formula weight per cation [g/mol] of the speciated dry melt.
    fn formula_weight(&self, t: Temperature, p: Pressure, fo2: f64) -> MeltResult<f64> {
        let fo2 = ensure_positive(fo2, "oxygen fugacity")?;
        Ok(self.iron_fraction(t, p, fo2.ln())?.composition.formula_weight())
    }

    fn graphite_saturated(&self) -> bool;

    fn set_graphite_saturated(&mut self, saturated: bool);

    /// Last cached dry composition, if any.
    fn cm_dry(&self) -> Option<&OxideComposition>;

    fn set_cm_dry(&mut self, composition: OxideComposition);
}

/// Exponential compressibility law: ρ(P) = ρ_ref · exp(β · (P − P_ref)).
///
/// Fields left out of a run file take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityModel {
    /// ρ_ref [kg/m³]
    pub reference_kg_m3: f64,
    /// P_ref [bar]
    pub reference_pressure_bar: f64,
    /// β [1/bar]
    pub compressibility_per_bar: f64,
}

impl Default for DensityModel {
    fn default() -> Self {
        // Basaltic liquid, K ≈ 15 GPa
        Self {
            reference_kg_m3: 2700.0,
            reference_pressure_bar: 1.0,
            compressibility_per_bar: 1.0 / 1.5e5,
        }
    }
}

impl DensityModel {
    pub fn incompressible(reference_kg_m3: f64) -> Self {
        Self {
            reference_kg_m3,
            reference_pressure_bar: 1.0,
            compressibility_per_bar: 0.0,
        }
    }

    pub fn density(&self, p: Pressure) -> MeltResult<Density> {
        let rho_ref = ensure_positive(self.reference_kg_m3, "reference density")?;
        if !self.compressibility_per_bar.is_finite() || self.compressibility_per_bar < 0.0 {
            return Err(MeltError::NonPhysical {
                what: "compressibility must be finite and non-negative",
            });
        }
        let dp = to_bar(p) - self.reference_pressure_bar;
        let rho = rho_ref * (self.compressibility_per_bar * dp).exp();
        Ok(kg_m3(ensure_positive(rho, "melt density")?))
    }
}

/// Serializable melt definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeltDef {
    /// Dry major-element composition in weight percent.
    pub oxides_wt_percent: BTreeMap<Oxide, f64>,
    #[serde(default)]
    pub density: DensityModel,
    #[serde(default)]
    pub ferric_model: FerricModel,
}

/// Silicate melt with a fixed dry bulk composition.
#[derive(Debug, Clone, PartialEq)]
pub struct SilicateMelt {
    composition: OxideComposition,
    density: DensityModel,
    ferric_model: FerricModel,
    graphite_sat: bool,
    cm_dry: Option<OxideComposition>,
}

impl SilicateMelt {
    /// Create a melt from a composition on any basis; it is stored as mole fractions.
    pub fn new(composition: OxideComposition) -> MeltResult<Self> {
        Self::with_models(composition, DensityModel::default(), FerricModel::default())
    }

    pub fn with_models(
        composition: OxideComposition,
        density: DensityModel,
        ferric_model: FerricModel,
    ) -> MeltResult<Self> {
        let composition = composition.to_mole();
        if composition.fraction(Oxide::FeO) + composition.fraction(Oxide::Fe2O3) <= 0.0 {
            return Err(MeltError::MissingOxide { oxide: "FeO" });
        }
        // Fail early on a bad density law rather than inside a solubility call
        density.density(bar(density.reference_pressure_bar))?;
        Ok(Self {
            composition,
            density,
            ferric_model,
            graphite_sat: false,
            cm_dry: None,
        })
    }

    pub fn from_def(def: &MeltDef) -> MeltResult<Self> {
        let composition =
            OxideComposition::from_weight_percent(def.oxides_wt_percent.iter().map(|(o, w)| (*o, *w)))?;
        Self::with_models(composition, def.density, def.ferric_model)
    }
}

impl MeltModel for SilicateMelt {
    fn rho(&self, p: Pressure) -> MeltResult<Density> {
        self.density.density(p)
    }

    fn rho_reference(&self) -> MeltResult<Density> {
        self.density.density(bar(self.density.reference_pressure_bar))
    }

    fn cm(&self) -> &OxideComposition {
        &self.composition
    }

    fn ferric_model(&self) -> FerricModel {
        self.ferric_model
    }

    fn graphite_saturated(&self) -> bool {
        self.graphite_sat
    }

    fn set_graphite_saturated(&mut self, saturated: bool) {
        self.graphite_sat = saturated;
    }

    fn cm_dry(&self) -> Option<&OxideComposition> {
        self.cm_dry.as_ref()
    }

    fn set_cm_dry(&mut self, composition: OxideComposition) {
        tracing::trace!(
            feo = composition.fraction(Oxide::FeO),
            fe2o3 = composition.fraction(Oxide::Fe2O3),
            "caching dry melt composition"
        );
        self.cm_dry = Some(composition);
    }
}
