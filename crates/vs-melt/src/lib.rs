//! vs-melt: silicate melt and gas-species state for volsol.
//!
//! Provides:
//! - Volatile species definitions (H2, H2O, CO2, CO, CH4, S2, N2, O2)
//! - Oxide definitions and melt compositions on mole, weight and single-cation bases
//! - Oxygen fugacity buffers and the ferric/ferrous equilibrium
//! - `MeltModel` trait consumed by the solubility engine, with `SilicateMelt`
//! - `GasSpecies` records carrying solubility-law coefficients
//!
//! # Example
//!
//! ```no_run
//! use vs_melt::{FO2Buffer, MeltModel, Oxide, OxideComposition, SilicateMelt};
//! use vs_core::units::{bar, k};
//!
//! let comp = OxideComposition::from_weight_percent([
//!     (Oxide::SiO2, 50.0),
//!     (Oxide::Al2O3, 15.0),
//!     (Oxide::FeO, 10.0),
//!     (Oxide::MgO, 8.0),
//!     (Oxide::CaO, 11.0),
//!     (Oxide::Na2O, 3.0),
//! ])
//! .unwrap();
//! let melt = SilicateMelt::new(comp).unwrap();
//! let fo2 = FO2Buffer::FMQ.absolute_fo2(0.0, k(1473.15), bar(1000.0));
//! let iron = melt.iron_fraction(k(1473.15), bar(1000.0), fo2.ln()).unwrap();
//! println!("Fe2O3/FeO = {}", iron.ferric_ferrous);
//! ```

pub mod composition;
pub mod conversions;
pub mod error;
pub mod gas;
pub mod melt;
pub mod oxide;
pub mod redox;
pub mod species;

// Re-exports for ergonomics
pub use composition::{Basis, OxideComposition};
pub use error::{MeltError, MeltResult};
pub use gas::{GasSpecies, SolubilityCoefficients};
pub use melt::{DensityModel, IronSpeciation, MeltDef, MeltModel, SilicateMelt};
pub use oxide::Oxide;
pub use redox::{FO2Buffer, FerricModel};
pub use species::Species;
