//! vs-solubility: volatile solubility laws for silicate melts.
//!
//! Converts between the gas state (fugacity or mole fraction) and the melt
//! content of H2, H2O, CO2, CO, CH4, S2 and N2 under a chosen published law.
//!
//! # Example
//!
//! ```no_run
//! use vs_core::units::{bar, k};
//! use vs_melt::{FO2Buffer, GasSpecies, Species};
//! use vs_solubility::{Conditions, H2OLaw, h2o_fugacity, h2o_melt};
//!
//! let cond = Conditions::at_buffer(bar(100.0), k(1473.15), FO2Buffer::FMQ, 0.0).unwrap();
//! let h2o = GasSpecies::new(Species::H2O).with_coefficients(1e-4, 0.7);
//! let w = h2o_melt(0.5, &h2o, &cond, H2OLaw::Burguisser2015, None).unwrap();
//! let f = h2o_fugacity(w, &h2o, H2OLaw::Burguisser2015).unwrap();
//! assert!((f - 50.0).abs() < 1e-9);
//! ```

pub mod carbon;
pub mod conditions;
pub mod config;
pub mod dispatch;
pub mod eguchi;
pub mod error;
pub mod hydrogen;
pub mod law;
pub mod nitrogen;
mod power_law;
pub mod sulfur;

pub use conditions::Conditions;
pub use config::{LawSelection, SolubilityConfig, load_json, load_yaml, save_yaml};
pub use dispatch::*;
pub use eguchi::graphite_fco2;
pub use error::{SolubilityError, SolubilityResult};
pub use law::{CH4Law, CO2Law, COLaw, H2Law, H2OLaw, N2Law, SulfateLaw, SulfideCapacityLaw};
pub use nitrogen::N2_SEEDS;
