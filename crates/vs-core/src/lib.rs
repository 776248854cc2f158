//! vs-core: shared foundation for volsol.
//!
//! Contains:
//! - units (uom SI types + bar/kelvin constructors)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VsError, VsResult};
pub use numeric::*;
pub use units::*;
