//! Scalar root finding for the implicit solubility relations.
//!
//! This crate provides a damped Newton solver with a positivity constraint and
//! a bounded seed ladder that retries the solve from a fixed list of starting
//! points before giving up.

pub mod derivative;
pub mod error;
pub mod ladder;
pub mod newton;

pub use error::{SolverError, SolverResult};
pub use ladder::{LadderSolution, solve_with_seed_ladder};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
