//! Physical state shared by every solubility call.

use crate::error::{SolubilityResult, positive};
use vs_core::units::{Pressure, Temperature, to_bar, to_kelvin};
use vs_melt::FO2Buffer;

/// Pressure, temperature and absolute oxygen fugacity of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub p: Pressure,
    pub t: Temperature,
    /// Absolute fO2 [bar]
    pub fo2: f64,
}

impl Conditions {
    pub fn new(p: Pressure, t: Temperature, fo2: f64) -> SolubilityResult<Self> {
        positive(to_bar(p), "pressure")?;
        positive(to_kelvin(t), "temperature")?;
        positive(fo2, "oxygen fugacity")?;
        Ok(Self { p, t, fo2 })
    }

    /// Conditions with fO2 given as a log-unit offset from a buffer.
    pub fn at_buffer(
        p: Pressure,
        t: Temperature,
        buffer: FO2Buffer,
        delta: f64,
    ) -> SolubilityResult<Self> {
        Self::new(p, t, buffer.absolute_fo2(delta, t, p))
    }

    pub fn p_bar(&self) -> f64 {
        to_bar(self.p)
    }

    pub fn t_kelvin(&self) -> f64 {
        to_kelvin(self.t)
    }

    pub fn ln_fo2(&self) -> f64 {
        self.fo2.ln()
    }
}
