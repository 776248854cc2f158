// vs-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Pressure in bar, the unit every solubility law is fitted in.
#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn to_g_cm3(rho: Density) -> f64 {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    rho.get::<gram_per_cubic_centimeter>()
}

pub mod constants {
    /// Gas constant used by the fitted speciation models [J/(mol·K)]
    pub const R_J_MOL_K: f64 = 8.3144;

    /// bar -> atm
    pub const ATM_PER_BAR: f64 = 0.986923;

    /// bar -> GPa
    pub const GPA_PER_BAR: f64 = 1e-4;

    /// ppm -> weight fraction
    pub const PPM: f64 = 1e-6;
}
