use crate::VsError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely relative comparison (abs = 0).
    pub const fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, VsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VsError::NonFinite { what, value: v })
    }
}

/// Strictly positive and finite; the precondition of every power-law and log form.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, VsError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(VsError::NonPositive { what, value: v })
    }
}

/// Finite and >= 0.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, VsError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(VsError::NonPositive { what, value: v })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn positive_values_pass_through(v in 1e-300f64..1e300) {
            prop_assert_eq!(ensure_positive(v, "v"), Ok(v));
        }
    }
}
