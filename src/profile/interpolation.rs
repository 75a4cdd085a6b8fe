//! Linear interpolation primitives shared by the profile views

use std::ops::{Add, Mul};

/// Linear blend of two values: `f1 * (1 - p) + f2 * p`.
///
/// `p = 0` returns `f1`, `p = 1` returns `f2`. Generic over anything with a
/// value-level affine structure, so it works for plain scalars and for
/// fixed-size state vectors alike.
///
/// # Example
///
/// ```rust
/// use pipeflow_rs::profile::linear_interpolation;
///
/// assert_eq!(linear_interpolation(10.0, 20.0, 0.25), 12.5);
/// ```
pub fn linear_interpolation<T>(f1: T, f2: T, p: f64) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    f1 * (1.0 - p) + f2 * p
}

/// Fractional-offset sample of `values` around `index`.
///
/// Zero offset returns the stored value; a positive offset blends toward
/// `index + 1`, a negative one toward `index - 1` with weight
/// `1 + frac_offset`. Bounds must have been checked by the caller.
pub(crate) fn interpolate_at(values: &[f64], index: usize, frac_offset: f64) -> f64 {
    if frac_offset == 0.0 {
        values[index]
    } else if frac_offset > 0.0 {
        linear_interpolation(values[index], values[index + 1], frac_offset)
    } else {
        linear_interpolation(values[index - 1], values[index], 1.0 + frac_offset)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
