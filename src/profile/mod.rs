//! Vector-valued profile views with fractional-position interpolation
//!
//! Solvers lay out memory per field — one contiguous array per physical
//! component — because per-field update loops vectorize well. Interpolation
//! and characteristic tracing, on the other hand, want one logical
//! vector-valued function of grid position. A [`ProfileWrapper`] reconciles
//! the two: it borrows `D` independently stored scalar arrays and exposes
//! them as a single `D`-component profile addressable at fractional grid
//! positions.
//!
//! # Fractional addressing
//!
//! A query `(profile_index, frac_offset)` with `frac_offset ∈ [-1, 1]`
//! names a virtual position between a grid point and one of its neighbors:
//!
//! ```text
//! frac_offset =  0      exactly profile_index
//! frac_offset =  p > 0  toward profile_index + 1 with weight p
//! frac_offset = -p < 0  toward profile_index - 1 with weight 1 - p
//! ```
//!
//! "This grid point, fractionally advected by up to one full cell" is the
//! natural query shape for semi-Lagrangian and characteristics schemes.
//! Requests that point past the edge of the grid are range errors, as are
//! offsets of magnitude greater than one.
//!
//! The scalar case has its own, simpler path: [`ScalarProfile`] wraps a
//! single array and trades the composite `SVector` values for plain `f64`.

mod interpolation;
mod wrapper;

pub use interpolation::linear_interpolation;
pub use wrapper::{ProfileWrapper, ScalarProfile};
