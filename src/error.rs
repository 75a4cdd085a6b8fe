//! Error types for the transport substrate
//!
//! Every failure in this crate is synchronous and raised at the point of
//! violation, before the violating write is committed. There is no retry
//! and no partial-failure mode: a call either fully completes or aborts
//! with one of the enums below. Callers are expected to treat any of these
//! as fatal to the current solve attempt.

use thiserror::Error;

// =================================================================================================
// Storage Errors
// =================================================================================================

/// Errors raised while allocating layer storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The requested point count cannot satisfy the layer's field groups.
    ///
    /// Point-indexed arrays need at least 1 grid point; any cell-indexed
    /// field group needs at least 2 (a cell is the span between two points).
    #[error("layer requires at least {required} grid points, got {actual}")]
    TooFewPoints {
        /// Minimum point count for this layer shape.
        required: usize,
        /// Point count that was requested.
        actual: usize,
    },
}

// =================================================================================================
// Profile Errors
// =================================================================================================

/// Errors raised by profile views and fractional-position interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    /// A profile view needs at least one component array and one grid point.
    #[error("profile view requires at least one component array and one grid point")]
    EmptyProfile,

    /// The wrapped arrays do not share a single length.
    #[error("wrapped profile arrays must share one length: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the first wrapped array.
        expected: usize,
        /// Offending length.
        actual: usize,
    },

    /// A component index beyond the profile's dimensionality.
    #[error("dimension {dimension} out of range for a {dimensions}-component profile")]
    DimensionOutOfRange {
        /// Requested component index.
        dimension: usize,
        /// Number of components in the profile.
        dimensions: usize,
    },

    /// A grid index beyond the profile length.
    #[error("profile index {profile_index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested grid index.
        profile_index: usize,
        /// Profile length.
        len: usize,
    },

    /// The offset points past the edge of the grid: there is no left
    /// neighbor at index 0 and no right neighbor at the last index.
    #[error(
        "interpolation at index {profile_index} with offset {frac_offset} \
         points outside the grid"
    )]
    OffsetOutOfDomain {
        /// Edge index at which interpolation was requested.
        profile_index: usize,
        /// The offending signed offset.
        frac_offset: f64,
    },

    /// The offset magnitude exceeds one full cell.
    #[error("frac_offset {frac_offset} outside the interpolation domain [-1, 1]")]
    OffsetOutOfRange {
        /// The offending signed offset.
        frac_offset: f64,
    },
}

// =================================================================================================
// Solver Errors
// =================================================================================================

/// Errors raised by the grid-marching ODE schemes.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolverError {
    /// The result buffer does not cover the grid; checked before any write.
    #[error("result buffer length {result_len} does not match grid length {grid_len}")]
    SizeMismatch {
        /// Length of the caller-supplied result buffer.
        result_len: usize,
        /// Number of points in the ODE's grid.
        grid_len: usize,
    },

    /// Marching needs at least one cell to step across.
    #[error("marching requires at least 2 grid points, got {len}")]
    GridTooShort {
        /// Number of points in the ODE's grid.
        len: usize,
    },

    /// A step produced a NaN or infinite state component.
    ///
    /// This indicates numerical instability in the right-hand side for the
    /// chosen grid spacing. The march aborts with every index up to and
    /// including the previous one already written.
    #[error("non-finite state produced at grid index {index}")]
    NonFinite {
        /// Grid index at which the non-finite state appeared.
        index: usize,
    },
}
