//! Per-time-step field storage
//!
//! A [`Layer`] owns four groups of arrays sized from a single `point_count`:
//!
//! - point scalar fields, each of length `n`
//! - cell scalar fields, each of length `n - 1`
//! - point vector fields (fixed width), each of length `n`
//! - cell vector fields (fixed width), each of length `n - 1`
//!
//! A layer is created once per time step by the owning solver, mutated
//! element-wise during the step, and dropped when the step is discarded.
//! Nothing mutates shape after construction, so a layer built from
//! `point_count` stays internally consistent for its whole lifetime.

use nalgebra::SVector;

use crate::error::{ProfileError, StorageError};
use crate::profile::ProfileWrapper;

// =================================================================================================
// Allocation Seam
// =================================================================================================

/// Grid-sized storage that can be allocated from a point count alone.
///
/// This is the seam [`CompositeLayer`](crate::storage::CompositeLayer)
/// builds through: every member layer of a composite receives the same
/// `point_count`, which is what guarantees the cross-layer size invariant.
pub trait GridStorage: Sized {
    /// Allocate storage shaped for `point_count` grid points.
    fn with_point_count(point_count: usize) -> Result<Self, StorageError>;
}

// =================================================================================================
// Layer
// =================================================================================================

/// Fixed-shape field storage for one time step.
///
/// The const parameters fix the number of fields per group and the vector
/// widths at compile time:
///
/// - `POINT_SCALAR` scalar fields over grid points
/// - `CELL_SCALAR` scalar fields over cells
/// - `POINT_VECTOR` fields of `SVector<f64, POINT_VECTOR_DIM>` over points
/// - `CELL_VECTOR` fields of `SVector<f64, CELL_VECTOR_DIM>` over cells
///
/// Trailing parameters default to zero, so the common shapes stay short:
/// `Layer<2>` is two point scalars, `Layer<1, 1>` adds one cell scalar.
///
/// # Example
///
/// ```rust
/// use pipeflow_rs::storage::Layer;
///
/// let mut layer = Layer::<2, 1>::new(5).unwrap();
/// assert_eq!(layer.point_scalar[0].len(), 5);
/// assert_eq!(layer.cell_scalar[0].len(), 4);
///
/// layer.point_scalar[1][3] = 870.0;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<
    const POINT_SCALAR: usize,
    const CELL_SCALAR: usize = 0,
    const POINT_VECTOR: usize = 0,
    const POINT_VECTOR_DIM: usize = 0,
    const CELL_VECTOR: usize = 0,
    const CELL_VECTOR_DIM: usize = 0,
> {
    /// Scalar fields over grid points, each of length `point_count`.
    pub point_scalar: [Vec<f64>; POINT_SCALAR],
    /// Scalar fields over cells, each of length `point_count - 1`.
    pub cell_scalar: [Vec<f64>; CELL_SCALAR],
    /// Vector fields over grid points, each of length `point_count`.
    pub point_vector: [Vec<SVector<f64, POINT_VECTOR_DIM>>; POINT_VECTOR],
    /// Vector fields over cells, each of length `point_count - 1`.
    pub cell_vector: [Vec<SVector<f64, CELL_VECTOR_DIM>>; CELL_VECTOR],
    point_count: usize,
}

impl<
        const POINT_SCALAR: usize,
        const CELL_SCALAR: usize,
        const POINT_VECTOR: usize,
        const POINT_VECTOR_DIM: usize,
        const CELL_VECTOR: usize,
        const CELL_VECTOR_DIM: usize,
    >
    Layer<POINT_SCALAR, CELL_SCALAR, POINT_VECTOR, POINT_VECTOR_DIM, CELL_VECTOR, CELL_VECTOR_DIM>
{
    /// Allocate all field groups, zero-filled, for `point_count` grid points.
    ///
    /// # Errors
    ///
    /// [`StorageError::TooFewPoints`] when `point_count < 1`, or when the
    /// layer has cell-indexed fields and `point_count < 2`.
    pub fn new(point_count: usize) -> Result<Self, StorageError> {
        if point_count < 1 {
            return Err(StorageError::TooFewPoints {
                required: 1,
                actual: point_count,
            });
        }
        if (CELL_SCALAR > 0 || CELL_VECTOR > 0) && point_count < 2 {
            return Err(StorageError::TooFewPoints {
                required: 2,
                actual: point_count,
            });
        }

        Ok(Self {
            point_scalar: std::array::from_fn(|_| vec![0.0; point_count]),
            cell_scalar: std::array::from_fn(|_| vec![0.0; point_count - 1]),
            point_vector: std::array::from_fn(|_| vec![SVector::zeros(); point_count]),
            cell_vector: std::array::from_fn(|_| vec![SVector::zeros(); point_count - 1]),
            point_count,
        })
    }

    /// Number of grid points every point-indexed array holds.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Number of cells every cell-indexed array holds.
    pub fn cell_count(&self) -> usize {
        self.point_count - 1
    }

    /// Bind all point scalar fields into one vector-valued profile view.
    ///
    /// The view borrows the layer mutably; element updates and fractional
    /// interpolation go through [`ProfileWrapper`].
    pub fn point_scalar_profile(&mut self) -> Result<ProfileWrapper<'_, POINT_SCALAR>, ProfileError> {
        ProfileWrapper::new(self.point_scalar.each_mut().map(|field| field.as_mut_slice()))
    }

    /// Bind all cell scalar fields into one vector-valued profile view.
    pub fn cell_scalar_profile(&mut self) -> Result<ProfileWrapper<'_, CELL_SCALAR>, ProfileError> {
        ProfileWrapper::new(self.cell_scalar.each_mut().map(|field| field.as_mut_slice()))
    }
}

impl<
        const POINT_SCALAR: usize,
        const CELL_SCALAR: usize,
        const POINT_VECTOR: usize,
        const POINT_VECTOR_DIM: usize,
        const CELL_VECTOR: usize,
        const CELL_VECTOR_DIM: usize,
    > GridStorage
    for Layer<POINT_SCALAR, CELL_SCALAR, POINT_VECTOR, POINT_VECTOR_DIM, CELL_VECTOR, CELL_VECTOR_DIM>
{
    fn with_point_count(point_count: usize) -> Result<Self, StorageError> {
        Self::new(point_count)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
