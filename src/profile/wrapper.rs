//! Profile views over externally owned field arrays
//!
//! Neither view in this module owns storage. Both borrow arrays that live in
//! a [`Layer`](crate::storage::Layer) (or anywhere else the caller keeps
//! them) and must not outlive it; the borrow checker enforces exactly the
//! lifetime discipline the design needs, so there is no handle or arena
//! indirection here.

use nalgebra::SVector;

use crate::error::ProfileError;
use crate::profile::interpolation::interpolate_at;

// =================================================================================================
// ProfileWrapper
// =================================================================================================

/// Non-owning view binding `D` scalar arrays into one `D`-component profile.
///
/// All wrapped arrays must share one length `n >= 1`; this is checked at
/// construction and fixed for the view's lifetime. Indexed access returns
/// the composite value at a grid point as an `SVector<f64, D>`, and
/// [`interpolate`](Self::interpolate) samples the profile at fractional
/// grid positions (see the [module docs](crate::profile) for the offset
/// rule).
///
/// # Example
///
/// ```rust
/// use pipeflow_rs::profile::ProfileWrapper;
///
/// let mut density = vec![850.0, 860.0, 870.0];
/// let mut viscosity = vec![10e-6, 12e-6, 14e-6];
///
/// let profile =
///     ProfileWrapper::new([density.as_mut_slice(), viscosity.as_mut_slice()]).unwrap();
///
/// let at_half_cell = profile.interpolate(0, 0.5).unwrap();
/// assert_eq!(at_half_cell[0], 855.0);
/// assert!((at_half_cell[1] - 11e-6).abs() < 1e-18);
/// ```
#[derive(Debug)]
pub struct ProfileWrapper<'a, const D: usize> {
    profiles: [&'a mut [f64]; D],
    len: usize,
}

impl<'a, const D: usize> ProfileWrapper<'a, D> {
    /// Wrap `D` mutable arrays as one profile.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::EmptyProfile`] when `D == 0` or the arrays are
    ///   empty
    /// - [`ProfileError::LengthMismatch`] when the arrays disagree on
    ///   length — a programming error in the owning solver
    pub fn new(profiles: [&'a mut [f64]; D]) -> Result<Self, ProfileError> {
        if D == 0 {
            return Err(ProfileError::EmptyProfile);
        }
        let len = profiles[0].len();
        if len == 0 {
            return Err(ProfileError::EmptyProfile);
        }
        for profile in &profiles {
            if profile.len() != len {
                return Err(ProfileError::LengthMismatch {
                    expected: len,
                    actual: profile.len(),
                });
            }
        }
        Ok(Self { profiles, len })
    }

    /// The shared length `n` of every wrapped array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects empty profiles.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Composite value at one grid point, all components at once.
    pub fn get(&self, profile_index: usize) -> SVector<f64, D> {
        SVector::from_fn(|dimension, _| self.profiles[dimension][profile_index])
    }

    /// Write all components at one grid point.
    pub fn set(&mut self, profile_index: usize, value: SVector<f64, D>) {
        for (dimension, profile) in self.profiles.iter_mut().enumerate() {
            profile[profile_index] = value[dimension];
        }
    }

    /// Simultaneous exclusive references to every component at one index.
    ///
    /// The components live in physically separate arrays, so handing out
    /// all `D` references at once is sound.
    pub fn components_mut(&mut self, profile_index: usize) -> [&mut f64; D] {
        self.profiles
            .each_mut()
            .map(|profile| &mut profile[profile_index])
    }

    /// Raw stored scalar for one component at one grid point.
    pub fn value(&self, dimension: usize, profile_index: usize) -> f64 {
        self.profiles[dimension][profile_index]
    }

    /// In-place access to one stored scalar, for the owning solver.
    pub fn value_mut(&mut self, dimension: usize, profile_index: usize) -> &mut f64 {
        &mut self.profiles[dimension][profile_index]
    }

    /// The whole underlying array for component `dimension`.
    pub fn profile(&self, dimension: usize) -> &[f64] {
        &self.profiles[dimension][..]
    }

    /// Mutable access to the whole underlying array for component
    /// `dimension`, for bulk operations such as copying a previous layer.
    pub fn profile_mut(&mut self, dimension: usize) -> &mut [f64] {
        &mut self.profiles[dimension][..]
    }

    /// Sample one component at a fractional grid position.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::DimensionOutOfRange`] when `dimension >= D`
    /// - [`ProfileError::IndexOutOfRange`] when `profile_index >= n`
    /// - [`ProfileError::OffsetOutOfRange`] when `|frac_offset| > 1`
    /// - [`ProfileError::OffsetOutOfDomain`] when the offset points past
    ///   the first or last grid point
    pub fn interpolate_dimension(
        &self,
        dimension: usize,
        profile_index: usize,
        frac_offset: f64,
    ) -> Result<f64, ProfileError> {
        if dimension >= D {
            return Err(ProfileError::DimensionOutOfRange {
                dimension,
                dimensions: D,
            });
        }
        check_offset(self.len, profile_index, frac_offset)?;
        Ok(interpolate_at(self.profiles[dimension], profile_index, frac_offset))
    }

    /// Sample all components at a fractional grid position.
    ///
    /// The boundary-range rule is the same as for
    /// [`interpolate_dimension`](Self::interpolate_dimension), checked once
    /// for the whole composite value.
    pub fn interpolate(
        &self,
        profile_index: usize,
        frac_offset: f64,
    ) -> Result<SVector<f64, D>, ProfileError> {
        check_offset(self.len, profile_index, frac_offset)?;
        Ok(SVector::from_fn(|dimension, _| {
            interpolate_at(self.profiles[dimension], profile_index, frac_offset)
        }))
    }
}

// =================================================================================================
// ScalarProfile
// =================================================================================================

/// The one-dimensional profile view: a single array, plain `f64` values.
///
/// Scalar transport (a density profile, a single characteristic line) does
/// not need the composite machinery, so it gets a genuinely simpler path
/// instead of a one-component [`ProfileWrapper`].
///
/// # Example
///
/// ```rust
/// use pipeflow_rs::profile::ScalarProfile;
///
/// let mut density = vec![850.0, 860.0, 870.0];
/// let profile = ScalarProfile::new(&mut density).unwrap();
///
/// assert_eq!(profile.interpolate(1, 0.0).unwrap(), 860.0);
/// assert_eq!(profile.interpolate(1, -0.25).unwrap(), 857.5);
/// ```
#[derive(Debug)]
pub struct ScalarProfile<'a> {
    values: &'a mut [f64],
}

impl<'a> ScalarProfile<'a> {
    /// Wrap a single mutable array as a scalar profile.
    ///
    /// # Errors
    ///
    /// [`ProfileError::EmptyProfile`] when the array is empty.
    pub fn new(values: &'a mut [f64]) -> Result<Self, ProfileError> {
        if values.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }
        Ok(Self { values })
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty profiles.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored value at one grid point.
    pub fn get(&self, profile_index: usize) -> f64 {
        self.values[profile_index]
    }

    /// Write the value at one grid point.
    pub fn set(&mut self, profile_index: usize, value: f64) {
        self.values[profile_index] = value;
    }

    /// In-place access to one stored value.
    pub fn value_mut(&mut self, profile_index: usize) -> &mut f64 {
        &mut self.values[profile_index]
    }

    /// The whole underlying array.
    pub fn as_slice(&self) -> &[f64] {
        self.values
    }

    /// Mutable access to the whole underlying array.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.values
    }

    /// Sample the profile at a fractional grid position.
    ///
    /// Same offset rule and range errors as
    /// [`ProfileWrapper::interpolate`], minus the dimension check.
    pub fn interpolate(&self, profile_index: usize, frac_offset: f64) -> Result<f64, ProfileError> {
        check_offset(self.values.len(), profile_index, frac_offset)?;
        Ok(interpolate_at(self.values, profile_index, frac_offset))
    }
}

// =================================================================================================
// Shared range checks
// =================================================================================================

fn check_offset(len: usize, profile_index: usize, frac_offset: f64) -> Result<(), ProfileError> {
    if !(-1.0..=1.0).contains(&frac_offset) {
        return Err(ProfileError::OffsetOutOfRange { frac_offset });
    }
    if profile_index >= len {
        return Err(ProfileError::IndexOutOfRange { profile_index, len });
    }
    if profile_index == 0 && frac_offset < 0.0 {
        return Err(ProfileError::OffsetOutOfDomain {
            profile_index,
            frac_offset,
        });
    }
    if profile_index == len - 1 && frac_offset > 0.0 {
        return Err(ProfileError::OffsetOutOfDomain {
            profile_index,
            frac_offset,
        });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
