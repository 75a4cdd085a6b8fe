//! Traits at the solver seam
//!
//! The marching schemes in [`methods`](crate::solver::methods) are generic
//! over three small contracts:
//!
//! - [`OdeState`]: the value algebra a state needs (copyable, addable,
//!   scalable by a step width) plus a finiteness probe
//! - [`OdeSystem`]: the problem — a grid and a right-hand side
//! - [`StateProfile`]: the writable result buffer shaped like a profile
//!
//! Scalar problems use `f64` states with a
//! [`ScalarProfile`](crate::profile::ScalarProfile) buffer; coupled systems
//! use `SVector<f64, D>` states with a
//! [`ProfileWrapper`](crate::profile::ProfileWrapper) buffer. The schemes
//! themselves never know the difference.

use std::ops::{Add, Mul};

use nalgebra::SVector;

use crate::profile::{ProfileWrapper, ScalarProfile};

// =================================================================================================
// State Algebra
// =================================================================================================

/// Value algebra of a marching state.
///
/// `y + g * dx` is the only arithmetic the schemes perform, so the bounds
/// are exactly that: copyable values that add and scale by an `f64` step.
pub trait OdeState: Copy + Add<Output = Self> + Mul<f64, Output = Self> {
    /// True when every component is neither NaN nor infinite.
    fn is_finite(&self) -> bool;
}

impl OdeState for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<const D: usize> OdeState for SVector<f64, D> {
    fn is_finite(&self) -> bool {
        self.iter().all(|component| component.is_finite())
    }
}

// =================================================================================================
// ODE System
// =================================================================================================

/// A right-hand side evaluated over a spatial grid.
///
/// The grid is an ordered, strictly monotonic coordinate sequence owned by
/// the pipe/geometry collaborator; it must stay immutable for the duration
/// of a solve. `right_hand_side` must be a pure function of `(index,
/// state)` with no dependency on prior calls — the predictor-corrector
/// scheme re-evaluates it at the same index with a hypothetical predicted
/// state.
///
/// # Example
///
/// ```rust
/// use pipeflow_rs::solver::OdeSystem;
///
/// /// dy/dx = -k * y along the pipe axis.
/// struct Decay {
///     grid: Vec<f64>,
///     k: f64,
/// }
///
/// impl OdeSystem for Decay {
///     type State = f64;
///
///     fn grid(&self) -> &[f64] {
///         &self.grid
///     }
///
///     fn right_hand_side(&self, _index: usize, state: &f64) -> f64 {
///         -self.k * state
///     }
/// }
/// ```
pub trait OdeSystem {
    /// State the system evolves: `f64` or `SVector<f64, D>`.
    type State: OdeState;

    /// The spatial grid the march runs over.
    fn grid(&self) -> &[f64];

    /// Derivative of the state with respect to the grid coordinate.
    fn right_hand_side(&self, index: usize, state: &Self::State) -> Self::State;
}

// =================================================================================================
// Result Buffer
// =================================================================================================

/// Writable per-grid-point state storage the marching schemes fill.
pub trait StateProfile {
    /// State value stored at each grid point.
    type State: OdeState;

    /// Number of grid points the buffer covers.
    fn len(&self) -> usize;

    /// True when the buffer covers no grid points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// State at one grid index.
    fn get(&self, index: usize) -> Self::State;

    /// Write the state at one grid index.
    fn set(&mut self, index: usize, value: Self::State);
}

impl StateProfile for ScalarProfile<'_> {
    type State = f64;

    fn len(&self) -> usize {
        ScalarProfile::len(self)
    }

    fn get(&self, index: usize) -> f64 {
        ScalarProfile::get(self, index)
    }

    fn set(&mut self, index: usize, value: f64) {
        ScalarProfile::set(self, index, value);
    }
}

impl<const D: usize> StateProfile for ProfileWrapper<'_, D> {
    type State = SVector<f64, D>;

    fn len(&self) -> usize {
        ProfileWrapper::len(self)
    }

    fn get(&self, index: usize) -> SVector<f64, D> {
        ProfileWrapper::get(self, index)
    }

    fn set(&mut self, index: usize, value: SVector<f64, D>) {
        ProfileWrapper::set(self, index, value);
    }
}

// =================================================================================================
// March Direction
// =================================================================================================

/// March order of the integrator along grid indices.
///
/// `Forward` seeds the initial condition at the first grid point and steps
/// toward the last; `Backward` seeds at the last point and steps toward the
/// first — used when the terminal condition is known and the evolution
/// travels backward, as in some characteristics formulations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right; initial condition at index 0.
    Forward,
    /// Right to left; initial condition at index `n - 1`.
    Backward,
}

impl Direction {
    /// Seed index and signed index step for a grid of `len` points.
    ///
    /// `len` must be at least 1.
    pub(crate) fn start_and_step(self, len: usize) -> (usize, isize) {
        match self {
            Self::Forward => (0, 1),
            Self::Backward => (len - 1, -1),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
