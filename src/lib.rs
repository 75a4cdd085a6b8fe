//! pipeflow-rs: Pipeline Transport Simulation Substrate
//!
//! A reusable numerical core for simulating transport phenomena along a
//! one-dimensional spatial grid (e.g., a pipeline). It provides the three
//! pieces every method-of-characteristics or quasi-stationary hydraulic
//! solver rebuilds otherwise:
//!
//! 1. **Layered field storage** — per-point and per-cell arrays for one
//!    time step, with field counts and vector widths fixed at compile time
//! 2. **Profile views** — several independently stored scalar arrays
//!    addressed as one vector-valued profile, including interpolation at
//!    fractional grid positions
//! 3. **Grid marching** — explicit first- and second-order
//!    (predictor-corrector) ODE schemes that advance a state from one end
//!    of the grid to the other
//!
//! # Architecture
//!
//! The crate is built on two principles:
//!
//! 1. **Separation of storage and numerics**
//!    - Layers own memory, laid out per field for vectorizable updates
//!    - Profile views and marching schemes borrow it, never own it
//!
//! 2. **Compile-time shapes**
//!    - Field counts, vector widths, and auxiliary-layer positions are
//!      const generics: shape errors fail the build, not the solve
//!
//! Everything here is a deterministic, single-threaded kernel: no I/O, no
//! global state, no hidden allocation after a layer is built. Pipeline
//! geometry, boundary time series, and output belong to the consuming
//! solver.
//!
//! # Quick Start
//!
//! ```rust
//! use pipeflow_rs::prelude::*;
//!
//! /// dy/dx = 2 along the pipe: the analytic solution is a line.
//! struct Constant {
//!     grid: Vec<f64>,
//! }
//!
//! impl OdeSystem for Constant {
//!     type State = f64;
//!
//!     fn grid(&self) -> &[f64] {
//!         &self.grid
//!     }
//!
//!     fn right_hand_side(&self, _index: usize, _state: &f64) -> f64 {
//!         2.0
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // one time step's worth of storage: a single point scalar field
//! let mut layer = Layer::<1>::new(3)?;
//!
//! let ode = Constant { grid: vec![0.0, 10.0, 25.0] };
//! let mut result = ScalarProfile::new(&mut layer.point_scalar[0])?;
//! solve_euler_corrector(&ode, Direction::Forward, 5.0, &mut result)?;
//!
//! assert_eq!(layer.point_scalar[0], vec![5.0, 25.0, 55.0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`storage`]: layered field storage ([`Layer`](storage::Layer),
//!   [`CompositeLayer`](storage::CompositeLayer))
//! - [`profile`]: vector-valued profile views with fractional
//!   interpolation
//! - [`solver`]: grid-marching ODE schemes and their traits
//! - [`error`]: typed failure taxonomy

pub mod error;
pub mod profile;
pub mod solver;
pub mod storage;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use pipeflow_rs::prelude::*;
    //! ```

    pub use crate::error::{ProfileError, SolverError, StorageError};
    pub use crate::profile::{linear_interpolation, ProfileWrapper, ScalarProfile};
    pub use crate::solver::{
        solve_euler, solve_euler_corrector, Direction, OdeState, OdeSystem, StateProfile,
    };
    pub use crate::storage::{CompositeLayer, GridStorage, Layer, SelectLayer};
}
