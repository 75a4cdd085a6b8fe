//! Concrete grid-marching schemes
//!
//! Both methods advance a vector-valued state across the grid in a chosen
//! [`Direction`](crate::solver::Direction), taking the signed step width
//! from the grid coordinates themselves; neither assumes uniform spacing.
//!
//! - [`solve_euler`]: first-order forward Euler, 1 evaluation per step —
//!   prototyping and cheap right-hand sides
//! - [`solve_euler_corrector`]: second-order predictor-corrector (Heun),
//!   2 evaluations per step — the workhorse for characteristics and
//!   quasi-stationary hydraulic marching
//!
//! The march is strictly sequential: each step's input is the previous
//! step's output, so there is nothing to parallelize within one call.

mod euler;
mod euler_corrector;

pub use euler::solve_euler;
pub use euler_corrector::solve_euler_corrector;

use crate::error::SolverError;

/// Shared entry checks for both schemes, run before any write.
pub(crate) fn check_march_preconditions(
    grid_len: usize,
    result_len: usize,
) -> Result<(), SolverError> {
    if grid_len < 2 {
        return Err(SolverError::GridTooShort { len: grid_len });
    }
    if result_len != grid_len {
        return Err(SolverError::SizeMismatch {
            result_len,
            grid_len,
        });
    }
    Ok(())
}
