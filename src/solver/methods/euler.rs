//! First-order explicit grid march (forward Euler)
//!
//! # Mathematical Background
//!
//! The forward Euler method is the simplest explicit scheme for advancing
//! an ODE along the grid coordinate:
//!
//! ```text
//! dy/dx = f(x, y)
//! y_{next} = y_{index} + dx * f(x_{index}, y_{index})
//! ```
//!
//! with a signed, non-uniform step `dx = grid[next] - grid[index]` taken
//! from the grid itself.
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error O(dx))
//! - **Cost**: 1 right-hand-side evaluation per step
//! - **Stability**: conditional; the caller picks the grid spacing
//!
//! Use it for prototyping and for right-hand sides cheap enough that grid
//! refinement beats a higher-order scheme. For production hydraulic
//! marching prefer [`solve_euler_corrector`](crate::solver::solve_euler_corrector),
//! which halves the order of the error for one extra evaluation per step.

use crate::error::SolverError;
use crate::solver::methods::check_march_preconditions;
use crate::solver::{Direction, OdeState, OdeSystem, StateProfile};

/// March a state across the grid with the first-order explicit scheme.
///
/// Writes `initial_condition` at the seed index chosen by `direction`, then
/// performs exactly `n - 1` forward Euler steps, filling every grid index
/// of `result` sequentially.
///
/// # Errors
///
/// - [`SolverError::SizeMismatch`] when `result.len() != grid.len()`,
///   before any write
/// - [`SolverError::GridTooShort`] when the grid has fewer than 2 points
/// - [`SolverError::NonFinite`] when a step produces NaN or infinity
///
/// # Example
///
/// ```rust
/// use pipeflow_rs::prelude::*;
///
/// struct Constant {
///     grid: Vec<f64>,
/// }
///
/// impl OdeSystem for Constant {
///     type State = f64;
///     fn grid(&self) -> &[f64] {
///         &self.grid
///     }
///     fn right_hand_side(&self, _index: usize, _state: &f64) -> f64 {
///         2.0
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ode = Constant { grid: vec![0.0, 10.0, 25.0] };
/// let mut storage = vec![0.0; 3];
/// let mut result = ScalarProfile::new(&mut storage)?;
///
/// solve_euler(&ode, Direction::Forward, 5.0, &mut result)?;
/// assert_eq!(result.as_slice(), &[5.0, 25.0, 55.0]);
/// # Ok(())
/// # }
/// ```
pub fn solve_euler<O, P>(
    ode: &O,
    direction: Direction,
    initial_condition: P::State,
    result: &mut P,
) -> Result<(), SolverError>
where
    O: OdeSystem,
    P: StateProfile<State = O::State>,
{
    let grid = ode.grid();
    check_march_preconditions(grid.len(), result.len())?;

    let (start, step) = direction.start_and_step(grid.len());
    result.set(start, initial_condition);

    let mut index = start;
    for _ in 0..grid.len() - 1 {
        let next = (index as isize + step) as usize;
        let dx = grid[next] - grid[index];

        let state = result.get(index);
        let gradient = ode.right_hand_side(index, &state);
        let advanced = state + gradient * dx;

        if !advanced.is_finite() {
            return Err(SolverError::NonFinite { index: next });
        }
        result.set(next, advanced);
        index = next;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ScalarProfile;

    struct Constant {
        grid: Vec<f64>,
        rate: f64,
    }

    impl OdeSystem for Constant {
        type State = f64;

        fn grid(&self) -> &[f64] {
            &self.grid
        }

        fn right_hand_side(&self, _index: usize, _state: &f64) -> f64 {
            self.rate
        }
    }

    #[test]
    fn exact_for_constant_right_hand_side() {
        let ode = Constant {
            grid: vec![0.0, 10.0, 25.0],
            rate: 2.0,
        };
        let mut storage = vec![0.0; 3];
        let mut result = ScalarProfile::new(&mut storage).unwrap();

        solve_euler(&ode, Direction::Forward, 5.0, &mut result).unwrap();
        assert_eq!(result.as_slice(), &[5.0, 25.0, 55.0]);
    }

    #[test]
    fn backward_march_recovers_the_same_line() {
        let ode = Constant {
            grid: vec![0.0, 10.0, 25.0],
            rate: 2.0,
        };
        let mut storage = vec![0.0; 3];
        let mut result = ScalarProfile::new(&mut storage).unwrap();

        solve_euler(&ode, Direction::Backward, 55.0, &mut result).unwrap();
        assert_eq!(result.as_slice(), &[5.0, 25.0, 55.0]);
    }

    #[test]
    fn buffer_size_must_match_grid() {
        let ode = Constant {
            grid: vec![0.0, 10.0, 25.0],
            rate: 2.0,
        };
        let mut storage = vec![0.0; 2];
        let mut result = ScalarProfile::new(&mut storage).unwrap();

        let error = solve_euler(&ode, Direction::Forward, 5.0, &mut result).unwrap_err();
        assert_eq!(
            error,
            SolverError::SizeMismatch {
                result_len: 2,
                grid_len: 3
            }
        );
        // nothing was written
        assert_eq!(storage, vec![0.0, 0.0]);
    }
}
