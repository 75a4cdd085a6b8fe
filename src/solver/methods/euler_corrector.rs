//! Second-order predictor-corrector grid march (Heun's method)
//!
//! # Mathematical Background
//!
//! The explicit trapezoidal scheme advances one step by averaging the
//! derivative at the current point with the derivative at a forward-Euler
//! prediction of the next point:
//!
//! ```text
//! dx         = grid[next] - grid[index]            (signed, non-uniform)
//! gradient_0 = f(index, y_index)                   (predictor slope)
//! prediction = y_index + dx * gradient_0
//! gradient_1 = f(next, prediction)                 (corrector slope)
//! y_next     = y_index + dx * (gradient_0 + gradient_1) / 2
//! ```
//!
//! # Characteristics
//!
//! - **Order**: second-order accurate — local truncation error O(dx³),
//!   global error O(dx²) for smooth right-hand sides
//! - **Cost**: 2 right-hand-side evaluations per step
//! - **Stability**: no adaptive step control and no stability check; the
//!   caller chooses grid spacing and the sign discipline of `dx`
//!
//! A linear right-hand side is integrated exactly: for `f ≡ c` the result
//! is the analytic line `y_i = y_0 + c * (grid[i] - grid[0])` with no
//! truncation error, which is what the marching tests pin down.
//!
//! # Marching over a grid, not over time
//!
//! The state machine runs over grid indices. [`Direction::Forward`] seeds
//! the initial condition at the first point; [`Direction::Backward`] seeds
//! at the last point and marches with negative `dx` — used when the
//! terminal condition is known, as in characteristics formulations of
//! quasi-stationary pipeline models.

use crate::error::SolverError;
use crate::solver::methods::check_march_preconditions;
use crate::solver::{Direction, OdeState, OdeSystem, StateProfile};

/// March a state across the grid with the predictor-corrector scheme.
///
/// Writes `initial_condition` at the seed index chosen by `direction`, then
/// performs exactly `n - 1` Heun steps, filling every grid index of
/// `result` sequentially. No other state is mutated; a fresh call
/// recomputes from the seed (the march is not restartable mid-sequence).
///
/// # Errors
///
/// - [`SolverError::SizeMismatch`] when `result.len() != grid.len()`,
///   before any write
/// - [`SolverError::GridTooShort`] when the grid has fewer than 2 points
/// - [`SolverError::NonFinite`] when a corrector step produces NaN or
///   infinity; indices already marched remain written
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
/// solve_euler_corrector(&ode, Direction::Forward, 5.0, &mut result)?;
/// assert_eq!(result.as_slice(), &[5.0, 25.0, 55.0]);
/// # Ok(())
/// # }
/// ```
pub fn solve_euler_corrector<O, P>(
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

        // predictor: forward Euler estimate of the next state
        let gradient_0 = ode.right_hand_side(index, &state);
        let prediction = state + gradient_0 * dx;

        // corrector: average the slopes at both ends of the step
        let gradient_1 = ode.right_hand_side(next, &prediction);
        let advanced = state + (gradient_0 + gradient_1) * (dx / 2.0);

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
