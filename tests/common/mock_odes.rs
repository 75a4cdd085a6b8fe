//! Mock ODE systems for testing
//!
//! These systems have known analytical solutions, making them ideal for
//! validating marching accuracy.

use nalgebra::SVector;
use pipeflow_rs::solver::OdeSystem;

/// Uniform grid of `n` points over `[0, length]`.
pub fn uniform_grid(n: usize, length: f64) -> Vec<f64> {
    (0..n)
        .map(|index| length * index as f64 / (n - 1) as f64)
        .collect()
}

// =================================================================================================
// Constant right-hand side: dy/dx = c
// =================================================================================================

/// Constant right-hand side: `dy/dx = c`.
///
/// Analytical solution: `y(x) = y0 + c * (x - x0)`. Both marching schemes
/// integrate this exactly, truncation-error free.
pub struct ConstantRhs {
    pub grid: Vec<f64>,
    pub rate: f64,
}

impl OdeSystem for ConstantRhs {
    type State = f64;

    fn grid(&self) -> &[f64] {
        &self.grid
    }

    fn right_hand_side(&self, _index: usize, _state: &f64) -> f64 {
        self.rate
    }
}

// =================================================================================================
// Exponential decay: dy/dx = -k * y
// =================================================================================================

/// Exponential decay: `dy/dx = -k * y`.
///
/// Analytical solution: `y(x) = y0 * exp(-k * x)`. The workhorse for
/// convergence-order measurements.
pub struct ExponentialDecay {
    pub grid: Vec<f64>,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn analytical_solution(&self, x: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * x).exp()
    }
}

impl OdeSystem for ExponentialDecay {
    type State = f64;

    fn grid(&self) -> &[f64] {
        &self.grid
    }

    fn right_hand_side(&self, _index: usize, state: &f64) -> f64 {
        -self.decay_rate * state
    }
}

// =================================================================================================
// Rotation: dy0/dx = y1, dy1/dx = -y0
// =================================================================================================

/// Coupled two-component rotation: `dy0/dx = y1`, `dy1/dx = -y0`.
///
/// From `y(0) = (0, 1)` the analytical solution is
/// `y(x) = (sin x, cos x)` — a genuinely coupled system for exercising
/// vector-valued states.
pub struct Rotation {
    pub grid: Vec<f64>,
}

impl OdeSystem for Rotation {
    type State = SVector<f64, 2>;

    fn grid(&self) -> &[f64] {
        &self.grid
    }

    fn right_hand_side(&self, _index: usize, state: &Self::State) -> Self::State {
        SVector::<f64, 2>::new(state[1], -state[0])
    }
}
