//! End-to-end marching scenarios: layers, profile views, and the
//! predictor-corrector scheme working together the way a consuming
//! hydraulic solver drives them.

use nalgebra::SVector;
use pipeflow_rs::prelude::*;

mod common;
use common::{assert_profiles_close, uniform_grid, ConstantRhs, Rotation};

#[test]
fn constant_rhs_forward_matches_the_analytic_line() {
    let ode = ConstantRhs {
        grid: vec![0.0, 10.0, 25.0],
        rate: 2.0,
    };
    let mut storage = vec![0.0; 3];
    let mut result = ScalarProfile::new(&mut storage).unwrap();

    solve_euler_corrector(&ode, Direction::Forward, 5.0, &mut result).unwrap();

    // y_i = y_0 + c * (grid_i - grid_0), exactly
    assert_eq!(storage, vec![5.0, 25.0, 55.0]);
}

#[test]
fn backward_march_from_the_terminal_condition_recovers_the_line() {
    let ode = ConstantRhs {
        grid: vec![0.0, 10.0, 25.0],
        rate: 2.0,
    };
    let mut storage = vec![0.0; 3];
    let mut result = ScalarProfile::new(&mut storage).unwrap();

    solve_euler_corrector(&ode, Direction::Backward, 55.0, &mut result).unwrap();

    assert_eq!(storage, vec![5.0, 25.0, 55.0]);
}

#[test]
fn forward_and_backward_marches_agree_on_arbitrary_monotonic_grids() {
    let grid = vec![0.0, 1.0, 2.5, 4.75, 10.0, 11.0];
    let ode = ConstantRhs {
        grid: grid.clone(),
        rate: -3.0,
    };

    let mut forward = vec![0.0; grid.len()];
    let mut result = ScalarProfile::new(&mut forward).unwrap();
    solve_euler_corrector(&ode, Direction::Forward, 7.0, &mut result).unwrap();

    let terminal = forward[grid.len() - 1];
    let mut backward = vec![0.0; grid.len()];
    let mut result = ScalarProfile::new(&mut backward).unwrap();
    solve_euler_corrector(&ode, Direction::Backward, terminal, &mut result).unwrap();

    assert_profiles_close(&backward, &forward, 1e-12, "backward vs forward");
}

#[test]
fn mismatched_result_buffer_is_rejected_before_any_write() {
    let ode = ConstantRhs {
        grid: vec![0.0, 10.0, 25.0],
        rate: 2.0,
    };
    let mut storage = vec![-1.0; 2];
    let mut result = ScalarProfile::new(&mut storage).unwrap();

    let error = solve_euler_corrector(&ode, Direction::Forward, 5.0, &mut result).unwrap_err();
    assert_eq!(
        error,
        SolverError::SizeMismatch {
            result_len: 2,
            grid_len: 3
        }
    );
    assert_eq!(storage, vec![-1.0, -1.0], "no index may be written");
}

#[test]
fn coupled_system_marches_through_layer_storage() {
    // A solver-style setup: the state lives in a two-field layer, the
    // integrator sees it only through a profile view.
    let grid = uniform_grid(2001, 1.0);
    let ode = Rotation { grid: grid.clone() };

    let mut step = CompositeLayer::<Layer<2>>::new(grid.len()).unwrap();
    let mut result = step.vars.point_scalar_profile().unwrap();

    let initial = SVector::<f64, 2>::new(0.0, 1.0);
    solve_euler_corrector(&ode, Direction::Forward, initial, &mut result).unwrap();

    // second-order scheme on a 5e-4 step: comfortably inside 1e-6
    for (index, &x) in grid.iter().enumerate() {
        let sin_error = (step.vars.point_scalar[0][index] - x.sin()).abs();
        let cos_error = (step.vars.point_scalar[1][index] - x.cos()).abs();
        assert!(sin_error < 1e-6, "sin at {}: error {}", x, sin_error);
        assert!(cos_error < 1e-6, "cos at {}: error {}", x, cos_error);
    }
}

#[test]
fn marched_layer_feeds_the_next_step_through_interpolation() {
    // Time-step pattern: march into the current layer, then sample it at
    // fractionally advected positions to seed the next layer.
    let ode = ConstantRhs {
        grid: vec![0.0, 1.0, 2.0, 3.0],
        rate: 1.0,
    };

    let mut current = Layer::<1>::new(4).unwrap();
    let mut result = ScalarProfile::new(&mut current.point_scalar[0]).unwrap();
    solve_euler_corrector(&ode, Direction::Forward, 0.0, &mut result).unwrap();

    let mut next = Layer::<1>::new(4).unwrap();
    let profile = ScalarProfile::new(&mut current.point_scalar[0]).unwrap();
    for index in 1..4 {
        // advect by 0.4 of a cell against the march direction
        next.point_scalar[0][index] = profile.interpolate(index, -0.4).unwrap();
    }

    // the marched profile is the identity line, so sampling is exact
    assert_profiles_close(
        &next.point_scalar[0][1..],
        &[0.6, 1.6, 2.6],
        1e-12,
        "advected profile",
    );
}
