//! Common utilities for integration tests

pub mod mock_odes;

// Re-export commonly used items
pub use mock_odes::{uniform_grid, ConstantRhs, ExponentialDecay, Rotation};

/// Assert that two slices agree element-wise within `tolerance`.
pub fn assert_profiles_close(actual: &[f64], expected: &[f64], tolerance: f64, message: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: length mismatch",
        message
    );
    for (index, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: element {} differs by {} (tolerance {})",
            message,
            index,
            diff,
            tolerance
        );
    }
}
