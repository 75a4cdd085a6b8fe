//! Grid-marching ODE solvers
//!
//! This module turns a grid plus a right-hand side into a filled state
//! profile. A consuming hydraulic solver supplies the problem as an
//! [`OdeSystem`] (the grid and the derivative function), picks a march
//! [`Direction`], and hands in a mutable result buffer shaped like a
//! profile; the marching scheme writes one state per grid point.
//!
//! ```text
//!   ┌────────────┐     ┌───────────────────┐     ┌───────────────┐
//!   │ OdeSystem  │ ──▶ │ solve_euler /     │ ──▶ │ StateProfile  │
//!   │ grid + rhs │     │ solve_euler_      │     │ result buffer │
//!   └────────────┘     │ corrector         │     └───────────────┘
//!                      └───────────────────┘
//! ```
//!
//! The seam is deliberately small: the schemes know nothing about layers,
//! pipes, or time series — only the three traits in [`traits`].

pub mod methods;
pub mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::{solve_euler, solve_euler_corrector};
pub use traits::{Direction, OdeState, OdeSystem, StateProfile};
