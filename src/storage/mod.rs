//! Layered field storage over a one-dimensional grid
//!
//! A simulation advances by producing one [`Layer`] of field values per time
//! step: point-indexed arrays of length `n` and cell-indexed arrays of
//! length `n - 1`, where `n` is the grid point count. Field counts and
//! vector widths are const generic parameters, so a layer's shape is fixed
//! per instantiation and checked at compile time — there is no runtime
//! registry of fields.
//!
//! [`CompositeLayer`] bundles the "variables" layer a solver exposes to the
//! outside with any solver-private auxiliary layers (friction factors,
//! characteristic speeds, ...), all forced to agree on one `point_count`.
//!
//! # Example
//!
//! ```rust
//! use pipeflow_rs::storage::{CompositeLayer, Layer};
//!
//! // Two point scalars (density, viscosity) plus one private layer with a
//! // single cell scalar (per-cell flow speed).
//! type Vars = Layer<2>;
//! type Speeds = Layer<0, 1>;
//!
//! let step = CompositeLayer::<Vars, (Speeds,)>::new(100).unwrap();
//! assert_eq!(step.vars.point_count(), 100);
//! assert_eq!(step.specific::<0>().cell_scalar[0].len(), 99);
//! ```

mod composite;
mod layer;

pub use composite::{CompositeLayer, SelectLayer};
pub use layer::{GridStorage, Layer};
