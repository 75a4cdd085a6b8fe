//! Composite layers: variables plus solver-private auxiliaries
//!
//! A consuming solver usually carries more per-step state than the variables
//! it exposes: friction factors, characteristic speeds, reusable scratch
//! profiles. [`CompositeLayer`] packages exactly one variables layer with a
//! fixed heterogeneous tuple of such auxiliary layers, all allocated from
//! the same `point_count`. The auxiliary set is fixed per solver
//! configuration, not extensible at run time, so selection is by
//! compile-time position: an out-of-range index does not compile.

use crate::error::StorageError;
use crate::storage::GridStorage;

// =================================================================================================
// Layer Bundles
// =================================================================================================

// A tuple of grid-sized storages is itself grid-sized: allocating the bundle
// forwards one point_count to every member.

impl GridStorage for () {
    fn with_point_count(_point_count: usize) -> Result<Self, StorageError> {
        Ok(())
    }
}

macro_rules! bundle_grid_storage {
    ($($member:ident),+) => {
        impl<$($member: GridStorage),+> GridStorage for ($($member,)+) {
            fn with_point_count(point_count: usize) -> Result<Self, StorageError> {
                Ok(($($member::with_point_count(point_count)?,)+))
            }
        }
    };
}

bundle_grid_storage!(A);
bundle_grid_storage!(A, B);
bundle_grid_storage!(A, B, C);
bundle_grid_storage!(A, B, C, D);

/// Positional selection of one member layer out of a bundle.
///
/// Implemented for tuples of up to four auxiliary layers. Selecting an index
/// the tuple does not have is a missing trait impl, i.e. a compile error,
/// never a runtime one.
pub trait SelectLayer<const K: usize> {
    /// Type of the selected member layer.
    type Layer;

    /// Shared reference to the `K`-th member.
    fn select(&self) -> &Self::Layer;

    /// Exclusive reference to the `K`-th member.
    fn select_mut(&mut self) -> &mut Self::Layer;
}

macro_rules! bundle_select_layer {
    ($K:literal, $target:ident, ($($member:ident),+), $idx:tt) => {
        impl<$($member),+> SelectLayer<$K> for ($($member,)+) {
            type Layer = $target;

            fn select(&self) -> &$target {
                &self.$idx
            }

            fn select_mut(&mut self) -> &mut $target {
                &mut self.$idx
            }
        }
    };
}

bundle_select_layer!(0, A, (A), 0);
bundle_select_layer!(0, A, (A, B), 0);
bundle_select_layer!(1, B, (A, B), 1);
bundle_select_layer!(0, A, (A, B, C), 0);
bundle_select_layer!(1, B, (A, B, C), 1);
bundle_select_layer!(2, C, (A, B, C), 2);
bundle_select_layer!(0, A, (A, B, C, D), 0);
bundle_select_layer!(1, B, (A, B, C, D), 1);
bundle_select_layer!(2, C, (A, B, C, D), 2);
bundle_select_layer!(3, D, (A, B, C, D), 3);

// =================================================================================================
// Composite Layer
// =================================================================================================

/// One variables layer plus a fixed bundle of auxiliary layers, co-sized.
///
/// Construction forwards a single `point_count` to the variables layer and
/// to every auxiliary layer, which is what guarantees that all member
/// layers always agree on point and cell counts.
///
/// # Example
///
/// ```rust
/// use pipeflow_rs::storage::{CompositeLayer, Layer};
///
/// // Density and viscosity as the exposed variables; per-cell speeds and a
/// // pressure work profile as solver-private auxiliaries.
/// type Vars = Layer<2>;
/// type Speeds = Layer<0, 1>;
/// type Pressure = Layer<1>;
///
/// let mut step = CompositeLayer::<Vars, (Speeds, Pressure)>::new(1000).unwrap();
///
/// step.vars.point_scalar[0][0] = 850.0;
/// step.specific_mut::<0>().cell_scalar[0][0] = 1.2;
/// assert_eq!(step.specific::<1>().point_count(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLayer<V, S = ()> {
    /// The variables layer a consuming solver exposes.
    pub vars: V,
    specific: S,
}

impl<V: GridStorage, S: GridStorage> CompositeLayer<V, S> {
    /// Allocate the variables layer and every auxiliary layer for
    /// `point_count` grid points.
    ///
    /// # Errors
    ///
    /// [`StorageError::TooFewPoints`] when any member layer cannot be built
    /// from `point_count`; nothing is kept in that case.
    pub fn new(point_count: usize) -> Result<Self, StorageError> {
        Ok(Self {
            vars: V::with_point_count(point_count)?,
            specific: S::with_point_count(point_count)?,
        })
    }
}

impl<V, S> CompositeLayer<V, S> {
    /// The `K`-th auxiliary layer, selected by compile-time position.
    pub fn specific<const K: usize>(&self) -> &<S as SelectLayer<K>>::Layer
    where
        S: SelectLayer<K>,
    {
        self.specific.select()
    }

    /// Exclusive access to the `K`-th auxiliary layer.
    pub fn specific_mut<const K: usize>(&mut self) -> &mut <S as SelectLayer<K>>::Layer
    where
        S: SelectLayer<K>,
    {
        self.specific.select_mut()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Layer;

    type Vars = Layer<2, 1>;
    type Aux0 = Layer<1>;
    type Aux1 = Layer<0, 2>;

    #[test]
    fn all_member_layers_share_point_count() {
        for point_count in [2, 100] {
            let step = CompositeLayer::<Vars, (Aux0, Aux1)>::new(point_count).unwrap();

            assert_eq!(step.vars.point_count(), point_count);
            assert_eq!(step.vars.cell_scalar[0].len(), point_count - 1);
            assert_eq!(step.specific::<0>().point_scalar[0].len(), point_count);
            assert_eq!(step.specific::<1>().cell_scalar[1].len(), point_count - 1);
        }
    }

    #[test]
    fn single_point_composite_without_cell_fields() {
        let step = CompositeLayer::<Layer<1>, (Aux0,)>::new(1).unwrap();
        assert_eq!(step.vars.point_count(), 1);
        assert_eq!(step.specific::<0>().point_count(), 1);
    }

    #[test]
    fn member_failure_propagates() {
        // Aux1 carries cell fields, so a 1-point composite must fail even
        // though the variables layer alone would accept it.
        let result = CompositeLayer::<Layer<1>, (Aux1,)>::new(1);
        assert!(result.is_err());
    }

    #[test]
    fn specific_mut_writes_into_the_selected_layer() {
        let mut step = CompositeLayer::<Vars, (Aux0, Aux1)>::new(4).unwrap();

        step.specific_mut::<0>().point_scalar[0][2] = 6e6;
        step.specific_mut::<1>().cell_scalar[0][1] = 0.62;

        assert_eq!(step.specific::<0>().point_scalar[0][2], 6e6);
        assert_eq!(step.specific::<1>().cell_scalar[0][1], 0.62);
    }

    #[test]
    fn composite_without_auxiliaries() {
        let step = CompositeLayer::<Vars>::new(10).unwrap();
        assert_eq!(step.vars.point_count(), 10);
    }
}
