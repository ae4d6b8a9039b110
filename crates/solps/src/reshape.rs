//! Axis reordering between storage and grid layouts
//!
//! Balance files store vector and per-species quantities with the component
//! axis first, as `(component, radial, poloidal)`. Everything in this library
//! works in grid order, `(radial, poloidal, component)`, so that the last axis
//! indexes corners or species for a given cell.
//!
//! The reorder is always two axis swaps, first axes 0 and 2 and then axes 0
//! and 1. A single transpose is not equivalent.

// crate modules
use crate::error::Result;
use crate::fields::RawFieldSet;

// external crates
use log::trace;
use ndarray::{Array3, ArrayView3, Ix3};

/// Reorder a `(component, radial, poloidal)` array into grid order
///
/// The result is an owned, standard-layout copy. The input is never modified.
///
/// ```rust
/// # use edgetools_solps::storage_to_grid;
/// # use ndarray::Array3;
/// let storage = Array3::from_shape_fn((4, 2, 3), |(c, r, p)| 100 * c + 10 * r + p);
/// let grid = storage_to_grid(storage.view());
///
/// assert_eq!(grid.dim(), (2, 3, 4));
/// assert_eq!(grid[[1, 2, 3]], storage[[3, 1, 2]]);
/// ```
pub fn storage_to_grid<T: Clone>(array: ArrayView3<'_, T>) -> Array3<T> {
    let mut view = array;
    view.swap_axes(0, 2);
    view.swap_axes(0, 1);
    view.as_standard_layout().into_owned()
}

/// Reorder a grid-order array back into `(component, radial, poloidal)`
///
/// Exact inverse of [storage_to_grid()].
pub fn grid_to_storage<T: Clone>(array: ArrayView3<'_, T>) -> Array3<T> {
    let mut view = array;
    view.swap_axes(0, 1);
    view.swap_axes(0, 2);
    view.as_standard_layout().into_owned()
}

/// Fetch a 3D numeric field and reorder it into grid order
pub(crate) fn grid_field(fields: &RawFieldSet, name: &str) -> Result<Array3<f64>> {
    let storage = fields.view::<Ix3>(name)?;
    trace!("Reordering {name} {:?}", storage.shape());
    Ok(storage_to_grid(storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> Array3<usize> {
        Array3::from_shape_fn((4, 2, 3), |(c, r, p)| 100 * c + 10 * r + p)
    }

    #[test]
    fn every_element_moves() {
        let storage = storage();
        let grid = storage_to_grid(storage.view());
        for ((r, p, c), value) in grid.indexed_iter() {
            assert_eq!(*value, storage[[c, r, p]]);
        }
    }

    #[test]
    fn inverse_restores_storage() {
        let storage = storage();
        let grid = storage_to_grid(storage.view());
        assert_eq!(grid_to_storage(grid.view()), storage);
    }

    #[test]
    fn differs_from_transpose() {
        let storage = storage();
        let grid = storage_to_grid(storage.view());
        let transposed = storage.t();
        assert_ne!(grid.shape(), transposed.shape());
    }

    #[test]
    fn standard_layout_output() {
        let grid = storage_to_grid(storage().view());
        assert!(grid.is_standard_layout());
        assert_eq!(grid.as_slice().unwrap()[..4], [0, 100, 200, 300]);
    }
}
