//! Diameter bin grid.

use crate::boundary::{get_i32, read_f64_array};
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use crate::variant::VariantSet;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use partmc_sys as sys;
use std::ffi::c_void;

/// Bin spacing of a [`BinGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum GridSpacing {
    Log = 1,
    Linear = 2,
}

impl VariantSet for GridSpacing {
    const NAMES: &'static [&'static str] = &["log", "linear"];
}

/// A fixed grid of diameter bins, log- or linearly-spaced.
#[derive(Debug)]
pub struct BinGrid {
    handle: ForeignHandle,
}

impl BinGrid {
    /// Builds a grid of `n_bins` bins between `min` and `max`, with the
    /// spacing selected by name (`"log"` or `"linear"`).
    pub fn new(n_bins: usize, spacing: &str, min: f64, max: f64) -> PartMcResult<Self> {
        let spacing = GridSpacing::from_name(spacing)?;
        let mut handle = ForeignHandle::acquire(sys::f_bin_grid_ctor, sys::f_bin_grid_dtor)?;
        let n = n_bins as i32;
        let kind = spacing.code();
        unsafe { sys::f_bin_grid_init(handle.borrow_mut(), &n, &kind, &min, &max) };
        Ok(BinGrid { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        get_i32(|p| unsafe { sys::f_bin_grid_size(self.handle.borrow(), p) }) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bin edges; one more than the bin count.
    pub fn edges(&self) -> Vec<f64> {
        read_f64_array(
            || self.len() + 1,
            |buf, n| unsafe { sys::f_bin_grid_edges(self.handle.borrow(), buf, n) },
        )
    }

    pub fn centers(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_bin_grid_centers(self.handle.borrow(), buf, n) },
        )
    }

    pub fn widths(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_bin_grid_widths(self.handle.borrow(), buf, n) },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PartMcError;

    #[test]
    fn log_grid_shapes() {
        let grid = BinGrid::new(100, "log", 1e-9, 1e-6).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.edges().len(), 101);
        assert_eq!(grid.centers().len(), 100);
        assert_eq!(grid.widths().len(), 100);
        // log spacing has constant log-width
        let widths = grid.widths();
        assert!((widths[0] - widths[99]).abs() < 1e-12);
    }

    #[test]
    fn linear_grid_edges_are_even() {
        let grid = BinGrid::new(4, "linear", 0.0, 1.0).unwrap();
        let edges = grid.edges();
        assert_eq!(edges, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(grid.centers(), vec![0.125, 0.375, 0.625, 0.875]);
    }

    #[test]
    fn unknown_spacing_name_rejected() {
        assert!(matches!(
            BinGrid::new(4, "cubic", 0.0, 1.0),
            Err(PartMcError::UnknownVariantName(_))
        ));
    }

    #[test]
    fn spacing_name_round_trip() {
        for name in GridSpacing::NAMES {
            assert_eq!(GridSpacing::from_name(name).unwrap().name(), *name);
        }
    }
}
