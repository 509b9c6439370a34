//! Binned (sectional) aerosol representation.

use crate::boundary::{get_i32, read_f64_array};
use crate::core::aero_data::AeroData;
use crate::core::aero_dist::AeroDist;
use crate::core::bin_grid::BinGrid;
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use partmc_sys as sys;
use std::ffi::c_void;

/// Per-bin number and per-species volume concentrations over a [`BinGrid`].
///
/// Borrows the [`AeroData`] it was initialized against; the species
/// dimension shapes the volume concentration matrix.
#[derive(Debug)]
pub struct AeroBinned<'a> {
    handle: ForeignHandle,
    aero_data: &'a AeroData,
}

impl<'a> AeroBinned<'a> {
    /// An all-zero binned state shaped by `bin_grid` and the species table.
    pub fn new(aero_data: &'a AeroData, bin_grid: &BinGrid) -> PartMcResult<Self> {
        let mut handle = ForeignHandle::acquire(sys::f_aero_binned_ctor, sys::f_aero_binned_dtor)?;
        unsafe {
            sys::f_aero_binned_init(handle.borrow_mut(), aero_data.as_ptr(), bin_grid.as_ptr())
        };
        Ok(AeroBinned { handle, aero_data })
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_void {
        self.handle.borrow_mut()
    }

    /// Number of bins.
    pub fn n_bin(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_binned_n_bin(self.handle.borrow(), p) }) as usize
    }

    /// Per-bin number concentration.
    pub fn num_conc(&self) -> Vec<f64> {
        read_f64_array(
            || self.n_bin(),
            |buf, n| unsafe { sys::f_aero_binned_num_conc(self.handle.borrow(), buf, n) },
        )
    }

    /// Per-bin, per-species volume concentration; the flat engine buffer is
    /// reshaped into one row per bin.
    pub fn vol_conc(&self) -> Vec<Vec<f64>> {
        let n_spec = self.aero_data.len();
        let flat = read_f64_array(
            || self.n_bin() * n_spec,
            |buf, n| unsafe { sys::f_aero_binned_vol_conc(self.handle.borrow(), buf, n) },
        );
        flat.chunks(n_spec.max(1)).map(<[f64]>::to_vec).collect()
    }

    /// Accumulates a distribution into the binned state.
    pub fn add_aero_dist(&mut self, bin_grid: &BinGrid, dist: &AeroDist) {
        unsafe {
            sys::f_aero_binned_add_aero_dist(
                self.handle.borrow_mut(),
                bin_grid.as_ptr(),
                self.aero_data.as_ptr(),
                dist.as_ptr(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_follow_grid_and_species() {
        let mut data = AeroData::from_json(&json!([
            {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
            {"BC": [1800.0, 0.0, 12e-3, 0.0]},
        ]))
        .unwrap();
        let grid = BinGrid::new(10, "log", 1e-9, 1e-6).unwrap();
        let dist = AeroDist::from_json(
            &mut data,
            &json!([{"m": {
                "mass_frac": [{"SO4": [1.0]}],
                "mode_type": "mono",
                "num_conc": 1e9,
                "diam_at_mean_vol": 1e-7,
            }}]),
        )
        .unwrap();
        let mut binned = AeroBinned::new(&data, &grid).unwrap();
        assert_eq!(binned.n_bin(), 10);
        assert_eq!(binned.num_conc(), vec![0.0; 10]);
        let vc = binned.vol_conc();
        assert_eq!(vc.len(), 10);
        assert_eq!(vc[0].len(), 2);

        binned.add_aero_dist(&grid, &dist);
        assert!(binned.num_conc().iter().sum::<f64>() > 0.0);
    }
}
