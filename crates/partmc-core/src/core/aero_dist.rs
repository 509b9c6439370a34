//! Full aerosol size distribution: an ordered list of modes.

use crate::boundary::{check_index, get_f64, get_i32, to_foreign_index};
use crate::core::aero_data::AeroData;
use crate::core::aero_mode::AeroMode;
use crate::errors::{PartMcError, PartMcResult};
use crate::handle::ForeignHandle;
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;

/// An aerosol distribution built mode by mode.
#[derive(Debug)]
pub struct AeroDist {
    handle: ForeignHandle,
}

impl AeroDist {
    /// Builds a distribution from a JSON list of mode documents, each a
    /// `{name: {params}}` mapping. Modes are constructed and appended in
    /// list order; the first bad document aborts the whole construction.
    pub fn from_json(aero_data: &mut AeroData, value: &Value) -> PartMcResult<Self> {
        let list = value.as_array().ok_or_else(|| {
            PartMcError::Schema("aerosol distribution must be a list of mode documents".into())
        })?;

        let mut handle = ForeignHandle::acquire(sys::f_aero_dist_ctor, sys::f_aero_dist_dtor)?;
        for mode_doc in list {
            let mode = AeroMode::from_json(aero_data, mode_doc)?;
            unsafe { sys::f_aero_dist_append_mode(handle.borrow_mut(), mode.as_ptr()) };
        }
        Ok(AeroDist { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    /// Number of modes.
    pub fn n_mode(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_dist_n_mode(self.handle.borrow(), p) }) as usize
    }

    /// Total number concentration summed over all modes.
    pub fn total_num_conc(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_dist_total_num_conc(self.handle.borrow(), p) })
    }

    /// Deep copy of the mode at host index `i`.
    pub fn mode(&self, i: usize) -> PartMcResult<AeroMode> {
        check_index(i, self.n_mode())?;
        let mut handle = ForeignHandle::acquire(sys::f_aero_mode_ctor, sys::f_aero_mode_dtor)?;
        let f_idx = to_foreign_index(i);
        unsafe { sys::f_aero_dist_mode(self.handle.borrow(), &f_idx, handle.borrow_mut()) };
        Ok(AeroMode::from_handle(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aero_mode::ModeType;
    use serde_json::json;

    fn aero_data() -> AeroData {
        AeroData::from_json(&json!([
            {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
            {"BC": [1800.0, 0.0, 12e-3, 0.0]},
        ]))
        .unwrap()
    }

    fn two_mode_doc() -> Value {
        json!([
            {"fine": {
                "mass_frac": [{"SO4": [1.0]}],
                "mode_type": "log_normal",
                "num_conc": 3e9,
                "geom_mean_diam": 2e-8,
                "log10_geom_std_dev": 0.25,
            }},
            {"coarse": {
                "mass_frac": [{"BC": [1.0]}],
                "mode_type": "mono",
                "num_conc": 1e9,
                "diam_at_mean_vol": 1e-6,
            }},
        ])
    }

    #[test]
    fn modes_append_in_order() {
        let mut data = aero_data();
        let dist = AeroDist::from_json(&mut data, &two_mode_doc()).unwrap();
        assert_eq!(dist.n_mode(), 2);
        assert_eq!(dist.total_num_conc(), 4e9);
        let coarse = dist.mode(1).unwrap();
        assert_eq!(coarse.name().unwrap(), "coarse");
        assert_eq!(coarse.typ().unwrap(), ModeType::Mono);
    }

    #[test]
    fn mode_index_is_bounds_checked() {
        let mut data = aero_data();
        let dist = AeroDist::from_json(&mut data, &two_mode_doc()).unwrap();
        assert!(matches!(
            dist.mode(2),
            Err(PartMcError::OutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn bad_mode_document_aborts_construction() {
        let mut data = aero_data();
        let doc = json!([
            {"fine": {
                "mass_frac": [{"SO4": [1.0]}],
                "mode_type": "nope",
            }},
        ]);
        assert!(AeroDist::from_json(&mut data, &doc).is_err());
    }
}
