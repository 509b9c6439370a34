use super::aero_data::StubAeroData;
use super::aero_dist::StubAeroDist;
use super::grid::StubBinGrid;
use super::{fill_f64, install, state, state_mut, teardown};
use crate::diag;
use std::ffi::{c_int, c_void};

#[derive(Debug, Clone)]
pub(crate) struct StubAeroBinned {
    pub num_conc: Vec<f64>,
    // n_bin * n_spec, bin-major
    pub vol_conc: Vec<f64>,
    pub n_spec: usize,
}

pub unsafe extern "C" fn f_aero_binned_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_binned_ctor");
    unsafe {
        install(
            ptr,
            StubAeroBinned {
                num_conc: Vec::new(),
                vol_conc: Vec::new(),
                n_spec: 0,
            },
        )
    }
}

pub unsafe extern "C" fn f_aero_binned_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_binned_dtor");
    unsafe { teardown::<StubAeroBinned>(ptr) }
}

pub unsafe extern "C" fn f_aero_binned_init(
    ptr: *mut c_void,
    aero_data: *const c_void,
    bin_grid: *const c_void,
) {
    diag::hit("f_aero_binned_init");
    unsafe {
        let n_spec = state::<StubAeroData>(aero_data).species.len();
        let n_bin = state::<StubBinGrid>(bin_grid).centers().len();
        let binned = state_mut::<StubAeroBinned>(ptr);
        binned.n_spec = n_spec;
        binned.num_conc = vec![0.0; n_bin];
        binned.vol_conc = vec![0.0; n_bin * n_spec];
    }
}

pub unsafe extern "C" fn f_aero_binned_n_bin(ptr: *const c_void, n_bin: *mut c_int) {
    diag::hit("f_aero_binned_n_bin");
    unsafe { *n_bin = state::<StubAeroBinned>(ptr).num_conc.len() as c_int }
}

pub unsafe extern "C" fn f_aero_binned_num_conc(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_binned_num_conc");
    unsafe { fill_f64(arr, arr_size, &state::<StubAeroBinned>(ptr).num_conc) }
}

pub unsafe extern "C" fn f_aero_binned_vol_conc(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_binned_vol_conc");
    unsafe { fill_f64(arr, arr_size, &state::<StubAeroBinned>(ptr).vol_conc) }
}

pub unsafe extern "C" fn f_aero_binned_add_aero_dist(
    ptr: *mut c_void,
    bin_grid: *const c_void,
    _aero_data: *const c_void,
    dist: *const c_void,
) {
    diag::hit("f_aero_binned_add_aero_dist");
    unsafe {
        // Same flat placeholder as the mode distribution: spread each mode's
        // total evenly over the bins, composition per vol_frac.
        let n_bin = state::<StubBinGrid>(bin_grid).centers().len();
        let dist = state::<StubAeroDist>(dist);
        let binned = state_mut::<StubAeroBinned>(ptr);
        if binned.num_conc.len() != n_bin {
            return;
        }
        for mode in &dist.modes {
            let per_bin = mode.total_num_conc() / n_bin.max(1) as f64;
            let vol = super::sphere_vol(mode.char_radius);
            for i in 0..n_bin {
                binned.num_conc[i] += per_bin;
                for (s, frac) in mode.vol_frac.iter().enumerate() {
                    if s < binned.n_spec {
                        binned.vol_conc[i * binned.n_spec + s] += per_bin * vol * frac;
                    }
                }
            }
        }
    }
}
