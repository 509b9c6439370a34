use super::aero_data::StubAeroData;
use super::grid::StubBinGrid;
use super::{f64_slice, fill_f64, fill_str, install, state, state_mut, string_arg, teardown};
use crate::diag;
use std::ffi::{c_char, c_int, c_void};

// Mode type codes match the binding's name table: 1 log_normal, 2 exp,
// 3 mono, 4 sampled.
#[derive(Debug, Clone)]
pub(crate) struct StubAeroMode {
    pub name: String,
    pub mode_type: i32,
    pub num_conc: f64,
    pub char_radius: f64,
    pub gsd: f64,
    pub vol_frac: Vec<f64>,
    pub vol_frac_std: Vec<f64>,
    pub sample_radius: Vec<f64>,
    pub sample_num_conc: Vec<f64>,
}

impl StubAeroMode {
    pub fn empty() -> Self {
        StubAeroMode {
            name: String::new(),
            mode_type: 0,
            num_conc: 0.0,
            char_radius: 0.0,
            gsd: 0.0,
            vol_frac: Vec::new(),
            vol_frac_std: Vec::new(),
            sample_radius: Vec::new(),
            sample_num_conc: Vec::new(),
        }
    }

    pub fn total_num_conc(&self) -> f64 {
        if self.mode_type == 4 {
            self.sample_num_conc.iter().sum()
        } else {
            self.num_conc
        }
    }
}

pub unsafe extern "C" fn f_aero_mode_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_mode_ctor");
    unsafe { install(ptr, StubAeroMode::empty()) }
}

pub unsafe extern "C" fn f_aero_mode_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_mode_dtor");
    unsafe { teardown::<StubAeroMode>(ptr) }
}

pub unsafe extern "C" fn f_aero_mode_init(ptr: *mut c_void, aero_data: *const c_void) {
    diag::hit("f_aero_mode_init");
    unsafe {
        let n = state::<StubAeroData>(aero_data).species.len();
        let mode = state_mut::<StubAeroMode>(ptr);
        mode.vol_frac = vec![0.0; n];
        mode.vol_frac_std = vec![0.0; n];
    }
}

pub unsafe extern "C" fn f_aero_mode_get_n_spec(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_aero_mode_get_n_spec");
    unsafe { *len = state::<StubAeroMode>(ptr).vol_frac.len() as c_int }
}

pub unsafe extern "C" fn f_aero_mode_get_num_conc(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_mode_get_num_conc");
    unsafe { *val = state::<StubAeroMode>(ptr).num_conc }
}

pub unsafe extern "C" fn f_aero_mode_set_num_conc(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_aero_mode_set_num_conc");
    unsafe { state_mut::<StubAeroMode>(ptr).num_conc = *val }
}

pub unsafe extern "C" fn f_aero_mode_get_vol_frac(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_mode_get_vol_frac");
    unsafe { fill_f64(arr, arr_size, &state::<StubAeroMode>(ptr).vol_frac) }
}

pub unsafe extern "C" fn f_aero_mode_set_vol_frac(
    ptr: *mut c_void,
    arr: *const f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_mode_set_vol_frac");
    unsafe { state_mut::<StubAeroMode>(ptr).vol_frac = f64_slice(arr, arr_size).to_vec() }
}

pub unsafe extern "C" fn f_aero_mode_get_vol_frac_std(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_mode_get_vol_frac_std");
    unsafe { fill_f64(arr, arr_size, &state::<StubAeroMode>(ptr).vol_frac_std) }
}

pub unsafe extern "C" fn f_aero_mode_set_vol_frac_std(
    ptr: *mut c_void,
    arr: *const f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_mode_set_vol_frac_std");
    unsafe { state_mut::<StubAeroMode>(ptr).vol_frac_std = f64_slice(arr, arr_size).to_vec() }
}

pub unsafe extern "C" fn f_aero_mode_get_char_radius(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_mode_get_char_radius");
    unsafe { *val = state::<StubAeroMode>(ptr).char_radius }
}

pub unsafe extern "C" fn f_aero_mode_set_char_radius(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_aero_mode_set_char_radius");
    unsafe { state_mut::<StubAeroMode>(ptr).char_radius = *val }
}

pub unsafe extern "C" fn f_aero_mode_get_gsd(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_mode_get_gsd");
    unsafe { *val = state::<StubAeroMode>(ptr).gsd }
}

pub unsafe extern "C" fn f_aero_mode_set_gsd(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_aero_mode_set_gsd");
    unsafe { state_mut::<StubAeroMode>(ptr).gsd = *val }
}

pub unsafe extern "C" fn f_aero_mode_get_type(ptr: *const c_void, val: *mut c_int) {
    diag::hit("f_aero_mode_get_type");
    unsafe { *val = state::<StubAeroMode>(ptr).mode_type }
}

pub unsafe extern "C" fn f_aero_mode_set_type(ptr: *mut c_void, val: *const c_int) {
    diag::hit("f_aero_mode_set_type");
    unsafe { state_mut::<StubAeroMode>(ptr).mode_type = *val }
}

pub unsafe extern "C" fn f_aero_mode_get_name_size(ptr: *const c_void, size: *mut c_int) {
    diag::hit("f_aero_mode_get_name_size");
    unsafe { *size = state::<StubAeroMode>(ptr).name.len() as c_int }
}

pub unsafe extern "C" fn f_aero_mode_get_name(
    ptr: *const c_void,
    name: *mut c_char,
    name_size: *const c_int,
) {
    diag::hit("f_aero_mode_get_name");
    unsafe { fill_str(name, name_size, &state::<StubAeroMode>(ptr).name) }
}

pub unsafe extern "C" fn f_aero_mode_set_name(
    ptr: *mut c_void,
    name: *const c_char,
    name_size: *const c_int,
) {
    diag::hit("f_aero_mode_set_name");
    unsafe { state_mut::<StubAeroMode>(ptr).name = string_arg(name, name_size) }
}

pub unsafe extern "C" fn f_aero_mode_set_sampled(
    ptr: *mut c_void,
    diam: *const f64,
    num_conc: *const f64,
    n_diam: *const c_int,
) {
    diag::hit("f_aero_mode_set_sampled");
    unsafe {
        let n = *n_diam as usize;
        let mode = state_mut::<StubAeroMode>(ptr);
        mode.mode_type = 4;
        mode.sample_radius = std::slice::from_raw_parts(diam, n)
            .iter()
            .map(|d| d / 2.0)
            .collect();
        mode.sample_num_conc = std::slice::from_raw_parts(num_conc, n - 1).to_vec();
    }
}

pub unsafe extern "C" fn f_aero_mode_get_sample_n_bin(ptr: *const c_void, n_bin: *mut c_int) {
    diag::hit("f_aero_mode_get_sample_n_bin");
    unsafe { *n_bin = state::<StubAeroMode>(ptr).sample_num_conc.len() as c_int }
}

pub unsafe extern "C" fn f_aero_mode_get_sample_radius(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_mode_get_sample_radius");
    unsafe { fill_f64(arr, arr_size, &state::<StubAeroMode>(ptr).sample_radius) }
}

pub unsafe extern "C" fn f_aero_mode_get_sample_num_conc(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_mode_get_sample_num_conc");
    unsafe { fill_f64(arr, arr_size, &state::<StubAeroMode>(ptr).sample_num_conc) }
}

pub unsafe extern "C" fn f_aero_mode_num_dist(
    ptr: *const c_void,
    bin_grid: *const c_void,
    _aero_data: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_mode_num_dist");
    unsafe {
        // Flat placeholder distribution: total number concentration spread
        // evenly over the grid.
        let n_bin = state::<StubBinGrid>(bin_grid).centers().len();
        let mode = state::<StubAeroMode>(ptr);
        let per_bin = if n_bin == 0 {
            0.0
        } else {
            mode.total_num_conc() / n_bin as f64
        };
        fill_f64(arr, arr_size, &vec![per_bin; n_bin]);
    }
}
