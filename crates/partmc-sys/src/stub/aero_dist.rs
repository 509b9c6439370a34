use super::aero_mode::StubAeroMode;
use super::{install, state, state_mut, teardown};
use crate::diag;
use std::ffi::{c_int, c_void};

#[derive(Debug, Clone)]
pub(crate) struct StubAeroDist {
    pub modes: Vec<StubAeroMode>,
}

pub unsafe extern "C" fn f_aero_dist_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_dist_ctor");
    unsafe { install(ptr, StubAeroDist { modes: Vec::new() }) }
}

pub unsafe extern "C" fn f_aero_dist_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_dist_dtor");
    unsafe { teardown::<StubAeroDist>(ptr) }
}

pub unsafe extern "C" fn f_aero_dist_append_mode(ptr: *mut c_void, mode: *const c_void) {
    diag::hit("f_aero_dist_append_mode");
    unsafe {
        let mode = state::<StubAeroMode>(mode).clone();
        state_mut::<StubAeroDist>(ptr).modes.push(mode);
    }
}

pub unsafe extern "C" fn f_aero_dist_n_mode(ptr: *const c_void, n_mode: *mut c_int) {
    diag::hit("f_aero_dist_n_mode");
    unsafe { *n_mode = state::<StubAeroDist>(ptr).modes.len() as c_int }
}

pub unsafe extern "C" fn f_aero_dist_total_num_conc(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_dist_total_num_conc");
    unsafe {
        *val = state::<StubAeroDist>(ptr)
            .modes
            .iter()
            .map(|m| m.total_num_conc())
            .sum()
    }
}

pub unsafe extern "C" fn f_aero_dist_mode(ptr: *const c_void, idx: *const c_int, mode: *mut c_void) {
    diag::hit("f_aero_dist_mode");
    unsafe {
        let src = &state::<StubAeroDist>(ptr).modes[(*idx - 1) as usize];
        *state_mut::<StubAeroMode>(mode) = src.clone();
    }
}
