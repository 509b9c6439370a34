use super::env::StubEnvState;
use super::misc::{StubRunExactOpt, StubRunPartOpt, StubRunSectOpt};
use super::{state, state_mut};
use crate::diag;
use std::ffi::{c_int, c_void};

// The solver drivers are opaque long-running calls in the real engine. The
// stub only advances the environment clock so callers can observe that a run
// happened.

pub unsafe extern "C" fn f_run_part(
    _scenario: *const c_void,
    env_state: *mut c_void,
    _aero_data: *const c_void,
    _aero_state: *mut c_void,
    _gas_data: *const c_void,
    _gas_state: *mut c_void,
    opt: *const c_void,
) {
    diag::hit("f_run_part");
    unsafe {
        let t_max = state::<StubRunPartOpt>(opt).t_max;
        state_mut::<StubEnvState>(env_state).elapsed_time += t_max;
    }
}

pub unsafe extern "C" fn f_run_part_timestep(
    _scenario: *const c_void,
    env_state: *mut c_void,
    _aero_data: *const c_void,
    _aero_state: *mut c_void,
    _gas_data: *const c_void,
    _gas_state: *mut c_void,
    opt: *const c_void,
    i_time: *const c_int,
    t_start: *const f64,
    last_output_time: *mut f64,
    last_progress_print_time: *mut f64,
    i_output: *mut c_int,
) {
    diag::hit("f_run_part_timestep");
    unsafe {
        let del_t = state::<StubRunPartOpt>(opt).del_t;
        let t = *t_start + *i_time as f64 * del_t;
        state_mut::<StubEnvState>(env_state).elapsed_time = t;
        *last_output_time = t;
        *last_progress_print_time = t;
        *i_output += 1;
    }
}

pub unsafe extern "C" fn f_run_part_timeblock(
    _scenario: *const c_void,
    env_state: *mut c_void,
    _aero_data: *const c_void,
    _aero_state: *mut c_void,
    _gas_data: *const c_void,
    _gas_state: *mut c_void,
    opt: *const c_void,
    _i_time: *const c_int,
    i_time_end: *const c_int,
    t_start: *const f64,
    last_output_time: *mut f64,
    last_progress_print_time: *mut f64,
    i_output: *mut c_int,
) {
    diag::hit("f_run_part_timeblock");
    unsafe {
        let del_t = state::<StubRunPartOpt>(opt).del_t;
        let t = *t_start + *i_time_end as f64 * del_t;
        state_mut::<StubEnvState>(env_state).elapsed_time = t;
        *last_output_time = t;
        *last_progress_print_time = t;
        *i_output += 1;
    }
}

pub unsafe extern "C" fn f_run_sect(
    _bin_grid: *const c_void,
    _gas_data: *const c_void,
    _aero_data: *const c_void,
    _aero_binned: *mut c_void,
    env_state: *mut c_void,
    _gas_state: *mut c_void,
    _scenario: *const c_void,
    opt: *const c_void,
) {
    diag::hit("f_run_sect");
    unsafe {
        let t_max = state::<StubRunSectOpt>(opt).t_max;
        state_mut::<StubEnvState>(env_state).elapsed_time += t_max;
    }
}

pub unsafe extern "C" fn f_run_exact(
    _bin_grid: *const c_void,
    _gas_data: *const c_void,
    _aero_data: *const c_void,
    _aero_binned: *mut c_void,
    env_state: *mut c_void,
    _gas_state: *const c_void,
    _scenario: *const c_void,
    opt: *const c_void,
) {
    diag::hit("f_run_exact");
    unsafe {
        let t_max = state::<StubRunExactOpt>(opt).t_max;
        state_mut::<StubEnvState>(env_state).elapsed_time += t_max;
    }
}
