use super::env::StubEnvState;
use super::{f64_slice, fill_f64, install, interp_1d, state, state_mut, teardown};
use crate::diag;
use std::ffi::{c_int, c_void};

#[derive(Debug, Clone, Default)]
pub(crate) struct Profile {
    pub times: Vec<f64>,
    pub vals: Vec<f64>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StubScenario {
    pub temp: Profile,
    pub pressure: Profile,
    pub height: Profile,
    pub emissions: Profile,
    pub dilution: Profile,
}

pub unsafe extern "C" fn f_scenario_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_scenario_ctor");
    unsafe { install(ptr, StubScenario::default()) }
}

pub unsafe extern "C" fn f_scenario_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_scenario_dtor");
    unsafe { teardown::<StubScenario>(ptr) }
}

unsafe fn set_profile(
    field: &mut Profile,
    times: *const f64,
    vals: *const f64,
    n: *const c_int,
) {
    unsafe {
        field.times = f64_slice(times, n).to_vec();
        field.vals = f64_slice(vals, n).to_vec();
    }
}

pub unsafe extern "C" fn f_scenario_set_temp_profile(
    ptr: *mut c_void,
    times: *const f64,
    vals: *const f64,
    n: *const c_int,
) {
    diag::hit("f_scenario_set_temp_profile");
    unsafe { set_profile(&mut state_mut::<StubScenario>(ptr).temp, times, vals, n) }
}

pub unsafe extern "C" fn f_scenario_set_pressure_profile(
    ptr: *mut c_void,
    times: *const f64,
    vals: *const f64,
    n: *const c_int,
) {
    diag::hit("f_scenario_set_pressure_profile");
    unsafe { set_profile(&mut state_mut::<StubScenario>(ptr).pressure, times, vals, n) }
}

pub unsafe extern "C" fn f_scenario_set_height_profile(
    ptr: *mut c_void,
    times: *const f64,
    vals: *const f64,
    n: *const c_int,
) {
    diag::hit("f_scenario_set_height_profile");
    unsafe { set_profile(&mut state_mut::<StubScenario>(ptr).height, times, vals, n) }
}

pub unsafe extern "C" fn f_scenario_set_aero_emissions(
    ptr: *mut c_void,
    times: *const f64,
    rate_scales: *const f64,
    n: *const c_int,
) {
    diag::hit("f_scenario_set_aero_emissions");
    unsafe {
        set_profile(
            &mut state_mut::<StubScenario>(ptr).emissions,
            times,
            rate_scales,
            n,
        )
    }
}

pub unsafe extern "C" fn f_scenario_set_aero_dilution(
    ptr: *mut c_void,
    times: *const f64,
    rates: *const f64,
    n: *const c_int,
) {
    diag::hit("f_scenario_set_aero_dilution");
    unsafe { set_profile(&mut state_mut::<StubScenario>(ptr).dilution, times, rates, n) }
}

pub unsafe extern "C" fn f_scenario_emissions_n_times(ptr: *const c_void, n: *mut c_int) {
    diag::hit("f_scenario_emissions_n_times");
    unsafe { *n = state::<StubScenario>(ptr).emissions.times.len() as c_int }
}

pub unsafe extern "C" fn f_scenario_emissions_rate_scale(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_scenario_emissions_rate_scale");
    unsafe { fill_f64(arr, arr_size, &state::<StubScenario>(ptr).emissions.vals) }
}

pub unsafe extern "C" fn f_scenario_emissions_time(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_scenario_emissions_time");
    unsafe { fill_f64(arr, arr_size, &state::<StubScenario>(ptr).emissions.times) }
}

pub unsafe extern "C" fn f_scenario_dilution_n_times(ptr: *const c_void, n: *mut c_int) {
    diag::hit("f_scenario_dilution_n_times");
    unsafe { *n = state::<StubScenario>(ptr).dilution.times.len() as c_int }
}

pub unsafe extern "C" fn f_scenario_dilution_rate(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_scenario_dilution_rate");
    unsafe { fill_f64(arr, arr_size, &state::<StubScenario>(ptr).dilution.vals) }
}

pub unsafe extern "C" fn f_scenario_dilution_time(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_scenario_dilution_time");
    unsafe { fill_f64(arr, arr_size, &state::<StubScenario>(ptr).dilution.times) }
}

pub unsafe extern "C" fn f_scenario_init_env_state(
    ptr: *const c_void,
    env_state: *mut c_void,
    time: *const f64,
) {
    diag::hit("f_scenario_init_env_state");
    unsafe {
        let scenario = state::<StubScenario>(ptr);
        let env = state_mut::<StubEnvState>(env_state);
        let t = *time;
        env.temp = interp_1d(&scenario.temp.times, &scenario.temp.vals, t);
        env.pressure = interp_1d(&scenario.pressure.times, &scenario.pressure.vals, t);
        env.height = interp_1d(&scenario.height.times, &scenario.height.vals, t);
        env.elapsed_time = t;
    }
}
