use super::{install, state, state_mut, teardown};
use crate::diag;
use std::ffi::{c_int, c_void};

#[derive(Debug, Clone)]
pub(crate) struct StubEnvState {
    pub temp: f64,
    pub rel_humidity: f64,
    pub pressure: f64,
    pub height: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub start_time: f64,
    pub start_day: i32,
    pub elapsed_time: f64,
    pub additive_kernel_coefficient: f64,
}

pub unsafe extern "C" fn f_env_state_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_env_state_ctor");
    unsafe {
        install(
            ptr,
            StubEnvState {
                temp: 0.0,
                rel_humidity: 0.0,
                pressure: 0.0,
                height: 0.0,
                latitude: 0.0,
                longitude: 0.0,
                altitude: 0.0,
                start_time: 0.0,
                start_day: 0,
                elapsed_time: 0.0,
                additive_kernel_coefficient: 1.0,
            },
        )
    }
}

pub unsafe extern "C" fn f_env_state_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_env_state_dtor");
    unsafe { teardown::<StubEnvState>(ptr) }
}

pub unsafe extern "C" fn f_env_state_init(
    ptr: *mut c_void,
    rel_humidity: *const f64,
    latitude: *const f64,
    longitude: *const f64,
    altitude: *const f64,
    start_time: *const f64,
    start_day: *const c_int,
) {
    diag::hit("f_env_state_init");
    unsafe {
        let env = state_mut::<StubEnvState>(ptr);
        env.rel_humidity = *rel_humidity;
        env.latitude = *latitude;
        env.longitude = *longitude;
        env.altitude = *altitude;
        env.start_time = *start_time;
        env.start_day = *start_day;
    }
}

pub unsafe extern "C" fn f_env_state_set_temperature(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_env_state_set_temperature");
    unsafe { state_mut::<StubEnvState>(ptr).temp = *val }
}

pub unsafe extern "C" fn f_env_state_get_temp(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_env_state_get_temp");
    unsafe { *val = state::<StubEnvState>(ptr).temp }
}

pub unsafe extern "C" fn f_env_state_get_rel_humid(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_env_state_get_rel_humid");
    unsafe { *val = state::<StubEnvState>(ptr).rel_humidity }
}

pub unsafe extern "C" fn f_env_state_get_height(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_env_state_get_height");
    unsafe { *val = state::<StubEnvState>(ptr).height }
}

pub unsafe extern "C" fn f_env_state_set_height(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_env_state_set_height");
    unsafe { state_mut::<StubEnvState>(ptr).height = *val }
}

pub unsafe extern "C" fn f_env_state_get_pressure(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_env_state_get_pressure");
    unsafe { *val = state::<StubEnvState>(ptr).pressure }
}

pub unsafe extern "C" fn f_env_state_set_pressure(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_env_state_set_pressure");
    unsafe { state_mut::<StubEnvState>(ptr).pressure = *val }
}

pub unsafe extern "C" fn f_env_state_air_density(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_env_state_air_density");
    unsafe {
        let env = state::<StubEnvState>(ptr);
        // Dry air, ideal gas.
        const AIR_MOLEC_WEIGHT: f64 = 2.89644e-2;
        const UNIV_GAS_CONST: f64 = 8.314462618;
        *val = if env.temp > 0.0 {
            env.pressure * AIR_MOLEC_WEIGHT / (UNIV_GAS_CONST * env.temp)
        } else {
            0.0
        };
    }
}

pub unsafe extern "C" fn f_env_state_get_elapsed_time(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_env_state_get_elapsed_time");
    unsafe { *val = state::<StubEnvState>(ptr).elapsed_time }
}

pub unsafe extern "C" fn f_env_state_get_start_time(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_env_state_get_start_time");
    unsafe { *val = state::<StubEnvState>(ptr).start_time }
}

pub unsafe extern "C" fn f_env_state_get_additive_kernel_coefficient(
    ptr: *const c_void,
    val: *mut f64,
) {
    diag::hit("f_env_state_get_additive_kernel_coefficient");
    unsafe { *val = state::<StubEnvState>(ptr).additive_kernel_coefficient }
}

pub unsafe extern "C" fn f_env_state_set_additive_kernel_coefficient(
    ptr: *mut c_void,
    val: *const f64,
) {
    diag::hit("f_env_state_set_additive_kernel_coefficient");
    unsafe { state_mut::<StubEnvState>(ptr).additive_kernel_coefficient = *val }
}
