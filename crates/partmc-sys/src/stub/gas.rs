use super::{f64_slice, fill_f64, fill_str, install, state, state_mut, string_arg, teardown};
use crate::diag;
use std::ffi::{c_char, c_int, c_void};

#[derive(Debug, Clone)]
pub(crate) struct StubGasData {
    pub names: Vec<String>,
}

pub unsafe extern "C" fn f_gas_data_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_gas_data_ctor");
    unsafe { install(ptr, StubGasData { names: Vec::new() }) }
}

pub unsafe extern "C" fn f_gas_data_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_gas_data_dtor");
    unsafe { teardown::<StubGasData>(ptr) }
}

pub unsafe extern "C" fn f_gas_data_add_species(
    ptr: *mut c_void,
    name: *const c_char,
    name_size: *const c_int,
) {
    diag::hit("f_gas_data_add_species");
    unsafe {
        let name = string_arg(name, name_size);
        state_mut::<StubGasData>(ptr).names.push(name);
    }
}

pub unsafe extern "C" fn f_gas_data_n_spec(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_gas_data_n_spec");
    unsafe { *len = state::<StubGasData>(ptr).names.len() as c_int }
}

pub unsafe extern "C" fn f_gas_data_spec_by_name(
    ptr: *const c_void,
    name: *const c_char,
    name_size: *const c_int,
    idx: *mut c_int,
) {
    diag::hit("f_gas_data_spec_by_name");
    unsafe {
        let wanted = string_arg(name, name_size);
        let pos = state::<StubGasData>(ptr).names.iter().position(|n| *n == wanted);
        *idx = pos.map(|p| p as c_int + 1).unwrap_or(0);
    }
}

pub unsafe extern "C" fn f_gas_data_spec_name_size(
    ptr: *const c_void,
    idx: *const c_int,
    size: *mut c_int,
) {
    diag::hit("f_gas_data_spec_name_size");
    unsafe { *size = state::<StubGasData>(ptr).names[(*idx - 1) as usize].len() as c_int }
}

pub unsafe extern "C" fn f_gas_data_spec_name(
    ptr: *const c_void,
    idx: *const c_int,
    name: *mut c_char,
    name_size: *const c_int,
) {
    diag::hit("f_gas_data_spec_name");
    unsafe {
        let s = &state::<StubGasData>(ptr).names[(*idx - 1) as usize];
        fill_str(name, name_size, s);
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StubGasState {
    pub mix_rat: Vec<f64>,
}

pub unsafe extern "C" fn f_gas_state_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_gas_state_ctor");
    unsafe { install(ptr, StubGasState { mix_rat: Vec::new() }) }
}

pub unsafe extern "C" fn f_gas_state_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_gas_state_dtor");
    unsafe { teardown::<StubGasState>(ptr) }
}

pub unsafe extern "C" fn f_gas_state_init(ptr: *mut c_void, gas_data: *const c_void) {
    diag::hit("f_gas_state_init");
    unsafe {
        let n = state::<StubGasData>(gas_data).names.len();
        state_mut::<StubGasState>(ptr).mix_rat = vec![0.0; n];
    }
}

pub unsafe extern "C" fn f_gas_state_len(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_gas_state_len");
    unsafe { *len = state::<StubGasState>(ptr).mix_rat.len() as c_int }
}

pub unsafe extern "C" fn f_gas_state_mix_rat(ptr: *const c_void, idx: *const c_int, val: *mut f64) {
    diag::hit("f_gas_state_mix_rat");
    unsafe { *val = state::<StubGasState>(ptr).mix_rat[(*idx - 1) as usize] }
}

pub unsafe extern "C" fn f_gas_state_set_item(ptr: *mut c_void, idx: *const c_int, val: *const f64) {
    diag::hit("f_gas_state_set_item");
    unsafe { state_mut::<StubGasState>(ptr).mix_rat[(*idx - 1) as usize] = *val }
}

pub unsafe extern "C" fn f_gas_state_mix_rats(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_gas_state_mix_rats");
    unsafe { fill_f64(arr, arr_size, &state::<StubGasState>(ptr).mix_rat) }
}

pub unsafe extern "C" fn f_gas_state_set_mix_rats(
    ptr: *mut c_void,
    arr: *const f64,
    arr_size: *const c_int,
) {
    diag::hit("f_gas_state_set_mix_rats");
    unsafe { state_mut::<StubGasState>(ptr).mix_rat = f64_slice(arr, arr_size).to_vec() }
}
