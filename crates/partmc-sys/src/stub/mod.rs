//! In-process stand-in for the Fortran engine.
//!
//! Each `f_<entity>_ctor` boxes a plain Rust struct and hands the raw
//! pointer back through the out-parameter; every other entry point casts the
//! opaque pointer back to that struct. Numerics are reduced to the bare
//! minimum needed for set/get round-trips (spherical geometry, linear
//! profile interpolation); none of the real solvers are reproduced here.

use std::ffi::{c_char, c_int, c_void};
use std::ptr;

mod aero_data;
mod aero_dist;
mod aero_mode;
mod aero_particle;
mod aero_state;
mod binned;
mod env;
mod gas;
mod grid;
mod misc;
mod run;
mod scenario;

pub use aero_data::*;
pub use aero_dist::*;
pub use aero_mode::*;
pub use aero_particle::*;
pub use aero_state::*;
pub use binned::*;
pub use env::*;
pub use gas::*;
pub use grid::*;
pub use misc::*;
pub use run::*;
pub use scenario::*;

pub(crate) unsafe fn install<T>(ptr: *mut *mut c_void, state: T) {
    unsafe { *ptr = Box::into_raw(Box::new(state)) as *mut c_void }
}

pub(crate) unsafe fn teardown<T>(ptr: *mut *mut c_void) {
    unsafe {
        drop(Box::from_raw(*ptr as *mut T));
        *ptr = ptr::null_mut();
    }
}

pub(crate) unsafe fn state<'a, T>(ptr: *const c_void) -> &'a T {
    unsafe { &*(ptr as *const T) }
}

pub(crate) unsafe fn state_mut<'a, T>(ptr: *mut c_void) -> &'a mut T {
    unsafe { &mut *(ptr as *mut T) }
}

pub(crate) unsafe fn f64_slice<'a>(arr: *const f64, arr_size: *const c_int) -> &'a [f64] {
    unsafe { std::slice::from_raw_parts(arr, *arr_size as usize) }
}

pub(crate) unsafe fn string_arg(name: *const c_char, name_size: *const c_int) -> String {
    unsafe {
        let bytes = std::slice::from_raw_parts(name as *const u8, *name_size as usize);
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Copies `src` into a caller-sized f64 buffer. The caller promised
/// `arr_size` capacity; the stub holds it to exactly the advertised length.
pub(crate) unsafe fn fill_f64(arr: *mut f64, arr_size: *const c_int, src: &[f64]) {
    unsafe {
        debug_assert_eq!(*arr_size as usize, src.len());
        ptr::copy_nonoverlapping(src.as_ptr(), arr, src.len());
    }
}

pub(crate) unsafe fn fill_i32(arr: *mut c_int, arr_size: *const c_int, src: &[c_int]) {
    unsafe {
        debug_assert_eq!(*arr_size as usize, src.len());
        ptr::copy_nonoverlapping(src.as_ptr(), arr, src.len());
    }
}

pub(crate) unsafe fn fill_str(name: *mut c_char, name_size: *const c_int, src: &str) {
    unsafe {
        debug_assert_eq!(*name_size as usize, src.len());
        ptr::copy_nonoverlapping(src.as_ptr() as *const c_char, name, src.len());
    }
}

/// Sphere volume for radius `r`.
pub(crate) fn sphere_vol(r: f64) -> f64 {
    4.0 / 3.0 * std::f64::consts::PI * r.powi(3)
}

/// Radius of a sphere with volume `v`.
pub(crate) fn sphere_rad(v: f64) -> f64 {
    (3.0 * v / (4.0 * std::f64::consts::PI)).powf(1.0 / 3.0)
}

/// Piecewise-linear interpolation with constant extrapolation outside the
/// set-point range.
pub(crate) fn interp_1d(times: &[f64], vals: &[f64], t: f64) -> f64 {
    debug_assert_eq!(times.len(), vals.len());
    if times.is_empty() {
        return 0.0;
    }
    if t <= times[0] {
        return vals[0];
    }
    if t >= times[times.len() - 1] {
        return vals[vals.len() - 1];
    }
    let i = times.partition_point(|&x| x <= t) - 1;
    let frac = (t - times[i]) / (times[i + 1] - times[i]);
    vals[i] + frac * (vals[i + 1] - vals[i])
}
