use super::{install, state, state_mut, teardown};
use crate::diag;
use lazy_static::lazy_static;
use std::ffi::{c_int, c_void};
use std::sync::Mutex;

// Run-option records.

#[derive(Debug, Clone, Default)]
pub(crate) struct StubRunPartOpt {
    pub t_max: f64,
    pub del_t: f64,
}

pub unsafe extern "C" fn f_run_part_opt_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_run_part_opt_ctor");
    unsafe { install(ptr, StubRunPartOpt::default()) }
}

pub unsafe extern "C" fn f_run_part_opt_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_run_part_opt_dtor");
    unsafe { teardown::<StubRunPartOpt>(ptr) }
}

pub unsafe extern "C" fn f_run_part_opt_init(ptr: *mut c_void, t_max: *const f64, del_t: *const f64) {
    diag::hit("f_run_part_opt_init");
    unsafe {
        let opt = state_mut::<StubRunPartOpt>(ptr);
        opt.t_max = *t_max;
        opt.del_t = *del_t;
    }
}

pub unsafe extern "C" fn f_run_part_opt_t_max(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_run_part_opt_t_max");
    unsafe { *val = state::<StubRunPartOpt>(ptr).t_max }
}

pub unsafe extern "C" fn f_run_part_opt_del_t(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_run_part_opt_del_t");
    unsafe { *val = state::<StubRunPartOpt>(ptr).del_t }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StubRunSectOpt {
    pub t_max: f64,
    pub del_t: f64,
}

pub unsafe extern "C" fn f_run_sect_opt_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_run_sect_opt_ctor");
    unsafe { install(ptr, StubRunSectOpt::default()) }
}

pub unsafe extern "C" fn f_run_sect_opt_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_run_sect_opt_dtor");
    unsafe { teardown::<StubRunSectOpt>(ptr) }
}

pub unsafe extern "C" fn f_run_sect_opt_init(
    ptr: *mut c_void,
    _env_state: *const c_void,
    t_max: *const f64,
    del_t: *const f64,
) {
    diag::hit("f_run_sect_opt_init");
    unsafe {
        let opt = state_mut::<StubRunSectOpt>(ptr);
        opt.t_max = *t_max;
        opt.del_t = *del_t;
    }
}

pub unsafe extern "C" fn f_run_sect_opt_t_max(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_run_sect_opt_t_max");
    unsafe { *val = state::<StubRunSectOpt>(ptr).t_max }
}

pub unsafe extern "C" fn f_run_sect_opt_del_t(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_run_sect_opt_del_t");
    unsafe { *val = state::<StubRunSectOpt>(ptr).del_t }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StubRunExactOpt {
    pub t_max: f64,
}

pub unsafe extern "C" fn f_run_exact_opt_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_run_exact_opt_ctor");
    unsafe { install(ptr, StubRunExactOpt::default()) }
}

pub unsafe extern "C" fn f_run_exact_opt_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_run_exact_opt_dtor");
    unsafe { teardown::<StubRunExactOpt>(ptr) }
}

pub unsafe extern "C" fn f_run_exact_opt_init(
    ptr: *mut c_void,
    _env_state: *const c_void,
    t_max: *const f64,
) {
    diag::hit("f_run_exact_opt_init");
    unsafe { state_mut::<StubRunExactOpt>(ptr).t_max = *t_max }
}

pub unsafe extern "C" fn f_run_exact_opt_t_max(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_run_exact_opt_t_max");
    unsafe { *val = state::<StubRunExactOpt>(ptr).t_max }
}

// Opaque subsystem handles.

pub(crate) struct StubCampCore;
pub(crate) struct StubPhotolysis;

pub unsafe extern "C" fn f_camp_core_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_camp_core_ctor");
    unsafe { install(ptr, StubCampCore) }
}

pub unsafe extern "C" fn f_camp_core_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_camp_core_dtor");
    unsafe { teardown::<StubCampCore>(ptr) }
}

pub unsafe extern "C" fn f_photolysis_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_photolysis_ctor");
    unsafe { install(ptr, StubPhotolysis) }
}

pub unsafe extern "C" fn f_photolysis_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_photolysis_dtor");
    unsafe { teardown::<StubPhotolysis>(ptr) }
}

// util

pub unsafe extern "C" fn f_pow2_above(n: *const c_int, val: *mut c_int) {
    diag::hit("f_pow2_above");
    unsafe {
        let n = *n;
        *val = if n <= 1 {
            1
        } else {
            (n as u32).next_power_of_two() as c_int
        };
    }
}

pub unsafe extern "C" fn f_sphere_vol2rad(vol: *const f64, radius: *mut f64) {
    diag::hit("f_sphere_vol2rad");
    unsafe { *radius = super::sphere_rad(*vol) }
}

pub unsafe extern "C" fn f_sphere_rad2vol(radius: *const f64, vol: *mut f64) {
    diag::hit("f_sphere_rad2vol");
    unsafe { *vol = super::sphere_vol(*radius) }
}

pub unsafe extern "C" fn f_rad2diam(radius: *const f64, diam: *mut f64) {
    diag::hit("f_rad2diam");
    unsafe { *diam = 2.0 * *radius }
}

pub unsafe extern "C" fn f_diam2rad(diam: *const f64, radius: *mut f64) {
    diag::hit("f_diam2rad");
    unsafe { *radius = *diam / 2.0 }
}

// rand: small LCG, reseedable, deterministic across platforms.

lazy_static! {
    static ref RAND_STATE: Mutex<u64> = Mutex::new(0x853c49e6748fea9b);
}

fn next_uniform() -> f64 {
    let mut s = RAND_STATE.lock().unwrap();
    *s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    ((*s >> 11) as f64) / ((1u64 << 53) as f64)
}

pub unsafe extern "C" fn f_rand_init(seed: *const c_int) {
    diag::hit("f_rand_init");
    unsafe {
        let seed = *seed;
        let base = if seed == 0 {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        } else {
            seed as u64
        };
        *RAND_STATE.lock().unwrap() = base | 1;
    }
}

pub unsafe extern "C" fn f_rand_normal(mean: *const f64, stddev: *const f64, val: *mut f64) {
    diag::hit("f_rand_normal");
    unsafe {
        // Box-Muller
        let u1 = next_uniform().max(f64::MIN_POSITIVE);
        let u2 = next_uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        *val = *mean + *stddev * z;
    }
}
