use super::aero_data::StubAeroData;
use super::{f64_slice, fill_f64, install, state, state_mut, teardown};
use crate::diag;
use std::ffi::{c_int, c_void};

#[derive(Debug, Clone)]
pub(crate) struct StubAeroParticle {
    pub vols: Vec<f64>,
    pub densities: Vec<f64>,
    pub i_water: Option<usize>,
    pub id: i32,
}

impl StubAeroParticle {
    pub fn empty() -> Self {
        StubAeroParticle {
            vols: Vec::new(),
            densities: Vec::new(),
            i_water: None,
            id: 0,
        }
    }

    pub fn volume(&self) -> f64 {
        self.vols.iter().sum()
    }

    pub fn dry_volume(&self) -> f64 {
        self.vols
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != self.i_water)
            .map(|(_, v)| v)
            .sum()
    }

    pub fn mass(&self) -> f64 {
        self.vols
            .iter()
            .zip(&self.densities)
            .map(|(v, d)| v * d)
            .sum()
    }
}

pub unsafe extern "C" fn f_aero_particle_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_particle_ctor");
    unsafe { install(ptr, StubAeroParticle::empty()) }
}

pub unsafe extern "C" fn f_aero_particle_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_particle_dtor");
    unsafe { teardown::<StubAeroParticle>(ptr) }
}

pub unsafe extern "C" fn f_aero_particle_init(
    ptr: *mut c_void,
    aero_data: *const c_void,
    vols: *const f64,
    n_vols: *const c_int,
) {
    diag::hit("f_aero_particle_init");
    unsafe {
        let data = state::<StubAeroData>(aero_data);
        let particle = state_mut::<StubAeroParticle>(ptr);
        particle.vols = f64_slice(vols, n_vols).to_vec();
        particle.densities = data.species.iter().map(|s| s.density).collect();
        particle.i_water = data.i_water();
    }
}

pub unsafe extern "C" fn f_aero_particle_n_spec(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_aero_particle_n_spec");
    unsafe { *len = state::<StubAeroParticle>(ptr).vols.len() as c_int }
}

pub unsafe extern "C" fn f_aero_particle_volumes(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_particle_volumes");
    unsafe { fill_f64(arr, arr_size, &state::<StubAeroParticle>(ptr).vols) }
}

pub unsafe extern "C" fn f_aero_particle_volume(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_particle_volume");
    unsafe { *val = state::<StubAeroParticle>(ptr).volume() }
}

pub unsafe extern "C" fn f_aero_particle_species_volume(
    ptr: *const c_void,
    idx: *const c_int,
    val: *mut f64,
) {
    diag::hit("f_aero_particle_species_volume");
    unsafe { *val = state::<StubAeroParticle>(ptr).vols[(*idx - 1) as usize] }
}

pub unsafe extern "C" fn f_aero_particle_radius(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_particle_radius");
    unsafe { *val = super::sphere_rad(state::<StubAeroParticle>(ptr).volume()) }
}

pub unsafe extern "C" fn f_aero_particle_diameter(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_particle_diameter");
    unsafe { *val = 2.0 * super::sphere_rad(state::<StubAeroParticle>(ptr).volume()) }
}

pub unsafe extern "C" fn f_aero_particle_dry_diameter(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_particle_dry_diameter");
    unsafe { *val = 2.0 * super::sphere_rad(state::<StubAeroParticle>(ptr).dry_volume()) }
}

pub unsafe extern "C" fn f_aero_particle_mass(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_particle_mass");
    unsafe { *val = state::<StubAeroParticle>(ptr).mass() }
}

pub unsafe extern "C" fn f_aero_particle_species_mass(
    ptr: *const c_void,
    idx: *const c_int,
    val: *mut f64,
) {
    diag::hit("f_aero_particle_species_mass");
    unsafe {
        let particle = state::<StubAeroParticle>(ptr);
        let i = (*idx - 1) as usize;
        *val = particle.vols[i] * particle.densities[i];
    }
}

pub unsafe extern "C" fn f_aero_particle_species_masses(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_particle_species_masses");
    unsafe {
        let particle = state::<StubAeroParticle>(ptr);
        let masses: Vec<f64> = particle
            .vols
            .iter()
            .zip(&particle.densities)
            .map(|(v, d)| v * d)
            .collect();
        fill_f64(arr, arr_size, &masses);
    }
}

pub unsafe extern "C" fn f_aero_particle_density(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_particle_density");
    unsafe {
        let particle = state::<StubAeroParticle>(ptr);
        let vol = particle.volume();
        *val = if vol > 0.0 { particle.mass() / vol } else { 0.0 };
    }
}

pub unsafe extern "C" fn f_aero_particle_id(ptr: *const c_void, id: *mut c_int) {
    diag::hit("f_aero_particle_id");
    unsafe { *id = state::<StubAeroParticle>(ptr).id }
}

pub unsafe extern "C" fn f_aero_particle_set_vols(
    ptr: *mut c_void,
    vols: *const f64,
    n_vols: *const c_int,
) {
    diag::hit("f_aero_particle_set_vols");
    unsafe { state_mut::<StubAeroParticle>(ptr).vols = f64_slice(vols, n_vols).to_vec() }
}

pub unsafe extern "C" fn f_aero_particle_zero(ptr: *mut c_void) {
    diag::hit("f_aero_particle_zero");
    unsafe {
        let particle = state_mut::<StubAeroParticle>(ptr);
        particle.vols.iter_mut().for_each(|v| *v = 0.0);
        particle.id = 0;
    }
}
