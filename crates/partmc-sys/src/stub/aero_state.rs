use super::aero_data::StubAeroData;
use super::aero_dist::StubAeroDist;
use super::aero_particle::StubAeroParticle;
use super::{fill_f64, fill_i32, install, state, state_mut, teardown};
use crate::diag;
use std::ffi::{c_int, c_void};

#[derive(Debug, Clone)]
pub(crate) struct PartRec {
    pub id: i32,
    pub vols: Vec<f64>,
}

#[derive(Debug, Clone)]
pub(crate) struct StubAeroState {
    pub weight_n_part: f64,
    pub weight_class: i32,
    pub densities: Vec<f64>,
    pub i_water: Option<usize>,
    pub particles: Vec<PartRec>,
    pub next_id: i32,
}

impl StubAeroState {
    // The stub gives every particle unit number concentration, so totals
    // reduce to sums over the population.
    fn particle_mass(&self, rec: &PartRec) -> f64 {
        rec.vols.iter().zip(&self.densities).map(|(v, d)| v * d).sum()
    }

    fn fresh_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

pub unsafe extern "C" fn f_aero_state_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_state_ctor");
    unsafe {
        install(
            ptr,
            StubAeroState {
                weight_n_part: 0.0,
                weight_class: 0,
                densities: Vec::new(),
                i_water: None,
                particles: Vec::new(),
                next_id: 0,
            },
        )
    }
}

pub unsafe extern "C" fn f_aero_state_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_state_dtor");
    unsafe { teardown::<StubAeroState>(ptr) }
}

pub unsafe extern "C" fn f_aero_state_init(
    ptr: *mut c_void,
    aero_data: *const c_void,
    n_part: *const f64,
    weight_class: *const c_int,
) {
    diag::hit("f_aero_state_init");
    unsafe {
        let data = state::<StubAeroData>(aero_data);
        let st = state_mut::<StubAeroState>(ptr);
        st.weight_n_part = *n_part;
        st.weight_class = *weight_class;
        st.densities = data.species.iter().map(|s| s.density).collect();
        st.i_water = data.i_water();
    }
}

pub unsafe extern "C" fn f_aero_state_len(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_aero_state_len");
    unsafe { *len = state::<StubAeroState>(ptr).particles.len() as c_int }
}

pub unsafe extern "C" fn f_aero_state_total_num_conc(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_state_total_num_conc");
    unsafe { *val = state::<StubAeroState>(ptr).particles.len() as f64 }
}

pub unsafe extern "C" fn f_aero_state_total_mass_conc(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_state_total_mass_conc");
    unsafe {
        let st = state::<StubAeroState>(ptr);
        *val = st.particles.iter().map(|p| st.particle_mass(p)).sum();
    }
}

pub unsafe extern "C" fn f_aero_state_num_concs(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_state_num_concs");
    unsafe {
        let n = state::<StubAeroState>(ptr).particles.len();
        fill_f64(arr, arr_size, &vec![1.0; n]);
    }
}

pub unsafe extern "C" fn f_aero_state_masses(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_state_masses");
    unsafe {
        let st = state::<StubAeroState>(ptr);
        let masses: Vec<f64> = st.particles.iter().map(|p| st.particle_mass(p)).collect();
        fill_f64(arr, arr_size, &masses);
    }
}

pub unsafe extern "C" fn f_aero_state_diameters(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_state_diameters");
    unsafe {
        let st = state::<StubAeroState>(ptr);
        let diams: Vec<f64> = st
            .particles
            .iter()
            .map(|p| 2.0 * super::sphere_rad(p.vols.iter().sum()))
            .collect();
        fill_f64(arr, arr_size, &diams);
    }
}

pub unsafe extern "C" fn f_aero_state_dry_diameters(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_state_dry_diameters");
    unsafe {
        let st = state::<StubAeroState>(ptr);
        let diams: Vec<f64> = st
            .particles
            .iter()
            .map(|p| {
                let dry: f64 = p
                    .vols
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| Some(*i) != st.i_water)
                    .map(|(_, v)| v)
                    .sum();
                2.0 * super::sphere_rad(dry)
            })
            .collect();
        fill_f64(arr, arr_size, &diams);
    }
}

pub unsafe extern "C" fn f_aero_state_ids(ptr: *const c_void, arr: *mut c_int, arr_size: *const c_int) {
    diag::hit("f_aero_state_ids");
    unsafe {
        let ids: Vec<c_int> = state::<StubAeroState>(ptr)
            .particles
            .iter()
            .map(|p| p.id)
            .collect();
        fill_i32(arr, arr_size, &ids);
    }
}

pub unsafe extern "C" fn f_aero_state_particle(
    ptr: *const c_void,
    idx: *const c_int,
    particle: *mut c_void,
) {
    diag::hit("f_aero_state_particle");
    unsafe {
        let st = state::<StubAeroState>(ptr);
        let rec = &st.particles[(*idx - 1) as usize];
        let out = state_mut::<StubAeroParticle>(particle);
        out.vols = rec.vols.clone();
        out.densities = st.densities.clone();
        out.i_water = st.i_water;
        out.id = rec.id;
    }
}

pub unsafe extern "C" fn f_aero_state_add_particle(ptr: *mut c_void, particle: *const c_void) {
    diag::hit("f_aero_state_add_particle");
    unsafe {
        let vols = state::<StubAeroParticle>(particle).vols.clone();
        let st = state_mut::<StubAeroState>(ptr);
        let id = st.fresh_id();
        st.particles.push(PartRec { id, vols });
    }
}

pub unsafe extern "C" fn f_aero_state_remove_particle(ptr: *mut c_void, idx: *const c_int) {
    diag::hit("f_aero_state_remove_particle");
    unsafe {
        state_mut::<StubAeroState>(ptr)
            .particles
            .remove((*idx - 1) as usize);
    }
}

pub unsafe extern "C" fn f_aero_state_zero(ptr: *mut c_void) {
    diag::hit("f_aero_state_zero");
    unsafe { state_mut::<StubAeroState>(ptr).particles.clear() }
}

pub unsafe extern "C" fn f_aero_state_make_dry(ptr: *mut c_void) {
    diag::hit("f_aero_state_make_dry");
    unsafe {
        let st = state_mut::<StubAeroState>(ptr);
        if let Some(iw) = st.i_water {
            for p in &mut st.particles {
                if iw < p.vols.len() {
                    p.vols[iw] = 0.0;
                }
            }
        }
    }
}

pub unsafe extern "C" fn f_aero_state_dist_sample(
    ptr: *mut c_void,
    dist: *const c_void,
    sample_prop: *const f64,
    _create_time: *const f64,
    _allow_doubling: *const c_int,
    _allow_halving: *const c_int,
    n_added: *mut c_int,
) {
    diag::hit("f_aero_state_dist_sample");
    unsafe {
        // Deterministic sampling: one particle per mode per requested unit,
        // volumes split by the mode's composition at its characteristic size.
        let dist = state::<StubAeroDist>(dist);
        let st = state_mut::<StubAeroState>(ptr);
        let per_mode = ((st.weight_n_part * *sample_prop).round() as usize)
            .max(1)
            .min(1000);
        let mut added = 0;
        for mode in &dist.modes {
            let r = if mode.mode_type == 4 {
                mode.sample_radius.first().copied().unwrap_or(0.0)
            } else {
                mode.char_radius
            };
            let vol = super::sphere_vol(r);
            for _ in 0..per_mode {
                let vols: Vec<f64> = mode.vol_frac.iter().map(|f| f * vol).collect();
                let id = st.fresh_id();
                st.particles.push(PartRec { id, vols });
                added += 1;
            }
        }
        *n_added = added;
    }
}
