use super::{fill_f64, fill_str, install, state, state_mut, string_arg, teardown};
use crate::diag;
use std::ffi::{c_char, c_int, c_void};

#[derive(Debug, Clone)]
pub(crate) struct SpeciesRec {
    pub name: String,
    pub density: f64,
    pub num_ions: i32,
    pub molec_weight: f64,
    pub kappa: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct StubAeroData {
    pub species: Vec<SpeciesRec>,
    pub sources: Vec<String>,
    pub frac_dim: f64,
    pub vol_fill_factor: f64,
    pub prime_radius: f64,
}

impl StubAeroData {
    /// Index of the water species, if any. PartMC identifies water by the
    /// conventional species name.
    pub fn i_water(&self) -> Option<usize> {
        self.species.iter().position(|s| s.name == "H2O")
    }

    /// Mass-equivalent volume to geometric radius under the fractal
    /// parameters. With the defaults (frac_dim 3, fill factor 1) this is
    /// plain spherical geometry.
    pub fn vol2rad(&self, vol: f64) -> f64 {
        let rme = super::sphere_rad(vol);
        let r0 = self.prime_radius;
        if self.frac_dim == 3.0 && self.vol_fill_factor == 1.0 {
            rme
        } else {
            r0 * (self.vol_fill_factor * (rme / r0).powi(3)).powf(1.0 / self.frac_dim)
        }
    }

    pub fn rad2vol(&self, radius: f64) -> f64 {
        let r0 = self.prime_radius;
        if self.frac_dim == 3.0 && self.vol_fill_factor == 1.0 {
            super::sphere_vol(radius)
        } else {
            super::sphere_vol(r0) * (radius / r0).powf(self.frac_dim) / self.vol_fill_factor
        }
    }
}

pub unsafe extern "C" fn f_aero_data_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_data_ctor");
    unsafe {
        install(
            ptr,
            StubAeroData {
                species: Vec::new(),
                sources: Vec::new(),
                frac_dim: 3.0,
                vol_fill_factor: 1.0,
                prime_radius: 1e-8,
            },
        )
    }
}

pub unsafe extern "C" fn f_aero_data_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_aero_data_dtor");
    unsafe { teardown::<StubAeroData>(ptr) }
}

pub unsafe extern "C" fn f_aero_data_add_species(
    ptr: *mut c_void,
    name: *const c_char,
    name_size: *const c_int,
    density: *const f64,
    num_ions: *const c_int,
    molec_weight: *const f64,
    kappa: *const f64,
) {
    diag::hit("f_aero_data_add_species");
    unsafe {
        state_mut::<StubAeroData>(ptr).species.push(SpeciesRec {
            name: string_arg(name, name_size),
            density: *density,
            num_ions: *num_ions,
            molec_weight: *molec_weight,
            kappa: *kappa,
        });
    }
}

pub unsafe extern "C" fn f_aero_data_n_spec(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_aero_data_n_spec");
    unsafe { *len = state::<StubAeroData>(ptr).species.len() as c_int }
}

pub unsafe extern "C" fn f_aero_data_spec_by_name(
    ptr: *const c_void,
    name: *const c_char,
    name_size: *const c_int,
    idx: *mut c_int,
) {
    diag::hit("f_aero_data_spec_by_name");
    unsafe {
        let wanted = string_arg(name, name_size);
        let pos = state::<StubAeroData>(ptr)
            .species
            .iter()
            .position(|s| s.name == wanted);
        // 1-based; 0 means not found
        *idx = pos.map(|p| p as c_int + 1).unwrap_or(0);
    }
}

pub unsafe extern "C" fn f_aero_data_spec_name_size(
    ptr: *const c_void,
    idx: *const c_int,
    size: *mut c_int,
) {
    diag::hit("f_aero_data_spec_name_size");
    unsafe {
        *size = state::<StubAeroData>(ptr).species[(*idx - 1) as usize]
            .name
            .len() as c_int
    }
}

pub unsafe extern "C" fn f_aero_data_spec_name(
    ptr: *const c_void,
    idx: *const c_int,
    name: *mut c_char,
    name_size: *const c_int,
) {
    diag::hit("f_aero_data_spec_name");
    unsafe {
        let s = &state::<StubAeroData>(ptr).species[(*idx - 1) as usize].name;
        fill_str(name, name_size, s);
    }
}

pub unsafe extern "C" fn f_aero_data_get_frac_dim(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_data_get_frac_dim");
    unsafe { *val = state::<StubAeroData>(ptr).frac_dim }
}

pub unsafe extern "C" fn f_aero_data_set_frac_dim(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_aero_data_set_frac_dim");
    unsafe { state_mut::<StubAeroData>(ptr).frac_dim = *val }
}

pub unsafe extern "C" fn f_aero_data_get_vol_fill_factor(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_data_get_vol_fill_factor");
    unsafe { *val = state::<StubAeroData>(ptr).vol_fill_factor }
}

pub unsafe extern "C" fn f_aero_data_set_vol_fill_factor(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_aero_data_set_vol_fill_factor");
    unsafe { state_mut::<StubAeroData>(ptr).vol_fill_factor = *val }
}

pub unsafe extern "C" fn f_aero_data_get_prime_radius(ptr: *const c_void, val: *mut f64) {
    diag::hit("f_aero_data_get_prime_radius");
    unsafe { *val = state::<StubAeroData>(ptr).prime_radius }
}

pub unsafe extern "C" fn f_aero_data_set_prime_radius(ptr: *mut c_void, val: *const f64) {
    diag::hit("f_aero_data_set_prime_radius");
    unsafe { state_mut::<StubAeroData>(ptr).prime_radius = *val }
}

pub unsafe extern "C" fn f_aero_data_densities(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_data_densities");
    unsafe {
        let vals: Vec<f64> = state::<StubAeroData>(ptr)
            .species
            .iter()
            .map(|s| s.density)
            .collect();
        fill_f64(arr, arr_size, &vals);
    }
}

pub unsafe extern "C" fn f_aero_data_kappa(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int) {
    diag::hit("f_aero_data_kappa");
    unsafe {
        let vals: Vec<f64> = state::<StubAeroData>(ptr)
            .species
            .iter()
            .map(|s| s.kappa)
            .collect();
        fill_f64(arr, arr_size, &vals);
    }
}

pub unsafe extern "C" fn f_aero_data_molec_weights(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_aero_data_molec_weights");
    unsafe {
        let vals: Vec<f64> = state::<StubAeroData>(ptr)
            .species
            .iter()
            .map(|s| s.molec_weight)
            .collect();
        fill_f64(arr, arr_size, &vals);
    }
}

pub unsafe extern "C" fn f_aero_data_density(ptr: *const c_void, idx: *const c_int, val: *mut f64) {
    diag::hit("f_aero_data_density");
    unsafe { *val = state::<StubAeroData>(ptr).species[(*idx - 1) as usize].density }
}

pub unsafe extern "C" fn f_aero_data_n_source(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_aero_data_n_source");
    unsafe { *len = state::<StubAeroData>(ptr).sources.len() as c_int }
}

pub unsafe extern "C" fn f_aero_data_source_by_name(
    ptr: *mut c_void,
    name: *const c_char,
    name_size: *const c_int,
    idx: *mut c_int,
) {
    diag::hit("f_aero_data_source_by_name");
    unsafe {
        let wanted = string_arg(name, name_size);
        let data = state_mut::<StubAeroData>(ptr);
        let pos = match data.sources.iter().position(|s| *s == wanted) {
            Some(p) => p,
            None => {
                data.sources.push(wanted);
                data.sources.len() - 1
            }
        };
        *idx = pos as c_int + 1;
    }
}

pub unsafe extern "C" fn f_aero_data_source_name_size(
    ptr: *const c_void,
    idx: *const c_int,
    size: *mut c_int,
) {
    diag::hit("f_aero_data_source_name_size");
    unsafe { *size = state::<StubAeroData>(ptr).sources[(*idx - 1) as usize].len() as c_int }
}

pub unsafe extern "C" fn f_aero_data_source_name(
    ptr: *const c_void,
    idx: *const c_int,
    name: *mut c_char,
    name_size: *const c_int,
) {
    diag::hit("f_aero_data_source_name");
    unsafe {
        let s = &state::<StubAeroData>(ptr).sources[(*idx - 1) as usize];
        fill_str(name, name_size, s);
    }
}

pub unsafe extern "C" fn f_aero_data_rad2vol(ptr: *const c_void, radius: *const f64, vol: *mut f64) {
    diag::hit("f_aero_data_rad2vol");
    unsafe { *vol = state::<StubAeroData>(ptr).rad2vol(*radius) }
}

pub unsafe extern "C" fn f_aero_data_vol2rad(ptr: *const c_void, vol: *const f64, radius: *mut f64) {
    diag::hit("f_aero_data_vol2rad");
    unsafe { *radius = state::<StubAeroData>(ptr).vol2rad(*vol) }
}

pub unsafe extern "C" fn f_aero_data_diam2vol(ptr: *const c_void, diam: *const f64, vol: *mut f64) {
    diag::hit("f_aero_data_diam2vol");
    unsafe { *vol = state::<StubAeroData>(ptr).rad2vol(*diam / 2.0) }
}

pub unsafe extern "C" fn f_aero_data_vol2diam(ptr: *const c_void, vol: *const f64, diam: *mut f64) {
    diag::hit("f_aero_data_vol2diam");
    unsafe { *diam = 2.0 * state::<StubAeroData>(ptr).vol2rad(*vol) }
}
