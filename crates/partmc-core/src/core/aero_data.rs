//! Aerosol species table.

use crate::boundary::{check_index, get_f64, get_i32, read_f64_array, read_string, str_arg, to_foreign_index};
use crate::config::{f64_array, single_key_entries, unique_keys};
use crate::errors::{PartMcError, PartMcResult};
use crate::handle::ForeignHandle;
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;
use tracing::debug;

/// The aerosol species table plus fractal particle geometry parameters.
///
/// Owns the engine-side `aero_data_t`. Most other aerosol entities are
/// constructed against it and read their species dimension from it.
#[derive(Debug)]
pub struct AeroData {
    handle: ForeignHandle,
}

impl AeroData {
    /// Builds the species table from a list of single-entry mappings,
    /// `{name: [density, num_ions, molec_weight, kappa]}` each.
    ///
    /// The whole document is parsed and checked before the engine-side
    /// table is created; a malformed entry leaves no handle behind.
    pub fn from_json(value: &Value) -> PartMcResult<Self> {
        let list = value.as_array().ok_or_else(|| {
            PartMcError::Schema("aerosol species data must be a list of species entries".into())
        })?;
        let entries = single_key_entries(list, "aerosol species data")?;
        unique_keys(&entries, "aerosol species data")?;

        let mut species = Vec::with_capacity(entries.len());
        for (name, props) in &entries {
            let vals = f64_array(props, "aerosol species properties")?;
            if vals.len() != 4 {
                return Err(PartMcError::Schema(format!(
                    "species {name:?} needs [density, num_ions, molec_weight, kappa]"
                )));
            }
            species.push((*name, vals));
        }

        let mut handle = ForeignHandle::acquire(sys::f_aero_data_ctor, sys::f_aero_data_dtor)?;
        for (name, vals) in &species {
            let (name_ptr, name_len) = str_arg(name);
            let num_ions = vals[1] as i32;
            unsafe {
                sys::f_aero_data_add_species(
                    handle.borrow_mut(),
                    name_ptr,
                    &name_len,
                    &vals[0],
                    &num_ions,
                    &vals[2],
                    &vals[3],
                );
            }
        }
        debug!(n_spec = species.len(), "aerosol species table ready");
        Ok(AeroData { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    /// Number of species.
    pub fn len(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_data_n_spec(self.handle.borrow(), p) }) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Host (0-based) index of the named species.
    pub fn spec_by_name(&self, name: &str) -> PartMcResult<usize> {
        let (ptr, len) = str_arg(name);
        let idx =
            get_i32(|p| unsafe { sys::f_aero_data_spec_by_name(self.handle.borrow(), ptr, &len, p) });
        if idx < 1 {
            Err(PartMcError::UnknownSpecies(name.to_string()))
        } else {
            Ok(idx as usize - 1)
        }
    }

    /// All species names, in table order.
    pub fn species(&self) -> PartMcResult<Vec<String>> {
        (0..self.len())
            .map(|i| {
                let f_idx = to_foreign_index(i);
                read_string(
                    || {
                        get_i32(|p| unsafe {
                            sys::f_aero_data_spec_name_size(self.handle.borrow(), &f_idx, p)
                        }) as usize
                    },
                    |buf, n| unsafe {
                        sys::f_aero_data_spec_name(self.handle.borrow(), &f_idx, buf, n)
                    },
                )
            })
            .collect()
    }

    pub fn densities(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_data_densities(self.handle.borrow(), buf, n) },
        )
    }

    pub fn kappa(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_data_kappa(self.handle.borrow(), buf, n) },
        )
    }

    pub fn molecular_weights(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_data_molec_weights(self.handle.borrow(), buf, n) },
        )
    }

    /// Density of the species at host index `i`.
    pub fn density(&self, i: usize) -> PartMcResult<f64> {
        check_index(i, self.len())?;
        let f_idx = to_foreign_index(i);
        Ok(get_f64(|p| unsafe {
            sys::f_aero_data_density(self.handle.borrow(), &f_idx, p)
        }))
    }

    pub fn frac_dim(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_data_get_frac_dim(self.handle.borrow(), p) })
    }

    pub fn set_frac_dim(&mut self, val: f64) {
        unsafe { sys::f_aero_data_set_frac_dim(self.handle.borrow_mut(), &val) }
    }

    pub fn vol_fill_factor(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_data_get_vol_fill_factor(self.handle.borrow(), p) })
    }

    pub fn set_vol_fill_factor(&mut self, val: f64) {
        unsafe { sys::f_aero_data_set_vol_fill_factor(self.handle.borrow_mut(), &val) }
    }

    pub fn prime_radius(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_data_get_prime_radius(self.handle.borrow(), p) })
    }

    pub fn set_prime_radius(&mut self, val: f64) {
        unsafe { sys::f_aero_data_set_prime_radius(self.handle.borrow_mut(), &val) }
    }

    /// Geometric radius to mass-equivalent volume under the current fractal
    /// parameters.
    pub fn rad2vol(&self, radius: f64) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_data_rad2vol(self.handle.borrow(), &radius, p) })
    }

    pub fn vol2rad(&self, vol: f64) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_data_vol2rad(self.handle.borrow(), &vol, p) })
    }

    pub fn diam2vol(&self, diam: f64) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_data_diam2vol(self.handle.borrow(), &diam, p) })
    }

    pub fn vol2diam(&self, vol: f64) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_data_vol2diam(self.handle.borrow(), &vol, p) })
    }

    /// Number of registered particle sources.
    pub fn n_source(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_data_n_source(self.handle.borrow(), p) }) as usize
    }

    /// Registers `name` if unseen and returns its host (0-based) source
    /// index.
    pub(crate) fn register_source(&mut self, name: &str) -> usize {
        let (ptr, len) = str_arg(name);
        let idx = get_i32(|p| unsafe {
            sys::f_aero_data_source_by_name(self.handle.borrow_mut(), ptr, &len, p)
        });
        idx as usize - 1
    }

    /// All source names, in registration order.
    pub fn sources(&self) -> PartMcResult<Vec<String>> {
        (0..self.n_source())
            .map(|i| {
                let f_idx = to_foreign_index(i);
                read_string(
                    || {
                        get_i32(|p| unsafe {
                            sys::f_aero_data_source_name_size(self.handle.borrow(), &f_idx, p)
                        }) as usize
                    },
                    |buf, n| unsafe {
                        sys::f_aero_data_source_name(self.handle.borrow(), &f_idx, buf, n)
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sulfate_and_water() -> AeroData {
        AeroData::from_json(&json!([
            {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
            {"H2O": [1000.0, 0.0, 18e-3, 0.0]},
        ]))
        .unwrap()
    }

    #[test]
    fn species_table_round_trips() {
        let data = sulfate_and_water();
        assert_eq!(data.len(), 2);
        assert_eq!(data.species().unwrap(), vec!["SO4", "H2O"]);
        assert_eq!(data.spec_by_name("H2O").unwrap(), 1);
        assert_eq!(data.densities(), vec![1800.0, 1000.0]);
        assert_eq!(data.density(0).unwrap(), 1800.0);
    }

    #[test]
    fn unknown_species_is_an_error() {
        let data = sulfate_and_water();
        assert!(matches!(
            data.spec_by_name("BC"),
            Err(PartMcError::UnknownSpecies(_))
        ));
        assert!(matches!(
            data.density(5),
            Err(PartMcError::OutOfRange { .. })
        ));
    }

    #[test]
    fn duplicate_species_rejected() {
        let err = AeroData::from_json(&json!([
            {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
            {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
        ]))
        .unwrap_err();
        assert!(matches!(err, PartMcError::Schema(_)));
    }

    #[test]
    fn wrong_property_count_rejected() {
        let err = AeroData::from_json(&json!([{"SO4": [1800.0, 1.0]}])).unwrap_err();
        assert!(err.to_string().contains("SO4"));
    }

    #[test]
    fn fractal_parameters_round_trip() {
        let mut data = sulfate_and_water();
        assert_eq!(data.frac_dim(), 3.0);
        data.set_frac_dim(2.4);
        assert_eq!(data.frac_dim(), 2.4);
        data.set_prime_radius(1e-9);
        assert_eq!(data.prime_radius(), 1e-9);
    }

    #[test]
    fn spherical_geometry_inverts() {
        let data = sulfate_and_water();
        let vol = data.rad2vol(1e-7);
        assert!((data.vol2rad(vol) - 1e-7).abs() < 1e-18);
        assert!((data.vol2diam(data.diam2vol(2e-7)) - 2e-7).abs() < 1e-18);
    }
}
