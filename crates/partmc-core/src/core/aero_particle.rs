//! A single aerosol particle.

use crate::boundary::{check_dim, check_index, get_f64, get_i32, read_f64_array, to_foreign_index};
use crate::core::aero_data::AeroData;
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use partmc_sys as sys;
use std::ffi::c_void;

/// One particle: per-species constituent volumes plus an engine-assigned id.
///
/// Borrows the [`AeroData`] it was constructed against, so the species table
/// cannot be dropped while particles still refer to it.
#[derive(Debug)]
pub struct AeroParticle<'a> {
    handle: ForeignHandle,
    aero_data: &'a AeroData,
}

impl<'a> AeroParticle<'a> {
    /// Builds a particle from per-species volumes; the array length must be
    /// the species dimension.
    pub fn new(aero_data: &'a AeroData, vols: &[f64]) -> PartMcResult<Self> {
        check_dim("particle constituent volumes", aero_data.len(), vols.len())?;
        let mut handle =
            ForeignHandle::acquire(sys::f_aero_particle_ctor, sys::f_aero_particle_dtor)?;
        let n = vols.len() as i32;
        unsafe {
            sys::f_aero_particle_init(handle.borrow_mut(), aero_data.as_ptr(), vols.as_ptr(), &n)
        };
        Ok(AeroParticle { handle, aero_data })
    }

    /// Wraps a handle the engine filled by copying out of an aerosol state.
    pub(crate) fn from_handle(handle: ForeignHandle, aero_data: &'a AeroData) -> Self {
        AeroParticle { handle, aero_data }
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    pub fn n_spec(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_particle_n_spec(self.handle.borrow(), p) }) as usize
    }

    /// Per-species constituent volumes.
    pub fn volumes(&self) -> Vec<f64> {
        read_f64_array(
            || self.n_spec(),
            |buf, n| unsafe { sys::f_aero_particle_volumes(self.handle.borrow(), buf, n) },
        )
    }

    /// Total particle volume.
    pub fn volume(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_particle_volume(self.handle.borrow(), p) })
    }

    /// Constituent volume of the species at host index `i`.
    pub fn species_volume(&self, i: usize) -> PartMcResult<f64> {
        check_index(i, self.n_spec())?;
        let f_idx = to_foreign_index(i);
        Ok(get_f64(|p| unsafe {
            sys::f_aero_particle_species_volume(self.handle.borrow(), &f_idx, p)
        }))
    }

    /// Constituent volume by species name.
    pub fn species_volume_by_name(&self, name: &str) -> PartMcResult<f64> {
        let i = self.aero_data.spec_by_name(name)?;
        self.species_volume(i)
    }

    pub fn radius(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_particle_radius(self.handle.borrow(), p) })
    }

    pub fn diameter(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_particle_diameter(self.handle.borrow(), p) })
    }

    /// Diameter with any water volume excluded.
    pub fn dry_diameter(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_particle_dry_diameter(self.handle.borrow(), p) })
    }

    pub fn mass(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_particle_mass(self.handle.borrow(), p) })
    }

    pub fn species_mass(&self, i: usize) -> PartMcResult<f64> {
        check_index(i, self.n_spec())?;
        let f_idx = to_foreign_index(i);
        Ok(get_f64(|p| unsafe {
            sys::f_aero_particle_species_mass(self.handle.borrow(), &f_idx, p)
        }))
    }

    pub fn species_masses(&self) -> Vec<f64> {
        read_f64_array(
            || self.n_spec(),
            |buf, n| unsafe { sys::f_aero_particle_species_masses(self.handle.borrow(), buf, n) },
        )
    }

    /// Average density (total mass over total volume).
    pub fn density(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_particle_density(self.handle.borrow(), p) })
    }

    /// Engine-assigned particle id.
    pub fn id(&self) -> i32 {
        get_i32(|p| unsafe { sys::f_aero_particle_id(self.handle.borrow(), p) })
    }

    /// Replaces all constituent volumes; dim-checked like the constructor.
    pub fn set_vols(&mut self, vols: &[f64]) -> PartMcResult<()> {
        check_dim("particle constituent volumes", self.n_spec(), vols.len())?;
        let n = vols.len() as i32;
        unsafe { sys::f_aero_particle_set_vols(self.handle.borrow_mut(), vols.as_ptr(), &n) };
        Ok(())
    }

    /// Zeroes every constituent volume.
    pub fn zero(&mut self) {
        unsafe { sys::f_aero_particle_zero(self.handle.borrow_mut()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PartMcError;
    use serde_json::json;

    fn aero_data() -> AeroData {
        AeroData::from_json(&json!([
            {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
            {"H2O": [1000.0, 0.0, 18e-3, 0.0]},
        ]))
        .unwrap()
    }

    #[test]
    fn volumes_and_masses() {
        let data = aero_data();
        let particle = AeroParticle::new(&data, &[2e-21, 1e-21]).unwrap();
        assert_eq!(particle.n_spec(), 2);
        assert_eq!(particle.volumes(), vec![2e-21, 1e-21]);
        assert!((particle.volume() - 3e-21).abs() < 1e-30);
        assert_eq!(particle.species_volume(1).unwrap(), 1e-21);
        assert_eq!(particle.species_volume_by_name("H2O").unwrap(), 1e-21);
        // masses are volume * density per species
        let masses = particle.species_masses();
        assert!((masses[0] - 2e-21 * 1800.0).abs() < 1e-30);
        assert!((particle.mass() - (masses[0] + masses[1])).abs() < 1e-30);
        assert!((particle.density() - particle.mass() / particle.volume()).abs() < 1e-12);
    }

    #[test]
    fn ctor_is_dim_checked() {
        let data = aero_data();
        assert!(matches!(
            AeroParticle::new(&data, &[1e-21]),
            Err(PartMcError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn set_vols_and_zero() {
        let data = aero_data();
        let mut particle = AeroParticle::new(&data, &[2e-21, 1e-21]).unwrap();
        assert!(particle.set_vols(&[1e-21]).is_err());
        particle.set_vols(&[4e-21, 0.0]).unwrap();
        assert_eq!(particle.volumes(), vec![4e-21, 0.0]);
        particle.zero();
        assert_eq!(particle.volume(), 0.0);
    }

    #[test]
    fn dry_diameter_excludes_water() {
        let data = aero_data();
        let dry = AeroParticle::new(&data, &[2e-21, 0.0]).unwrap();
        let wet = AeroParticle::new(&data, &[2e-21, 1e-21]).unwrap();
        assert!(wet.diameter() > dry.diameter());
        assert!((wet.dry_diameter() - dry.diameter()).abs() < 1e-15);
    }
}
