//! Particle-resolved aerosol population.

use crate::boundary::{check_index, get_f64, get_i32, read_f64_array, read_i32_array, to_foreign_index};
use crate::core::aero_data::AeroData;
use crate::core::aero_dist::AeroDist;
use crate::core::aero_particle::AeroParticle;
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use crate::variant::VariantSet;
use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use partmc_sys as sys;
use std::ffi::c_void;
use tracing::debug;

/// Particle weighting scheme of an [`AeroState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum WeightKind {
    Flat = 1,
    FlatSource = 2,
    NumMass = 3,
    NumMassSource = 4,
}

impl VariantSet for WeightKind {
    const NAMES: &'static [&'static str] = &["flat", "flat_source", "nummass", "nummass_source"];
}

bitflags! {
    /// Population-control switches for [`AeroState::dist_sample`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SampleFlags: u32 {
        const ALLOW_DOUBLING = 1;
        const ALLOW_HALVING = 2;
    }
}

/// The computational particle population.
///
/// Borrows the [`AeroData`] it was initialized against; particles copied out
/// via [`particle`](AeroState::particle) borrow the same table.
#[derive(Debug)]
pub struct AeroState<'a> {
    handle: ForeignHandle,
    aero_data: &'a AeroData,
}

impl<'a> AeroState<'a> {
    /// An empty population with the target computational particle count
    /// `n_part` and the named weighting scheme.
    pub fn new(aero_data: &'a AeroData, n_part: f64, weighting: &str) -> PartMcResult<Self> {
        let weighting = WeightKind::from_name(weighting)?;
        let mut handle = ForeignHandle::acquire(sys::f_aero_state_ctor, sys::f_aero_state_dtor)?;
        let class = weighting.code();
        unsafe {
            sys::f_aero_state_init(handle.borrow_mut(), aero_data.as_ptr(), &n_part, &class)
        };
        Ok(AeroState { handle, aero_data })
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_void {
        self.handle.borrow_mut()
    }

    /// Number of computational particles.
    pub fn len(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_state_len(self.handle.borrow(), p) }) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_num_conc(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_state_total_num_conc(self.handle.borrow(), p) })
    }

    pub fn total_mass_conc(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_state_total_mass_conc(self.handle.borrow(), p) })
    }

    /// Per-particle number concentrations.
    pub fn num_concs(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_state_num_concs(self.handle.borrow(), buf, n) },
        )
    }

    pub fn masses(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_state_masses(self.handle.borrow(), buf, n) },
        )
    }

    pub fn diameters(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_state_diameters(self.handle.borrow(), buf, n) },
        )
    }

    pub fn dry_diameters(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_state_dry_diameters(self.handle.borrow(), buf, n) },
        )
    }

    /// Engine-assigned particle ids, in population order.
    pub fn ids(&self) -> Vec<i32> {
        read_i32_array(
            || self.len(),
            |buf, n| unsafe { sys::f_aero_state_ids(self.handle.borrow(), buf, n) },
        )
    }

    /// Deep copy of the particle at host index `i`.
    pub fn particle(&self, i: usize) -> PartMcResult<AeroParticle<'a>> {
        check_index(i, self.len())?;
        let mut handle =
            ForeignHandle::acquire(sys::f_aero_particle_ctor, sys::f_aero_particle_dtor)?;
        let f_idx = to_foreign_index(i);
        unsafe { sys::f_aero_state_particle(self.handle.borrow(), &f_idx, handle.borrow_mut()) };
        Ok(AeroParticle::from_handle(handle, self.aero_data))
    }

    /// Copies a particle into the population; the engine assigns a fresh id.
    pub fn add_particle(&mut self, particle: &AeroParticle<'_>) {
        unsafe { sys::f_aero_state_add_particle(self.handle.borrow_mut(), particle.as_ptr()) }
    }

    pub fn remove_particle(&mut self, i: usize) -> PartMcResult<()> {
        check_index(i, self.len())?;
        let f_idx = to_foreign_index(i);
        unsafe { sys::f_aero_state_remove_particle(self.handle.borrow_mut(), &f_idx) };
        Ok(())
    }

    /// Removes every particle.
    pub fn zero(&mut self) {
        unsafe { sys::f_aero_state_zero(self.handle.borrow_mut()) }
    }

    /// Zeroes the water content of every particle.
    pub fn make_dry(&mut self) {
        unsafe { sys::f_aero_state_make_dry(self.handle.borrow_mut()) }
    }

    /// Samples particles from `dist` into the population and returns how
    /// many were added.
    pub fn dist_sample(
        &mut self,
        dist: &AeroDist,
        sample_prop: f64,
        create_time: f64,
        flags: SampleFlags,
    ) -> usize {
        let allow_doubling = flags.contains(SampleFlags::ALLOW_DOUBLING) as i32;
        let allow_halving = flags.contains(SampleFlags::ALLOW_HALVING) as i32;
        let n_added = get_i32(|p| unsafe {
            sys::f_aero_state_dist_sample(
                self.handle.borrow_mut(),
                dist.as_ptr(),
                &sample_prop,
                &create_time,
                &allow_doubling,
                &allow_halving,
                p,
            )
        });
        debug!(n_added, "sampled particles from distribution");
        n_added as usize
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
    fn population_ops() {
        let data = aero_data();
        let mut state = AeroState::new(&data, 100.0, "flat").unwrap();
        assert!(state.is_empty());

        let particle = AeroParticle::new(&data, &[2e-21, 1e-21]).unwrap();
        state.add_particle(&particle);
        state.add_particle(&particle);
        assert_eq!(state.len(), 2);
        assert_eq!(state.num_concs(), vec![1.0, 1.0]);
        assert_eq!(state.masses().len(), 2);

        // ids are engine-assigned and distinct
        let ids = state.ids();
        assert_ne!(ids[0], ids[1]);

        let copy = state.particle(1).unwrap();
        assert_eq!(copy.volumes(), vec![2e-21, 1e-21]);
        assert_eq!(copy.id(), ids[1]);

        state.remove_particle(0).unwrap();
        assert_eq!(state.len(), 1);
        assert!(matches!(
            state.remove_particle(5),
            Err(PartMcError::OutOfRange { .. })
        ));

        state.make_dry();
        assert_eq!(state.particle(0).unwrap().volumes(), vec![2e-21, 0.0]);

        state.zero();
        assert!(state.is_empty());
    }

    #[test]
    fn dist_sample_populates() {
        let mut data = aero_data();
        let dist = AeroDist::from_json(
            &mut data,
            &json!([{"m": {
                "mass_frac": [{"SO4": [1.0]}],
                "mode_type": "mono",
                "num_conc": 1e9,
                "diam_at_mean_vol": 1e-7,
            }}]),
        )
        .unwrap();
        let mut state = AeroState::new(&data, 10.0, "nummass_source").unwrap();
        let added = state.dist_sample(&dist, 1.0, 0.0, SampleFlags::ALLOW_DOUBLING);
        assert!(added > 0);
        assert_eq!(state.len(), added);
        assert!(state.total_mass_conc() > 0.0);
    }

    #[test]
    fn weighting_names() {
        for name in WeightKind::NAMES {
            assert_eq!(WeightKind::from_name(name).unwrap().name(), *name);
        }
        let data = aero_data();
        assert!(matches!(
            AeroState::new(&data, 1.0, "heavy"),
            Err(PartMcError::UnknownVariantName(_))
        ));
    }
}
