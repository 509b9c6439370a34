//! Gas mixing ratios.

use crate::boundary::{check_dim, check_index, get_f64, get_i32, read_f64_array, to_foreign_index};
use crate::core::gas_data::GasData;
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;
use std::fmt;

/// Mixing ratios for every species in a [`GasData`] table.
///
/// Borrows the table it was sized against; the table defines both the array
/// dimension and the name→index lookup.
#[derive(Debug)]
pub struct GasState<'a> {
    handle: ForeignHandle,
    gas_data: &'a GasData,
}

impl<'a> GasState<'a> {
    /// An all-zero state sized to `gas_data`'s species dimension.
    pub fn new(gas_data: &'a GasData) -> PartMcResult<Self> {
        let mut handle = ForeignHandle::acquire(sys::f_gas_state_ctor, sys::f_gas_state_dtor)?;
        unsafe { sys::f_gas_state_init(handle.borrow_mut(), gas_data.as_ptr()) };
        Ok(GasState { handle, gas_data })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_void {
        self.handle.borrow_mut()
    }

    pub fn len(&self) -> usize {
        get_i32(|p| unsafe { sys::f_gas_state_len(self.handle.borrow(), p) }) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mixing ratio of the species at host index `i`.
    pub fn mix_rat(&self, i: usize) -> PartMcResult<f64> {
        check_index(i, self.len())?;
        let f_idx = to_foreign_index(i);
        Ok(get_f64(|p| unsafe {
            sys::f_gas_state_mix_rat(self.handle.borrow(), &f_idx, p)
        }))
    }

    /// Mixing ratio by species name.
    pub fn mix_rat_by_name(&self, name: &str) -> PartMcResult<f64> {
        let i = self.gas_data.spec_by_name(name)?;
        self.mix_rat(i)
    }

    pub fn set_item(&mut self, i: usize, val: f64) -> PartMcResult<()> {
        check_index(i, self.len())?;
        let f_idx = to_foreign_index(i);
        unsafe { sys::f_gas_state_set_item(self.handle.borrow_mut(), &f_idx, &val) };
        Ok(())
    }

    pub fn mix_rats(&self) -> Vec<f64> {
        read_f64_array(
            || self.len(),
            |buf, n| unsafe { sys::f_gas_state_mix_rats(self.handle.borrow(), buf, n) },
        )
    }

    /// Replaces all mixing ratios; the array must match the species
    /// dimension.
    pub fn set_mix_rats(&mut self, vals: &[f64]) -> PartMcResult<()> {
        check_dim("gas mixing ratios", self.len(), vals.len())?;
        let n = vals.len() as i32;
        unsafe { sys::f_gas_state_set_mix_rats(self.handle.borrow_mut(), vals.as_ptr(), &n) };
        Ok(())
    }
}

impl fmt::Display for GasState<'_> {
    /// Renders the state as a JSON mapping of species name to mixing ratio.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.gas_data.species().map_err(|_| fmt::Error)?;
        let map: serde_json::Map<String, Value> = names
            .into_iter()
            .zip(self.mix_rats())
            .map(|(name, val)| (name, val.into()))
            .collect();
        write!(f, "{}", Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PartMcError;
    use serde_json::json;

    fn gas_data() -> GasData {
        GasData::from_json(&json!(["SO2", "NO2", "O3"])).unwrap()
    }

    #[test]
    fn mix_rats_round_trip() {
        let data = gas_data();
        let mut state = GasState::new(&data).unwrap();
        assert_eq!(state.len(), 3);
        assert_eq!(state.mix_rats(), vec![0.0, 0.0, 0.0]);

        state.set_mix_rats(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(state.mix_rats(), vec![0.1, 0.2, 0.3]);
        assert_eq!(state.mix_rat(1).unwrap(), 0.2);
        assert_eq!(state.mix_rat_by_name("O3").unwrap(), 0.3);

        state.set_item(0, 0.7).unwrap();
        assert_eq!(state.mix_rat(0).unwrap(), 0.7);
    }

    #[test]
    fn wrong_length_set_rejected() {
        let data = gas_data();
        let mut state = GasState::new(&data).unwrap();
        assert!(matches!(
            state.set_mix_rats(&[0.1, 0.2]),
            Err(PartMcError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            state.set_item(7, 0.1),
            Err(PartMcError::OutOfRange { .. })
        ));
    }

    #[test]
    fn display_maps_names_to_values() {
        let data = gas_data();
        let mut state = GasState::new(&data).unwrap();
        state.set_mix_rats(&[0.1, 0.0, 0.3]).unwrap();
        assert_eq!(state.to_string(), r#"{"SO2":0.1,"NO2":0.0,"O3":0.3}"#);
    }
}
