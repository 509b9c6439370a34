//! Environment state: temperature, pressure, humidity and friends.

use crate::boundary::get_f64;
use crate::config::ConfigDocument;
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use crate::schema::{Schema, ValueKind};
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;

const ENV_STATE_SCHEMA: Schema = Schema {
    required: &[
        ("rel_humidity", ValueKind::Number),
        ("latitude", ValueKind::Number),
        ("longitude", ValueKind::Number),
        ("altitude", ValueKind::Number),
        ("start_time", ValueKind::Number),
        ("start_day", ValueKind::Integer),
    ],
    optional: &[],
};

/// The scalar environment the solvers advance: temperature, pressure,
/// relative humidity, mixing height and elapsed time.
#[derive(Debug)]
pub struct EnvState {
    handle: ForeignHandle,
}

impl EnvState {
    /// Builds the state from a JSON document; temperature, pressure and
    /// height start unset and are normally filled in by
    /// [`Scenario::init_env_state`](crate::core::scenario::Scenario::init_env_state).
    pub fn from_json(value: &Value) -> PartMcResult<Self> {
        let doc = ConfigDocument::from_value(value)?;
        ENV_STATE_SCHEMA.validate(&doc)?;
        let rel_humidity = doc.require_f64("rel_humidity")?;
        let latitude = doc.require_f64("latitude")?;
        let longitude = doc.require_f64("longitude")?;
        let altitude = doc.require_f64("altitude")?;
        let start_time = doc.require_f64("start_time")?;
        let start_day = doc.require_i64("start_day")? as i32;

        let mut handle = ForeignHandle::acquire(sys::f_env_state_ctor, sys::f_env_state_dtor)?;
        unsafe {
            sys::f_env_state_init(
                handle.borrow_mut(),
                &rel_humidity,
                &latitude,
                &longitude,
                &altitude,
                &start_time,
                &start_day,
            )
        };
        doc.finish()?;
        Ok(EnvState { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_void {
        self.handle.borrow_mut()
    }

    pub fn set_temperature(&mut self, val: f64) {
        unsafe { sys::f_env_state_set_temperature(self.handle.borrow_mut(), &val) }
    }

    pub fn temp(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_env_state_get_temp(self.handle.borrow(), p) })
    }

    pub fn rh(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_env_state_get_rel_humid(self.handle.borrow(), p) })
    }

    pub fn height(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_env_state_get_height(self.handle.borrow(), p) })
    }

    pub fn set_height(&mut self, val: f64) {
        unsafe { sys::f_env_state_set_height(self.handle.borrow_mut(), &val) }
    }

    pub fn pressure(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_env_state_get_pressure(self.handle.borrow(), p) })
    }

    pub fn set_pressure(&mut self, val: f64) {
        unsafe { sys::f_env_state_set_pressure(self.handle.borrow_mut(), &val) }
    }

    /// Dry-air density at the current temperature and pressure.
    pub fn air_density(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_env_state_air_density(self.handle.borrow(), p) })
    }

    pub fn elapsed_time(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_env_state_get_elapsed_time(self.handle.borrow(), p) })
    }

    pub fn start_time(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_env_state_get_start_time(self.handle.borrow(), p) })
    }

    pub fn additive_kernel_coefficient(&self) -> f64 {
        get_f64(|p| unsafe {
            sys::f_env_state_get_additive_kernel_coefficient(self.handle.borrow(), p)
        })
    }

    pub fn set_additive_kernel_coefficient(&mut self, val: f64) {
        unsafe { sys::f_env_state_set_additive_kernel_coefficient(self.handle.borrow_mut(), &val) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PartMcError;
    use serde_json::json;

    pub(crate) fn env_doc() -> Value {
        json!({
            "rel_humidity": 0.8,
            "latitude": 40.0,
            "longitude": -88.0,
            "altitude": 0.0,
            "start_time": 21600.0,
            "start_day": 200,
        })
    }

    #[test]
    fn construction_and_scalars() {
        let mut env = EnvState::from_json(&env_doc()).unwrap();
        assert_eq!(env.rh(), 0.8);
        assert_eq!(env.start_time(), 21600.0);
        assert_eq!(env.elapsed_time(), 0.0);

        env.set_temperature(298.15);
        env.set_pressure(101325.0);
        env.set_height(500.0);
        assert_eq!(env.temp(), 298.15);
        assert_eq!(env.pressure(), 101325.0);
        assert_eq!(env.height(), 500.0);

        // ideal-gas dry air at surface conditions is about 1.2 kg/m^3
        let rho = env.air_density();
        assert!((1.0..1.4).contains(&rho), "air density {rho}");

        assert_eq!(env.additive_kernel_coefficient(), 1.0);
        env.set_additive_kernel_coefficient(1500.0);
        assert_eq!(env.additive_kernel_coefficient(), 1500.0);
    }

    #[test]
    fn missing_key_names_it() {
        let mut doc = env_doc();
        doc.as_object_mut().unwrap().remove("latitude");
        let err = EnvState::from_json(&doc).unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn stray_key_reported() {
        let mut doc = env_doc();
        doc["spin"] = json!(1);
        assert!(matches!(
            EnvState::from_json(&doc),
            Err(PartMcError::UnconsumedKeys(_))
        ));
    }
}
