//! Simulation scenario: prescribed profiles and aerosol source terms.

use crate::boundary::{get_i32, read_f64_array};
use crate::config::{parse_profile, ConfigDocument};
use crate::core::env_state::EnvState;
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use crate::schema::{Schema, ValueKind};
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;

const SCENARIO_SCHEMA: Schema = Schema {
    required: &[
        ("temp_profile", ValueKind::Array),
        ("pressure_profile", ValueKind::Array),
        ("height_profile", ValueKind::Array),
    ],
    optional: &[
        ("aero_emissions", ValueKind::Array),
        ("aero_dilution", ValueKind::Array),
    ],
};

/// Time profiles of temperature, pressure and mixing height, plus optional
/// aerosol emission and dilution set-points.
#[derive(Debug)]
pub struct Scenario {
    handle: ForeignHandle,
}

impl Scenario {
    /// Builds a scenario from a JSON document. Each profile is a pair of
    /// single-key mappings (`time` first) with equal-length arrays; all
    /// profiles are parsed and length-checked before the engine-side
    /// scenario exists.
    pub fn from_json(value: &Value) -> PartMcResult<Self> {
        let doc = ConfigDocument::from_value(value)?;
        SCENARIO_SCHEMA.validate(&doc)?;

        let temp = parse_profile(doc.require("temp_profile")?, "temp", "temp_profile")?;
        let pressure = parse_profile(
            doc.require("pressure_profile")?,
            "pressure",
            "pressure_profile",
        )?;
        let height = parse_profile(doc.require("height_profile")?, "height", "height_profile")?;
        let emissions = doc
            .get("aero_emissions")
            .map(|v| parse_profile(v, "rate_scale", "aero_emissions"))
            .transpose()?;
        let dilution = doc
            .get("aero_dilution")
            .map(|v| parse_profile(v, "rate", "aero_dilution"))
            .transpose()?;

        let mut handle = ForeignHandle::acquire(sys::f_scenario_ctor, sys::f_scenario_dtor)?;
        let set = |f: unsafe extern "C" fn(*mut c_void, *const f64, *const f64, *const i32),
                   ptr: *mut c_void,
                   (times, vals): &(Vec<f64>, Vec<f64>)| {
            let n = times.len() as i32;
            unsafe { f(ptr, times.as_ptr(), vals.as_ptr(), &n) };
        };
        set(sys::f_scenario_set_temp_profile, handle.borrow_mut(), &temp);
        set(
            sys::f_scenario_set_pressure_profile,
            handle.borrow_mut(),
            &pressure,
        );
        set(
            sys::f_scenario_set_height_profile,
            handle.borrow_mut(),
            &height,
        );
        if let Some(profile) = &emissions {
            set(
                sys::f_scenario_set_aero_emissions,
                handle.borrow_mut(),
                profile,
            );
        }
        if let Some(profile) = &dilution {
            set(
                sys::f_scenario_set_aero_dilution,
                handle.borrow_mut(),
                profile,
            );
        }
        doc.finish()?;
        Ok(Scenario { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    /// Sets `env_state`'s temperature, pressure and height from the
    /// profiles interpolated at `time`.
    pub fn init_env_state(&self, env_state: &mut EnvState, time: f64) {
        unsafe {
            sys::f_scenario_init_env_state(self.handle.borrow(), env_state.as_mut_ptr(), &time)
        }
    }

    pub fn aero_emissions_n_times(&self) -> usize {
        get_i32(|p| unsafe { sys::f_scenario_emissions_n_times(self.handle.borrow(), p) }) as usize
    }

    pub fn aero_emissions_rate_scale(&self) -> Vec<f64> {
        read_f64_array(
            || self.aero_emissions_n_times(),
            |buf, n| unsafe { sys::f_scenario_emissions_rate_scale(self.handle.borrow(), buf, n) },
        )
    }

    pub fn aero_emissions_time(&self) -> Vec<f64> {
        read_f64_array(
            || self.aero_emissions_n_times(),
            |buf, n| unsafe { sys::f_scenario_emissions_time(self.handle.borrow(), buf, n) },
        )
    }

    pub fn aero_dilution_n_times(&self) -> usize {
        get_i32(|p| unsafe { sys::f_scenario_dilution_n_times(self.handle.borrow(), p) }) as usize
    }

    pub fn aero_dilution_rate(&self) -> Vec<f64> {
        read_f64_array(
            || self.aero_dilution_n_times(),
            |buf, n| unsafe { sys::f_scenario_dilution_rate(self.handle.borrow(), buf, n) },
        )
    }

    pub fn aero_dilution_time(&self) -> Vec<f64> {
        read_f64_array(
            || self.aero_dilution_n_times(),
            |buf, n| unsafe { sys::f_scenario_dilution_time(self.handle.borrow(), buf, n) },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PartMcError;
    use serde_json::json;

    fn scenario_doc() -> Value {
        json!({
            "temp_profile": [{"time": [0.0, 3600.0]}, {"temp": [290.0, 300.0]}],
            "pressure_profile": [{"time": [0.0]}, {"pressure": [101325.0]}],
            "height_profile": [{"time": [0.0, 3600.0]}, {"height": [100.0, 500.0]}],
            "aero_emissions": [{"time": [0.0, 1800.0]}, {"rate_scale": [1.0, 0.5]}],
            "aero_dilution": [{"time": [0.0]}, {"rate": [1.5e-5]}],
        })
    }

    #[test]
    fn profiles_reach_env_state() {
        let scenario = Scenario::from_json(&scenario_doc()).unwrap();
        let mut env = EnvState::from_json(&json!({
            "rel_humidity": 0.5,
            "latitude": 0.0,
            "longitude": 0.0,
            "altitude": 0.0,
            "start_time": 0.0,
            "start_day": 1,
        }))
        .unwrap();
        scenario.init_env_state(&mut env, 1800.0);
        assert_eq!(env.temp(), 295.0);
        assert_eq!(env.pressure(), 101325.0);
        assert_eq!(env.height(), 300.0);
        assert_eq!(env.elapsed_time(), 1800.0);
    }

    #[test]
    fn emission_and_dilution_set_points() {
        let scenario = Scenario::from_json(&scenario_doc()).unwrap();
        assert_eq!(scenario.aero_emissions_n_times(), 2);
        assert_eq!(scenario.aero_emissions_time(), vec![0.0, 1800.0]);
        assert_eq!(scenario.aero_emissions_rate_scale(), vec![1.0, 0.5]);
        assert_eq!(scenario.aero_dilution_n_times(), 1);
        assert_eq!(scenario.aero_dilution_rate(), vec![1.5e-5]);
    }

    #[test]
    fn profile_keys_are_checked() {
        let mut doc = scenario_doc();
        doc["temp_profile"] = json!([{"time": [0.0]}, {"temperature": [290.0]}]);
        assert!(Scenario::from_json(&doc).is_err());

        let mut doc = scenario_doc();
        doc["height_profile"] = json!([{"time": [0.0, 1.0]}, {"height": [100.0]}]);
        assert!(Scenario::from_json(&doc).is_err());
    }

    #[test]
    fn optional_source_terms_can_be_absent() {
        let mut doc = scenario_doc();
        doc.as_object_mut().unwrap().remove("aero_emissions");
        doc.as_object_mut().unwrap().remove("aero_dilution");
        let scenario = Scenario::from_json(&doc).unwrap();
        assert_eq!(scenario.aero_emissions_n_times(), 0);
        assert_eq!(scenario.aero_dilution_n_times(), 0);
    }

    #[test]
    fn stray_key_reported() {
        let mut doc = scenario_doc();
        doc["loss_function"] = json!("none");
        assert!(matches!(
            Scenario::from_json(&doc),
            Err(PartMcError::UnconsumedKeys(_))
        ));
    }
}
