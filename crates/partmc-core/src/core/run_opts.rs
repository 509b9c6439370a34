//! Solver option blocks.

use crate::boundary::get_f64;
use crate::config::ConfigDocument;
use crate::core::env_state::EnvState;
use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use crate::schema::{Schema, ValueKind};
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;

const RUN_PART_SCHEMA: Schema = Schema {
    required: &[("t_max", ValueKind::Number), ("del_t", ValueKind::Number)],
    optional: &[
        ("output_prefix", ValueKind::String),
        ("rand_init", ValueKind::Integer),
        ("do_coagulation", ValueKind::Bool),
    ],
};

const RUN_SECT_SCHEMA: Schema = Schema {
    required: &[("t_max", ValueKind::Number), ("del_t", ValueKind::Number)],
    optional: &[("output_prefix", ValueKind::String)],
};

const RUN_EXACT_SCHEMA: Schema = Schema {
    required: &[("t_max", ValueKind::Number)],
    optional: &[("output_prefix", ValueKind::String)],
};

/// Options for the particle-resolved solver.
#[derive(Debug)]
pub struct RunPartOpt {
    handle: ForeignHandle,
}

impl RunPartOpt {
    pub fn from_json(value: &Value) -> PartMcResult<Self> {
        let doc = ConfigDocument::from_value(value)?;
        RUN_PART_SCHEMA.validate(&doc)?;
        let t_max = doc.require_f64("t_max")?;
        let del_t = doc.require_f64("del_t")?;
        let rand_init = doc.get("rand_init").and_then(Value::as_i64);

        let mut handle =
            ForeignHandle::acquire(sys::f_run_part_opt_ctor, sys::f_run_part_opt_dtor)?;
        unsafe { sys::f_run_part_opt_init(handle.borrow_mut(), &t_max, &del_t) };
        if let Some(seed) = rand_init {
            let seed = seed as i32;
            unsafe { sys::f_rand_init(&seed) };
        }
        doc.finish()?;
        Ok(RunPartOpt { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    pub fn t_max(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_run_part_opt_t_max(self.handle.borrow(), p) })
    }

    pub fn del_t(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_run_part_opt_del_t(self.handle.borrow(), p) })
    }
}

/// Options for the sectional solver.
#[derive(Debug)]
pub struct RunSectOpt {
    handle: ForeignHandle,
}

impl RunSectOpt {
    pub fn from_json(value: &Value, env_state: &EnvState) -> PartMcResult<Self> {
        let doc = ConfigDocument::from_value(value)?;
        RUN_SECT_SCHEMA.validate(&doc)?;
        let t_max = doc.require_f64("t_max")?;
        let del_t = doc.require_f64("del_t")?;

        let mut handle =
            ForeignHandle::acquire(sys::f_run_sect_opt_ctor, sys::f_run_sect_opt_dtor)?;
        unsafe {
            sys::f_run_sect_opt_init(handle.borrow_mut(), env_state.as_ptr(), &t_max, &del_t)
        };
        doc.finish()?;
        Ok(RunSectOpt { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    pub fn t_max(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_run_sect_opt_t_max(self.handle.borrow(), p) })
    }

    pub fn del_t(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_run_sect_opt_del_t(self.handle.borrow(), p) })
    }
}

/// Options for the exact-solution solver.
#[derive(Debug)]
pub struct RunExactOpt {
    handle: ForeignHandle,
}

impl RunExactOpt {
    pub fn from_json(value: &Value, env_state: &EnvState) -> PartMcResult<Self> {
        let doc = ConfigDocument::from_value(value)?;
        RUN_EXACT_SCHEMA.validate(&doc)?;
        let t_max = doc.require_f64("t_max")?;

        let mut handle =
            ForeignHandle::acquire(sys::f_run_exact_opt_ctor, sys::f_run_exact_opt_dtor)?;
        unsafe { sys::f_run_exact_opt_init(handle.borrow_mut(), env_state.as_ptr(), &t_max) };
        doc.finish()?;
        Ok(RunExactOpt { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    pub fn t_max(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_run_exact_opt_t_max(self.handle.borrow(), p) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PartMcError;
    use serde_json::json;

    fn env_state() -> EnvState {
        EnvState::from_json(&json!({
            "rel_humidity": 0.5,
            "latitude": 0.0,
            "longitude": 0.0,
            "altitude": 0.0,
            "start_time": 0.0,
            "start_day": 1,
        }))
        .unwrap()
    }

    #[test]
    fn part_opt_round_trip() {
        let opt = RunPartOpt::from_json(&json!({
            "t_max": 86400.0,
            "del_t": 60.0,
            "rand_init": 44,
        }))
        .unwrap();
        assert_eq!(opt.t_max(), 86400.0);
        assert_eq!(opt.del_t(), 60.0);
    }

    #[test]
    fn part_opt_requires_del_t() {
        let err = RunPartOpt::from_json(&json!({"t_max": 3600.0})).unwrap_err();
        assert!(err.to_string().contains("del_t"));
    }

    #[test]
    fn sect_and_exact_opts() {
        let env = env_state();
        let sect =
            RunSectOpt::from_json(&json!({"t_max": 3600.0, "del_t": 10.0}), &env).unwrap();
        assert_eq!(sect.t_max(), 3600.0);
        assert_eq!(sect.del_t(), 10.0);

        let exact = RunExactOpt::from_json(&json!({"t_max": 3600.0}), &env).unwrap();
        assert_eq!(exact.t_max(), 3600.0);
    }

    #[test]
    fn stray_key_reported() {
        assert!(matches!(
            RunPartOpt::from_json(&json!({"t_max": 1.0, "del_t": 1.0, "t_mxa": 2.0})),
            Err(PartMcError::UnconsumedKeys(_))
        ));
    }
}
