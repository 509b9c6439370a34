//! One mode of an aerosol size distribution.

use crate::boundary::{check_dim, get_f64, get_i32, read_f64_array, read_string, str_arg};
use crate::config::{f64_array, single_key_entries, unique_keys, ConfigDocument};
use crate::core::aero_data::AeroData;
use crate::core::bin_grid::BinGrid;
use crate::errors::{PartMcError, PartMcResult};
use crate::handle::ForeignHandle;
use crate::variant::VariantSet;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;
use tracing::debug;

/// Shape of a size-distribution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum ModeType {
    LogNormal = 1,
    Exp = 2,
    Mono = 3,
    Sampled = 4,
}

impl VariantSet for ModeType {
    const NAMES: &'static [&'static str] = &["log_normal", "exp", "mono", "sampled"];
}

/// A single mode: composition (per-species volume fractions) plus one of the
/// four size-distribution shapes.
#[derive(Debug)]
pub struct AeroMode {
    handle: ForeignHandle,
}

/// Validated construction parameters, extracted from the document before the
/// engine-side mode exists.
struct ModeParams {
    name: String,
    vol_frac: Vec<f64>,
    shape: ModeShape,
}

enum ModeShape {
    LogNormal {
        num_conc: f64,
        geom_mean_diam: f64,
        log10_geom_std_dev: f64,
    },
    ExpOrMono {
        mode_type: ModeType,
        num_conc: f64,
        diam_at_mean_vol: f64,
    },
    Sampled {
        diam: Vec<f64>,
        num_conc: Vec<f64>,
    },
}

impl AeroMode {
    /// An empty mode sized to `aero_data`'s species dimension.
    pub fn new(aero_data: &AeroData) -> PartMcResult<Self> {
        let mut handle = ForeignHandle::acquire(sys::f_aero_mode_ctor, sys::f_aero_mode_dtor)?;
        unsafe { sys::f_aero_mode_init(handle.borrow_mut(), aero_data.as_ptr()) };
        Ok(AeroMode { handle })
    }

    /// Builds a mode from a `{name: {params}}` document.
    ///
    /// Every schema and cross-field check runs before the engine-side mode
    /// is created, so a rejected document makes no mode constructor call.
    /// The mode name is registered as a particle source in `aero_data`.
    pub fn from_json(aero_data: &mut AeroData, value: &Value) -> PartMcResult<Self> {
        let (name, params) = ConfigDocument::single_entry(value)?;
        let parsed = check_mode_params(aero_data, name, &params)?;

        let mut mode = AeroMode::new(aero_data)?;
        mode.apply(parsed)?;
        params.finish()?;
        // only a fully-accepted mode becomes a particle source
        aero_data.register_source(&mode.name()?);
        Ok(mode)
    }

    fn apply(&mut self, params: ModeParams) -> PartMcResult<()> {
        self.set_name(&params.name);
        self.set_vol_frac(&params.vol_frac)?;
        match params.shape {
            ModeShape::LogNormal {
                num_conc,
                geom_mean_diam,
                log10_geom_std_dev,
            } => {
                self.set_typ(ModeType::LogNormal);
                self.set_num_conc(num_conc);
                self.set_char_radius(geom_mean_diam / 2.0);
                self.set_gsd(10f64.powf(log10_geom_std_dev));
            }
            ModeShape::ExpOrMono {
                mode_type,
                num_conc,
                diam_at_mean_vol,
            } => {
                self.set_typ(mode_type);
                self.set_num_conc(num_conc);
                self.set_char_radius(diam_at_mean_vol / 2.0);
            }
            ModeShape::Sampled { diam, num_conc } => {
                self.set_sampled(&diam, &num_conc)?;
            }
        }
        debug!(name = %params.name, "aerosol mode ready");
        Ok(())
    }

    /// Wraps a freshly-acquired handle the engine is about to fill (deep
    /// copies out of an [`AeroDist`](crate::core::aero_dist::AeroDist)).
    pub(crate) fn from_handle(handle: ForeignHandle) -> Self {
        AeroMode { handle }
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    /// Species dimension the composition arrays are sized to.
    pub fn n_spec(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_mode_get_n_spec(self.handle.borrow(), p) }) as usize
    }

    pub fn num_conc(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_mode_get_num_conc(self.handle.borrow(), p) })
    }

    pub fn set_num_conc(&mut self, val: f64) {
        unsafe { sys::f_aero_mode_set_num_conc(self.handle.borrow_mut(), &val) }
    }

    pub fn vol_frac(&self) -> Vec<f64> {
        read_f64_array(
            || self.n_spec(),
            |buf, n| unsafe { sys::f_aero_mode_get_vol_frac(self.handle.borrow(), buf, n) },
        )
    }

    /// Per-species volume fractions; must match the species dimension.
    pub fn set_vol_frac(&mut self, vals: &[f64]) -> PartMcResult<()> {
        check_dim("mode volume fractions", self.n_spec(), vals.len())?;
        let n = vals.len() as i32;
        unsafe { sys::f_aero_mode_set_vol_frac(self.handle.borrow_mut(), vals.as_ptr(), &n) };
        Ok(())
    }

    pub fn vol_frac_std(&self) -> Vec<f64> {
        read_f64_array(
            || self.n_spec(),
            |buf, n| unsafe { sys::f_aero_mode_get_vol_frac_std(self.handle.borrow(), buf, n) },
        )
    }

    pub fn set_vol_frac_std(&mut self, vals: &[f64]) -> PartMcResult<()> {
        check_dim("mode volume fraction spreads", self.n_spec(), vals.len())?;
        let n = vals.len() as i32;
        unsafe { sys::f_aero_mode_set_vol_frac_std(self.handle.borrow_mut(), vals.as_ptr(), &n) };
        Ok(())
    }

    pub fn char_radius(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_mode_get_char_radius(self.handle.borrow(), p) })
    }

    pub fn set_char_radius(&mut self, val: f64) {
        unsafe { sys::f_aero_mode_set_char_radius(self.handle.borrow_mut(), &val) }
    }

    /// Geometric standard deviation (log-normal modes).
    pub fn gsd(&self) -> f64 {
        get_f64(|p| unsafe { sys::f_aero_mode_get_gsd(self.handle.borrow(), p) })
    }

    pub fn set_gsd(&mut self, val: f64) {
        unsafe { sys::f_aero_mode_set_gsd(self.handle.borrow_mut(), &val) }
    }

    /// The mode shape, decoded from the engine's type code.
    pub fn typ(&self) -> PartMcResult<ModeType> {
        let code = get_i32(|p| unsafe { sys::f_aero_mode_get_type(self.handle.borrow(), p) });
        ModeType::from_code(code)
    }

    pub fn set_typ(&mut self, typ: ModeType) {
        let code = typ.code();
        unsafe { sys::f_aero_mode_set_type(self.handle.borrow_mut(), &code) }
    }

    pub fn name(&self) -> PartMcResult<String> {
        read_string(
            || get_i32(|p| unsafe { sys::f_aero_mode_get_name_size(self.handle.borrow(), p) }) as usize,
            |buf, n| unsafe { sys::f_aero_mode_get_name(self.handle.borrow(), buf, n) },
        )
    }

    pub fn set_name(&mut self, name: &str) {
        let (ptr, len) = str_arg(name);
        unsafe { sys::f_aero_mode_set_name(self.handle.borrow_mut(), ptr, &len) }
    }

    /// Switches the mode to a sampled distribution. `diam` holds bin edges,
    /// so it must be exactly one longer than `num_conc`.
    pub fn set_sampled(&mut self, diam: &[f64], num_conc: &[f64]) -> PartMcResult<()> {
        check_dim("sampled size distribution edges", num_conc.len() + 1, diam.len())?;
        let n_diam = diam.len() as i32;
        unsafe {
            sys::f_aero_mode_set_sampled(
                self.handle.borrow_mut(),
                diam.as_ptr(),
                num_conc.as_ptr(),
                &n_diam,
            )
        };
        Ok(())
    }

    /// Number of sample bins of a sampled mode.
    pub fn sample_n_bin(&self) -> usize {
        get_i32(|p| unsafe { sys::f_aero_mode_get_sample_n_bin(self.handle.borrow(), p) }) as usize
    }

    /// Sample bin edge radii; one more than the sample bin count. Empty on
    /// a mode that has no sampled distribution yet.
    pub fn sample_radius(&self) -> Vec<f64> {
        let n_bin = self.sample_n_bin();
        if n_bin == 0 {
            return Vec::new();
        }
        read_f64_array(
            || n_bin + 1,
            |buf, n| unsafe { sys::f_aero_mode_get_sample_radius(self.handle.borrow(), buf, n) },
        )
    }

    pub fn sample_num_conc(&self) -> Vec<f64> {
        read_f64_array(
            || self.sample_n_bin(),
            |buf, n| unsafe { sys::f_aero_mode_get_sample_num_conc(self.handle.borrow(), buf, n) },
        )
    }

    /// Number distribution of this mode over `bin_grid`, one value per bin.
    pub fn num_dist(&self, bin_grid: &BinGrid, aero_data: &AeroData) -> Vec<f64> {
        read_f64_array(
            || bin_grid.len(),
            |buf, n| unsafe {
                sys::f_aero_mode_num_dist(
                    self.handle.borrow(),
                    bin_grid.as_ptr(),
                    aero_data.as_ptr(),
                    buf,
                    n,
                )
            },
        )
    }
}

/// Parses and cross-checks a mode parameter document. No mode-side foreign
/// call happens here; only species lookups against the existing table.
fn check_mode_params(
    aero_data: &AeroData,
    name: String,
    params: &ConfigDocument,
) -> PartMcResult<ModeParams> {
    let vol_frac = mass_frac_to_vol_frac(aero_data, params.require_array("mass_frac")?)?;
    let mode_type = ModeType::from_name(params.require_str("mode_type")?)?;

    let shape = match mode_type {
        ModeType::LogNormal => ModeShape::LogNormal {
            num_conc: params.require_f64("num_conc")?,
            geom_mean_diam: params.require_f64("geom_mean_diam")?,
            log10_geom_std_dev: params.require_f64("log10_geom_std_dev")?,
        },
        ModeType::Exp | ModeType::Mono => ModeShape::ExpOrMono {
            mode_type,
            num_conc: params.require_f64("num_conc")?,
            diam_at_mean_vol: params.require_f64("diam_at_mean_vol")?,
        },
        ModeType::Sampled => {
            let (diam, num_conc) = parse_size_dist(params.require("size_dist")?)?;
            ModeShape::Sampled { diam, num_conc }
        }
    };

    Ok(ModeParams {
        name,
        vol_frac,
        shape,
    })
}

/// Converts mass fractions (`[{species: frac}, ...]`) into a full-length,
/// normalized per-species volume fraction array using the species densities.
fn mass_frac_to_vol_frac(aero_data: &AeroData, entries: &[Value]) -> PartMcResult<Vec<f64>> {
    let entries = single_key_entries(entries, "mass_frac")?;
    unique_keys(&entries, "mass_frac")?;

    let densities = aero_data.densities();
    let mut vol_frac = vec![0.0; aero_data.len()];
    for (species, frac) in entries {
        let idx = aero_data.spec_by_name(species)?;
        let frac = frac_value(frac, species)?;
        vol_frac[idx] = frac / densities[idx];
    }
    let total: f64 = vol_frac.iter().sum();
    if total <= 0.0 {
        return Err(PartMcError::Schema(
            "mass_frac must have a positive total".into(),
        ));
    }
    for v in &mut vol_frac {
        *v /= total;
    }
    Ok(vol_frac)
}

// Accepts both `{"SO4": 0.5}` and the `{"SO4": [0.5]}` spelling.
fn frac_value(value: &Value, species: &str) -> PartMcResult<f64> {
    let scalar = match value {
        Value::Array(items) if items.len() == 1 => items[0].as_f64(),
        other => other.as_f64(),
    };
    scalar.ok_or_else(|| {
        PartMcError::Schema(format!("mass_frac entry {species:?} must be a number"))
    })
}

/// `size_dist` is exactly two single-key mappings, `{"diam": [...]}` then
/// `{"num_conc": [...]}`, with one more edge than concentration.
fn parse_size_dist(value: &Value) -> PartMcResult<(Vec<f64>, Vec<f64>)> {
    let list = value.as_array().filter(|l| l.len() == 2).ok_or_else(|| {
        PartMcError::Schema(
            "size_dist must be a list of two single-entry mappings ('diam' then 'num_conc')".into(),
        )
    })?;
    let entries = single_key_entries(list, "size_dist")?;
    if entries[0].0 != "diam" || entries[1].0 != "num_conc" {
        return Err(PartMcError::Schema(
            "size_dist must contain 'diam' then 'num_conc'".into(),
        ));
    }
    let diam = f64_array(entries[0].1, "size_dist diam")?;
    let num_conc = f64_array(entries[1].1, "size_dist num_conc")?;
    check_dim("sampled size distribution edges", num_conc.len() + 1, diam.len())?;
    Ok((diam, num_conc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn aero_data() -> AeroData {
        AeroData::from_json(&json!([
            {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
            {"BC": [1800.0, 0.0, 12e-3, 0.0]},
            {"H2O": [1000.0, 0.0, 18e-3, 0.0]},
        ]))
        .unwrap()
    }

    fn log_normal_doc() -> Value {
        json!({"test_mode": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "log_normal",
            "num_conc": 1e9,
            "geom_mean_diam": 2e-8,
            "log10_geom_std_dev": 0.25,
        }})
    }

    #[test]
    fn log_normal_mode_from_json() {
        let mut data = aero_data();
        let mode = AeroMode::from_json(&mut data, &log_normal_doc()).unwrap();
        assert_eq!(mode.typ().unwrap(), ModeType::LogNormal);
        assert_eq!(mode.name().unwrap(), "test_mode");
        assert_eq!(mode.num_conc(), 1e9);
        assert_eq!(mode.char_radius(), 1e-8);
        assert!((mode.gsd() - 10f64.powf(0.25)).abs() < 1e-12);
        // all mass in one species: its volume fraction normalizes to 1
        assert_eq!(mode.vol_frac(), vec![1.0, 0.0, 0.0]);
        assert_eq!(data.sources().unwrap(), vec!["test_mode"]);
    }

    #[test]
    fn mixed_mass_frac_is_density_weighted() {
        let mut data = aero_data();
        let mode = AeroMode::from_json(
            &mut data,
            &json!({"mixed": {
                "mass_frac": [{"SO4": [0.5]}, {"H2O": [0.5]}],
                "mode_type": "mono",
                "num_conc": 1e9,
                "diam_at_mean_vol": 1e-7,
            }}),
        )
        .unwrap();
        let vf = mode.vol_frac();
        // equal masses, water less dense, so water carries more volume
        assert!(vf[2] > vf[0]);
        assert!((vf.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_required_key_names_it() {
        let mut data = aero_data();
        let err = AeroMode::from_json(
            &mut data,
            &json!({"m": {"mode_type": "log_normal", "mass_frac": [{"SO4": [1.0]}], "num_conc": 1e9, "geom_mean_diam": 2e-8}}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("log10_geom_std_dev"));
    }

    #[test]
    fn unknown_mode_type_rejected() {
        let mut data = aero_data();
        let err = AeroMode::from_json(
            &mut data,
            &json!({"m": {"mass_frac": [{"SO4": [1.0]}], "mode_type": "bimodal"}}),
        )
        .unwrap_err();
        assert!(matches!(err, PartMcError::UnknownVariantName(_)));
    }

    #[test]
    fn unconsumed_key_reported_after_construction() {
        let mut data = aero_data();
        let mut doc = log_normal_doc();
        doc["test_mode"]["mystery_knob"] = json!(42);
        let err = AeroMode::from_json(&mut data, &doc).unwrap_err();
        match err {
            PartMcError::UnconsumedKeys(keys) => assert_eq!(keys, vec!["mystery_knob"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sampled_mode_edge_rule() {
        let mut data = aero_data();
        let good = json!({"s": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "sampled",
            "size_dist": [{"diam": [1e-8, 1e-7, 1e-6]}, {"num_conc": [1e9, 1e8]}],
        }});
        let mode = AeroMode::from_json(&mut data, &good).unwrap();
        assert_eq!(mode.typ().unwrap(), ModeType::Sampled);
        assert_eq!(mode.sample_n_bin(), 2);
        assert_eq!(mode.sample_radius(), vec![0.5e-8, 0.5e-7, 0.5e-6]);
        assert_eq!(mode.sample_num_conc(), vec![1e9, 1e8]);

        let bad = json!({"s": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "sampled",
            "size_dist": [{"diam": [1e-8, 1e-7]}, {"num_conc": [1e9, 1e8]}],
        }});
        assert!(matches!(
            AeroMode::from_json(&mut data, &bad),
            Err(PartMcError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn sample_getters_are_empty_without_a_sampled_dist() {
        let data = aero_data();
        let mode = AeroMode::new(&data).unwrap();
        assert_eq!(mode.sample_n_bin(), 0);
        assert_eq!(mode.sample_radius(), Vec::<f64>::new());
        assert_eq!(mode.sample_num_conc(), Vec::<f64>::new());
    }

    #[test]
    fn rejected_document_registers_no_source() {
        let mut data = aero_data();
        let mut doc = log_normal_doc();
        doc["test_mode"]["mystery_knob"] = json!(42);
        assert!(AeroMode::from_json(&mut data, &doc).is_err());
        assert_eq!(data.n_source(), 0);
        assert!(data.sources().unwrap().is_empty());
    }

    #[test]
    fn direct_set_sampled_checks_edges() {
        let data = aero_data();
        let mut mode = AeroMode::new(&data).unwrap();
        assert!(mode.set_sampled(&[1e-8, 1e-7], &[1e9]).is_ok());
        assert!(matches!(
            mode.set_sampled(&[1e-8], &[1e9]),
            Err(PartMcError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn vol_frac_set_is_dim_checked() {
        let data = aero_data();
        let mut mode = AeroMode::new(&data).unwrap();
        assert_eq!(mode.n_spec(), 3);
        assert!(mode.set_vol_frac(&[0.5, 0.5]).is_err());
        assert!(mode.set_vol_frac(&[0.2, 0.3, 0.5]).is_ok());
        assert_eq!(mode.vol_frac(), vec![0.2, 0.3, 0.5]);
    }

    #[test]
    fn mode_type_names_round_trip() {
        for name in ModeType::NAMES {
            let t = ModeType::from_name(name).unwrap();
            assert_eq!(t.name(), *name);
            assert_eq!(ModeType::from_code(t.code()).unwrap(), t);
        }
        assert!(matches!(
            ModeType::from_code(9),
            Err(PartMcError::UnknownVariantCode(9))
        ));
    }

    #[test]
    fn scalar_round_trips() {
        let data = aero_data();
        let mut mode = AeroMode::new(&data).unwrap();
        mode.set_char_radius(3e-8);
        assert_eq!(mode.char_radius(), 3e-8);
        mode.set_gsd(1.6);
        assert_eq!(mode.gsd(), 1.6);
        mode.set_name("renamed");
        assert_eq!(mode.name().unwrap(), "renamed");
    }
}
