//! Boundary-discipline tests against the in-process engine.
//!
//! These assert not just the host-visible errors but also, via the stand-in
//! engine's call counters, that rejected operations never cross the
//! boundary. The counters are global, so every test here runs serially.

#![cfg(not(feature = "fortran"))]

use partmc::handle::ForeignHandle;
use partmc::prelude::*;
use partmc_sys::diag;
use serde_json::json;
use serial_test::serial;

fn aero_data() -> AeroData {
    AeroData::from_json(&json!([
        {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
        {"BC": [1800.0, 0.0, 12e-3, 0.0]},
        {"H2O": [1000.0, 0.0, 18e-3, 0.0]},
    ]))
    .unwrap()
}

#[test]
#[serial]
fn missing_required_key_names_the_key() {
    let mut data = aero_data();
    let err = AeroMode::from_json(
        &mut data,
        &json!({"m": {"mode_type": "log_normal", "num_conc": 1e9,
                       "geom_mean_diam": 2e-8, "log10_geom_std_dev": 0.25}}),
    )
    .unwrap_err();
    assert!(matches!(err, PartMcError::Schema(_)));
    assert!(err.to_string().contains("mass_frac"));
}

#[test]
#[serial]
fn duplicate_mass_frac_species_makes_no_mode_ctor_call() {
    let mut data = aero_data();
    diag::reset();
    let err = AeroMode::from_json(
        &mut data,
        &json!({"m": {
            "mass_frac": [{"SO4": [0.5]}, {"SO4": [0.5]}],
            "mode_type": "mono",
            "num_conc": 1e9,
            "diam_at_mean_vol": 1e-7,
        }}),
    )
    .unwrap_err();
    assert!(matches!(err, PartMcError::Schema(_)));
    assert_eq!(diag::calls("f_aero_mode_ctor"), 0);
}

#[test]
#[serial]
fn unknown_variant_name_makes_no_mode_ctor_call() {
    let mut data = aero_data();
    diag::reset();
    let err = AeroMode::from_json(
        &mut data,
        &json!({"m": {"mass_frac": [{"SO4": [1.0]}], "mode_type": "bimodal"}}),
    )
    .unwrap_err();
    assert!(matches!(err, PartMcError::UnknownVariantName(_)));
    assert_eq!(diag::calls("f_aero_mode_ctor"), 0);
}

#[test]
#[serial]
fn sampled_edge_rule_applies_to_document_and_setter() {
    let mut data = aero_data();

    // one edge short in the document
    let err = AeroMode::from_json(
        &mut data,
        &json!({"s": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "sampled",
            "size_dist": [{"diam": [1e-8, 1e-7]}, {"num_conc": [1e9, 1e8]}],
        }}),
    )
    .unwrap_err();
    assert!(matches!(err, PartMcError::DimensionMismatch { .. }));

    // and through the direct setter
    let mut mode = AeroMode::new(&data).unwrap();
    diag::reset();
    let err = mode.set_sampled(&[1e-8, 1e-7, 1e-6], &[1e9]).unwrap_err();
    assert!(matches!(err, PartMcError::DimensionMismatch { .. }));
    assert_eq!(diag::calls("f_aero_mode_set_sampled"), 0);
}

#[test]
#[serial]
fn wrong_length_write_never_crosses_the_boundary() {
    let data = aero_data();
    let mut mode = AeroMode::new(&data).unwrap();
    diag::reset();
    let err = mode.set_vol_frac(&[0.5, 0.5]).unwrap_err();
    assert!(matches!(
        err,
        PartMcError::DimensionMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));
    assert_eq!(diag::calls("f_aero_mode_set_vol_frac"), 0);

    let gas_data = GasData::from_json(&json!(["SO2", "O3"])).unwrap();
    let mut gas_state = GasState::new(&gas_data).unwrap();
    diag::reset();
    assert!(gas_state.set_mix_rats(&[0.1]).is_err());
    assert_eq!(diag::calls("f_gas_state_set_mix_rats"), 0);
}

#[test]
#[serial]
fn mode_type_name_table_round_trips() {
    for name in ModeType::NAMES {
        let t = ModeType::from_name(name).unwrap();
        assert_eq!(t.name(), *name);
        assert_eq!(ModeType::from_code(t.code()).unwrap(), t);
    }
    assert!(matches!(
        ModeType::from_name("bimodal"),
        Err(PartMcError::UnknownVariantName(_))
    ));
    assert!(matches!(
        ModeType::from_code(0),
        Err(PartMcError::UnknownVariantCode(0))
    ));
}

#[test]
#[serial]
fn destructor_runs_exactly_once() {
    diag::reset();
    let mut handle =
        ForeignHandle::acquire(partmc_sys::f_aero_mode_ctor, partmc_sys::f_aero_mode_dtor)
            .unwrap();
    assert_eq!(diag::calls("f_aero_mode_ctor"), 1);

    handle.release();
    handle.release();
    drop(handle);
    assert_eq!(diag::calls("f_aero_mode_dtor"), 1);
}

#[test]
#[serial]
fn wrapper_drop_releases_the_engine_resource() {
    let data = aero_data();
    diag::reset();
    let mode = AeroMode::new(&data).unwrap();
    assert_eq!(diag::calls("f_aero_mode_ctor"), 1);
    drop(mode);
    assert_eq!(diag::calls("f_aero_mode_dtor"), 1);
}

#[test]
#[serial]
fn stray_key_fails_after_construction_without_leaking() {
    let mut data = aero_data();
    diag::reset();
    let err = AeroMode::from_json(
        &mut data,
        &json!({"m": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "mono",
            "num_conc": 1e9,
            "diam_at_mean_vol": 1e-7,
            "mystery_knob": 42,
        }}),
    )
    .unwrap_err();
    match err {
        PartMcError::UnconsumedKeys(keys) => assert_eq!(keys, vec!["mystery_knob"]),
        other => panic!("unexpected error: {other}"),
    }
    // construction got as far as the engine, and the failure tore it down
    assert_eq!(diag::calls("f_aero_mode_ctor"), 1);
    assert_eq!(diag::calls("f_aero_mode_dtor"), 1);
}
