//! End-to-end wiring of the entities through the solver drivers.

use partmc::prelude::*;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn aero_data() -> AeroData {
    AeroData::from_json(&json!([
        {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
        {"H2O": [1000.0, 0.0, 18e-3, 0.0]},
    ]))
    .unwrap()
}

fn gas_data() -> GasData {
    GasData::from_json(&json!(["SO2", "NO2", "O3"])).unwrap()
}

fn scenario() -> Scenario {
    Scenario::from_json(&json!({
        "temp_profile": [{"time": [0.0, 86400.0]}, {"temp": [290.0, 300.0]}],
        "pressure_profile": [{"time": [0.0]}, {"pressure": [101325.0]}],
        "height_profile": [{"time": [0.0]}, {"height": [500.0]}],
    }))
    .unwrap()
}

fn env_state() -> EnvState {
    EnvState::from_json(&json!({
        "rel_humidity": 0.8,
        "latitude": 40.0,
        "longitude": -88.0,
        "altitude": 0.0,
        "start_time": 21600.0,
        "start_day": 200,
    }))
    .unwrap()
}

#[test]
fn particle_resolved_run_advances_the_clock() {
    init_tracing();
    let mut data = aero_data();
    let gas = gas_data();
    let scenario = scenario();
    let mut env = env_state();
    scenario.init_env_state(&mut env, 0.0);
    assert_eq!(env.temp(), 290.0);

    let dist = AeroDist::from_json(
        &mut data,
        &json!([{"init": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "log_normal",
            "num_conc": 3.2e9,
            "geom_mean_diam": 2e-8,
            "log10_geom_std_dev": 0.161,
        }}]),
    )
    .unwrap();

    let mut aero_state = AeroState::new(&data, 100.0, "flat").unwrap();
    aero_state.dist_sample(&dist, 1.0, 0.0, SampleFlags::empty());
    assert!(!aero_state.is_empty());

    let mut gas_state = GasState::new(&gas).unwrap();
    gas_state.set_mix_rats(&[0.1, 0.0, 0.03]).unwrap();

    let opt = RunPartOpt::from_json(&json!({"t_max": 3600.0, "del_t": 60.0})).unwrap();
    run_part(
        &scenario,
        &mut env,
        &data,
        &mut aero_state,
        &gas,
        &mut gas_state,
        &opt,
    );
    assert_eq!(env.elapsed_time(), 3600.0);
}

#[test]
fn stepwise_run_updates_progress() {
    let mut data = aero_data();
    let gas = gas_data();
    let scenario = scenario();
    let mut env = env_state();
    scenario.init_env_state(&mut env, 0.0);

    let dist = AeroDist::from_json(
        &mut data,
        &json!([{"init": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "mono",
            "num_conc": 1e9,
            "diam_at_mean_vol": 1e-7,
        }}]),
    )
    .unwrap();
    let mut aero_state = AeroState::new(&data, 10.0, "flat").unwrap();
    aero_state.dist_sample(&dist, 1.0, 0.0, SampleFlags::all());

    let mut gas_state = GasState::new(&gas).unwrap();
    let opt = RunPartOpt::from_json(&json!({"t_max": 600.0, "del_t": 60.0})).unwrap();

    let mut progress = RunPartProgress::default();
    run_part_timestep(
        &scenario,
        &mut env,
        &data,
        &mut aero_state,
        &gas,
        &mut gas_state,
        &opt,
        1,
        0.0,
        &mut progress,
    );
    assert_eq!(progress.i_output, 1);
    assert_eq!(env.elapsed_time(), 60.0);

    run_part_timeblock(
        &scenario,
        &mut env,
        &data,
        &mut aero_state,
        &gas,
        &mut gas_state,
        &opt,
        2,
        10,
        0.0,
        &mut progress,
    );
    assert_eq!(progress.i_output, 2);
    assert_eq!(env.elapsed_time(), 600.0);
    assert_eq!(progress.last_output_time, 600.0);
}

#[test]
fn sectional_and_exact_runs() {
    let mut data = aero_data();
    let gas = gas_data();
    let scenario = scenario();
    let grid = BinGrid::new(40, "log", 1e-9, 1e-5).unwrap();

    let dist = AeroDist::from_json(
        &mut data,
        &json!([{"init": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "exp",
            "num_conc": 1e9,
            "diam_at_mean_vol": 2e-7,
        }}]),
    )
    .unwrap();

    let mut env = env_state();
    scenario.init_env_state(&mut env, 0.0);
    let mut binned = AeroBinned::new(&data, &grid).unwrap();
    binned.add_aero_dist(&grid, &dist);
    let mut gas_state = GasState::new(&gas).unwrap();

    let sect_opt = RunSectOpt::from_json(&json!({"t_max": 1800.0, "del_t": 10.0}), &env).unwrap();
    run_sect(
        &grid,
        &gas,
        &data,
        &mut binned,
        &mut env,
        &mut gas_state,
        &scenario,
        &sect_opt,
    );
    assert_eq!(env.elapsed_time(), 1800.0);

    let exact_opt = RunExactOpt::from_json(&json!({"t_max": 600.0}), &env).unwrap();
    run_exact(
        &grid,
        &gas,
        &data,
        &mut binned,
        &mut env,
        &gas_state,
        &scenario,
        &exact_opt,
    );
    assert_eq!(env.elapsed_time(), 2400.0);
}

#[test]
fn num_dist_integrates_to_the_mode_total() {
    let mut data = aero_data();
    let grid = BinGrid::new(20, "log", 1e-9, 1e-6).unwrap();
    let mode = AeroMode::from_json(
        &mut data,
        &json!({"m": {
            "mass_frac": [{"SO4": [1.0]}],
            "mode_type": "mono",
            "num_conc": 1e9,
            "diam_at_mean_vol": 1e-7,
        }}),
    )
    .unwrap();
    let dist = mode.num_dist(&grid, &data);
    assert_eq!(dist.len(), 20);
    assert!((dist.iter().sum::<f64>() - 1e9).abs() / 1e9 < 1e-12);
}
