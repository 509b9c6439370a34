//! Solver drivers.
//!
//! Each driver is one long-running boundary call; the borrow spelling of the
//! arguments states which entities the engine mutates during the run.

use crate::core::aero_binned::AeroBinned;
use crate::core::aero_data::AeroData;
use crate::core::aero_state::AeroState;
use crate::core::bin_grid::BinGrid;
use crate::core::env_state::EnvState;
use crate::core::gas_data::GasData;
use crate::core::gas_state::GasState;
use crate::core::run_opts::{RunExactOpt, RunPartOpt, RunSectOpt};
use crate::core::scenario::Scenario;
use partmc_sys as sys;
use tracing::info;

/// In/out progress counters threaded through the stepwise particle drivers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunPartProgress {
    pub last_output_time: f64,
    pub last_progress_print_time: f64,
    pub i_output: i32,
}

/// Runs the particle-resolved solver over the full `opt.t_max` horizon.
pub fn run_part(
    scenario: &Scenario,
    env_state: &mut EnvState,
    aero_data: &AeroData,
    aero_state: &mut AeroState<'_>,
    gas_data: &GasData,
    gas_state: &mut GasState<'_>,
    opt: &RunPartOpt,
) {
    info!(t_max = opt.t_max(), "running particle-resolved solver");
    unsafe {
        sys::f_run_part(
            scenario.as_ptr(),
            env_state.as_mut_ptr(),
            aero_data.as_ptr(),
            aero_state.as_mut_ptr(),
            gas_data.as_ptr(),
            gas_state.as_mut_ptr(),
            opt.as_ptr(),
        )
    }
}

/// Advances the particle-resolved solver by the single step `i_time`
/// (1-based) from `t_start`, updating `progress` in place.
#[allow(clippy::too_many_arguments)]
pub fn run_part_timestep(
    scenario: &Scenario,
    env_state: &mut EnvState,
    aero_data: &AeroData,
    aero_state: &mut AeroState<'_>,
    gas_data: &GasData,
    gas_state: &mut GasState<'_>,
    opt: &RunPartOpt,
    i_time: i32,
    t_start: f64,
    progress: &mut RunPartProgress,
) {
    unsafe {
        sys::f_run_part_timestep(
            scenario.as_ptr(),
            env_state.as_mut_ptr(),
            aero_data.as_ptr(),
            aero_state.as_mut_ptr(),
            gas_data.as_ptr(),
            gas_state.as_mut_ptr(),
            opt.as_ptr(),
            &i_time,
            &t_start,
            &mut progress.last_output_time,
            &mut progress.last_progress_print_time,
            &mut progress.i_output,
        )
    }
}

/// Advances the particle-resolved solver over steps `i_time..=i_time_end`.
#[allow(clippy::too_many_arguments)]
pub fn run_part_timeblock(
    scenario: &Scenario,
    env_state: &mut EnvState,
    aero_data: &AeroData,
    aero_state: &mut AeroState<'_>,
    gas_data: &GasData,
    gas_state: &mut GasState<'_>,
    opt: &RunPartOpt,
    i_time: i32,
    i_time_end: i32,
    t_start: f64,
    progress: &mut RunPartProgress,
) {
    unsafe {
        sys::f_run_part_timeblock(
            scenario.as_ptr(),
            env_state.as_mut_ptr(),
            aero_data.as_ptr(),
            aero_state.as_mut_ptr(),
            gas_data.as_ptr(),
            gas_state.as_mut_ptr(),
            opt.as_ptr(),
            &i_time,
            &i_time_end,
            &t_start,
            &mut progress.last_output_time,
            &mut progress.last_progress_print_time,
            &mut progress.i_output,
        )
    }
}

/// Runs the sectional solver.
#[allow(clippy::too_many_arguments)]
pub fn run_sect(
    bin_grid: &BinGrid,
    gas_data: &GasData,
    aero_data: &AeroData,
    aero_binned: &mut AeroBinned<'_>,
    env_state: &mut EnvState,
    gas_state: &mut GasState<'_>,
    scenario: &Scenario,
    opt: &RunSectOpt,
) {
    info!(t_max = opt.t_max(), "running sectional solver");
    unsafe {
        sys::f_run_sect(
            bin_grid.as_ptr(),
            gas_data.as_ptr(),
            aero_data.as_ptr(),
            aero_binned.as_mut_ptr(),
            env_state.as_mut_ptr(),
            gas_state.as_mut_ptr(),
            scenario.as_ptr(),
            opt.as_ptr(),
        )
    }
}

/// Runs the exact-solution solver; the gas state is read-only here.
#[allow(clippy::too_many_arguments)]
pub fn run_exact(
    bin_grid: &BinGrid,
    gas_data: &GasData,
    aero_data: &AeroData,
    aero_binned: &mut AeroBinned<'_>,
    env_state: &mut EnvState,
    gas_state: &GasState<'_>,
    scenario: &Scenario,
    opt: &RunExactOpt,
) {
    info!(t_max = opt.t_max(), "running exact-solution solver");
    unsafe {
        sys::f_run_exact(
            bin_grid.as_ptr(),
            gas_data.as_ptr(),
            aero_data.as_ptr(),
            aero_binned.as_mut_ptr(),
            env_state.as_mut_ptr(),
            gas_state.as_ptr(),
            scenario.as_ptr(),
            opt.as_ptr(),
        )
    }
}
