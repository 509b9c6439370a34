//! Rust interface to the PartMC particle-resolved aerosol microphysics
//! engine.
//!
//! The numerics live in the external engine; this crate re-exports the
//! marshalling layer from `partmc-core`: typed entity wrappers over opaque
//! engine handles, JSON construction documents with consumed-key checking,
//! and the solver drivers. By default the workspace links an in-process
//! stand-in engine; enable the `fortran` feature to link the real library.
//!
//! ```no_run
//! use partmc::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> PartMcResult<()> {
//!     let aero_data = AeroData::from_json(&json!([
//!         {"SO4": [1800.0, 1.0, 96e-3, 0.65]},
//!         {"H2O": [1000.0, 0.0, 18e-3, 0.0]},
//!     ]))?;
//!     let grid = BinGrid::new(100, "log", 1e-9, 1e-6)?;
//!     let binned = AeroBinned::new(&aero_data, &grid)?;
//!     assert_eq!(binned.n_bin(), 100);
//!     Ok(())
//! }
//! ```

pub use partmc_core::{boundary, config, core, errors, handle, run, schema, util, variant};

pub mod prelude {
    pub use crate::core::aero_binned::AeroBinned;
    pub use crate::core::aero_data::AeroData;
    pub use crate::core::aero_dist::AeroDist;
    pub use crate::core::aero_mode::{AeroMode, ModeType};
    pub use crate::core::aero_particle::AeroParticle;
    pub use crate::core::aero_state::{AeroState, SampleFlags, WeightKind};
    pub use crate::core::bin_grid::{BinGrid, GridSpacing};
    pub use crate::core::env_state::EnvState;
    pub use crate::core::gas_data::GasData;
    pub use crate::core::gas_state::GasState;
    pub use crate::core::run_opts::{RunExactOpt, RunPartOpt, RunSectOpt};
    pub use crate::core::scenario::Scenario;
    pub use crate::core::subsystems::{CampCore, Photolysis};
    pub use crate::errors::{PartMcError, PartMcResult};
    pub use crate::run::{
        run_exact, run_part, run_part_timeblock, run_part_timestep, run_sect, RunPartProgress,
    };
    pub use crate::variant::VariantSet;
}
