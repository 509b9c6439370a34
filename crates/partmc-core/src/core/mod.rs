//! Typed wrappers, one module per engine entity.

pub mod aero_binned;
pub mod aero_data;
pub mod aero_dist;
pub mod aero_mode;
pub mod aero_particle;
pub mod aero_state;
pub mod bin_grid;
pub mod env_state;
pub mod gas_data;
pub mod gas_state;
pub mod run_opts;
pub mod scenario;
pub mod subsystems;

pub use aero_binned::AeroBinned;
pub use aero_data::AeroData;
pub use aero_dist::AeroDist;
pub use aero_mode::{AeroMode, ModeType};
pub use aero_particle::AeroParticle;
pub use aero_state::{AeroState, SampleFlags, WeightKind};
pub use bin_grid::{BinGrid, GridSpacing};
pub use env_state::EnvState;
pub use gas_data::GasData;
pub use gas_state::GasState;
pub use run_opts::{RunExactOpt, RunPartOpt, RunSectOpt};
pub use scenario::Scenario;
pub use subsystems::{CampCore, Photolysis};
