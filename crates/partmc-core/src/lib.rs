//! Safe marshalling layer over the PartMC engine ABI.
//!
//! The engine (particle-resolved, sectional and exact-solution aerosol
//! solvers) lives behind an opaque-pointer C ABI; this crate owns the
//! discipline of talking to it:
//!
//! - [`handle::ForeignHandle`]: RAII ownership of engine resources,
//! - [`boundary`]: two-call size-then-fill buffer exchange and host-side
//!   dimension checks,
//! - [`config`] and [`schema`]: JSON construction documents with
//!   consumed-key tracking,
//! - [`variant`]: name to 1-based code dispatch for closed variant sets,
//! - [`core`]: one typed wrapper per engine entity,
//! - [`run`]: the solver drivers.
//!
//! All engine failure modes the ABI cannot report are caught host-side and
//! surface as [`errors::PartMcError`] before the boundary is crossed.

pub mod boundary;
pub mod config;
pub mod core;
pub mod errors;
pub mod handle;
pub mod run;
pub mod schema;
pub mod util;
pub mod variant;
