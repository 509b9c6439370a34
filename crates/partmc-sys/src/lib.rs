//! Raw ABI of the PartMC Fortran engine.
//!
//! Every entry point follows the `f_<entity>_<op>` naming convention and
//! takes only primitive pointers and counts. Constructors and destructors
//! share the signature `fn(*mut *mut c_void)`: the engine writes the opaque
//! handle through the out-pointer on construction and clears it on
//! destruction. Variable-length results come in pairs, a size query plus a
//! fill call into a caller-sized buffer. None of the functions report
//! status; all argument validation happens on the Rust side before the call.
//!
//! With the `fortran` feature enabled the symbols resolve against the real
//! engine library. Without it (the default) the same symbols are provided by
//! an in-crate stub engine backed by boxed Rust state, which is what the
//! test suite runs against. The stub also counts every boundary call it
//! receives, see [`diag`].

use std::ffi::c_void;

/// Signature shared by every `f_<entity>_ctor` entry point.
pub type CtorFn = unsafe extern "C" fn(*mut *mut c_void);

/// Signature shared by every `f_<entity>_dtor` entry point.
pub type DtorFn = unsafe extern "C" fn(*mut *mut c_void);

#[cfg(feature = "fortran")]
mod ffi;
#[cfg(feature = "fortran")]
pub use ffi::*;

#[cfg(not(feature = "fortran"))]
mod stub;
#[cfg(not(feature = "fortran"))]
pub use stub::*;

#[cfg(not(feature = "fortran"))]
pub mod diag;
