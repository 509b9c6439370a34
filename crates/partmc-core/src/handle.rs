use crate::errors::{PartMcError, PartMcResult};
use partmc_sys::{CtorFn, DtorFn};
use std::ffi::c_void;
use std::fmt;
use std::ptr::{self, NonNull};
use tracing::trace;

/// Owning wrapper around one opaque engine resource.
///
/// A handle is created by calling the entity's paired foreign constructor
/// and owns the resulting pointer exclusively: it cannot be cloned, and the
/// foreign destructor runs exactly once, either through [`release`] or when
/// the handle is dropped, on every exit path. The wrapper never dereferences
/// the pointer; it only lends it out for other boundary calls via
/// [`borrow`] and [`borrow_mut`].
///
/// The raw pointer member keeps `ForeignHandle` `!Send` and `!Sync`, which
/// matches the engine's single-threaded call model.
///
/// [`release`]: ForeignHandle::release
/// [`borrow`]: ForeignHandle::borrow
/// [`borrow_mut`]: ForeignHandle::borrow_mut
pub struct ForeignHandle {
    raw: NonNull<c_void>,
    dtor: DtorFn,
    released: bool,
}

impl ForeignHandle {
    /// Calls the foreign constructor once and takes ownership of the handle
    /// it produces.
    ///
    /// The ABI gives constructors no way to report failure, so the only
    /// observable failure mode is a null handle.
    pub fn acquire(ctor: CtorFn, dtor: DtorFn) -> PartMcResult<Self> {
        let mut raw: *mut c_void = ptr::null_mut();
        unsafe { ctor(&mut raw) };
        let raw = NonNull::new(raw).ok_or(PartMcError::NullHandle)?;
        trace!(ptr = ?raw, "acquired foreign handle");
        Ok(ForeignHandle {
            raw,
            dtor,
            released: false,
        })
    }

    /// The raw pointer, for read-only boundary calls. Ownership stays with
    /// the handle. Must not be called once the handle is released.
    pub fn borrow(&self) -> *const c_void {
        debug_assert!(!self.released, "borrow of a released handle");
        self.raw.as_ptr()
    }

    /// The raw pointer, for mutating boundary calls. Must not be called once
    /// the handle is released.
    pub fn borrow_mut(&mut self) -> *mut c_void {
        debug_assert!(!self.released, "borrow of a released handle");
        self.raw.as_ptr()
    }

    /// Calls the foreign destructor. Safe to call more than once; only the
    /// first call reaches the engine.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let mut raw = self.raw.as_ptr();
        unsafe { (self.dtor)(&mut raw) };
        trace!(ptr = ?self.raw, "released foreign handle");
    }
}

impl Drop for ForeignHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ForeignHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignHandle")
            .field("raw", &self.raw)
            .field("released", &self.released)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partmc_sys as sys;

    #[test]
    #[should_panic(expected = "borrow of a released handle")]
    fn borrow_after_release_panics() {
        let mut handle =
            ForeignHandle::acquire(sys::f_camp_core_ctor, sys::f_camp_core_dtor).unwrap();
        handle.release();
        let _ = handle.borrow();
    }

    #[test]
    #[should_panic(expected = "borrow of a released handle")]
    fn borrow_mut_after_release_panics() {
        let mut handle =
            ForeignHandle::acquire(sys::f_camp_core_ctor, sys::f_camp_core_dtor).unwrap();
        handle.release();
        let _ = handle.borrow_mut();
    }
}
