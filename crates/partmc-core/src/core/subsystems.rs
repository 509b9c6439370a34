//! Opaque chemistry subsystem handles.
//!
//! CAMP and photolysis are configured entirely on the engine side; the
//! binding only owns their lifetimes.

use crate::errors::PartMcResult;
use crate::handle::ForeignHandle;
use partmc_sys as sys;

/// Handle to the CAMP chemistry core.
#[derive(Debug)]
pub struct CampCore {
    // held for its destructor only
    _handle: ForeignHandle,
}

impl CampCore {
    pub fn new() -> PartMcResult<Self> {
        let handle = ForeignHandle::acquire(sys::f_camp_core_ctor, sys::f_camp_core_dtor)?;
        Ok(CampCore { _handle: handle })
    }
}

/// Handle to the photolysis module.
#[derive(Debug)]
pub struct Photolysis {
    _handle: ForeignHandle,
}

impl Photolysis {
    pub fn new() -> PartMcResult<Self> {
        let handle = ForeignHandle::acquire(sys::f_photolysis_ctor, sys::f_photolysis_dtor)?;
        Ok(Photolysis { _handle: handle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_acquire_and_drop() {
        let camp = CampCore::new().unwrap();
        let photo = Photolysis::new().unwrap();
        drop(camp);
        drop(photo);
    }
}
