//! Boundary-call counters for the stub engine.
//!
//! Every stub entry point records a hit under its symbol name. Tests use
//! this to prove that validation failures happen before any boundary call
//! and that destructors run exactly once. The registry is process-global, so
//! tests that read it must not run concurrently with other boundary traffic
//! (the workspace uses `serial_test` for that).

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Mutex;

lazy_static! {
    static ref CALLS: Mutex<HashMap<&'static str, usize>> = Mutex::new(HashMap::new());
}

pub(crate) fn hit(symbol: &'static str) {
    *CALLS.lock().unwrap().entry(symbol).or_insert(0) += 1;
}

/// Number of times the named entry point has been called since the last
/// [`reset`].
pub fn calls(symbol: &str) -> usize {
    CALLS.lock().unwrap().get(symbol).copied().unwrap_or(0)
}

/// Clears all counters.
pub fn reset() {
    CALLS.lock().unwrap().clear();
}
