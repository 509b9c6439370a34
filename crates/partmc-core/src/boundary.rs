//! Helpers for exchanging buffers and scalars across the engine boundary.
//!
//! Variable-length results use a two-call protocol: a size query, then a
//! fill call into a caller-sized buffer. These helpers keep the size/capacity
//! invariant in one place: the buffer passed to `fill` always has exactly
//! the length reported by the query. Writes in the other direction must be
//! dimension-checked with [`check_dim`] before crossing, because the engine
//! has no way to signal a mismatch back.
//!
//! Engine-side arrays are 1-based; [`to_foreign_index`] and
//! [`from_foreign_index`] keep the off-by-one translation out of the entity
//! wrappers' host-facing APIs.

use crate::errors::{PartMcError, PartMcResult};
use std::ffi::{c_char, c_int};

/// Runs the size query, allocates exactly that many f64 slots, and lets
/// `fill` write into them with the matching count.
pub fn read_f64_array<Q, F>(query: Q, fill: F) -> Vec<f64>
where
    Q: FnOnce() -> usize,
    F: FnOnce(*mut f64, &c_int),
{
    let len = query();
    let mut buf = vec![0.0f64; len];
    let n = len as c_int;
    fill(buf.as_mut_ptr(), &n);
    buf
}

/// Integer-array variant of [`read_f64_array`].
pub fn read_i32_array<Q, F>(query: Q, fill: F) -> Vec<i32>
where
    Q: FnOnce() -> usize,
    F: FnOnce(*mut c_int, &c_int),
{
    let len = query();
    let mut buf: Vec<c_int> = vec![0; len];
    let n = len as c_int;
    fill(buf.as_mut_ptr(), &n);
    buf
}

/// Two-call protocol for text: query the byte length, let `fill` write that
/// many bytes, and convert to an owned string.
pub fn read_string<Q, F>(query: Q, fill: F) -> PartMcResult<String>
where
    Q: FnOnce() -> usize,
    F: FnOnce(*mut c_char, &c_int),
{
    let len = query();
    let mut buf = vec![0u8; len];
    let n = len as c_int;
    fill(buf.as_mut_ptr() as *mut c_char, &n);
    Ok(String::from_utf8(buf)?)
}

/// Byte pointer + length pair for sending a string across the boundary.
pub fn str_arg(s: &str) -> (*const c_char, c_int) {
    (s.as_ptr() as *const c_char, s.len() as c_int)
}

/// Validates a caller-supplied array length against the entity's expected
/// dimension. Must run before the boundary call it guards.
pub fn check_dim(context: &'static str, expected: usize, actual: usize) -> PartMcResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PartMcError::DimensionMismatch {
            context,
            expected,
            actual,
        })
    }
}

/// Validates a host-side index against the entity's current extent.
pub fn check_index(index: usize, len: usize) -> PartMcResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(PartMcError::OutOfRange { index, len })
    }
}

/// Host (0-based) to engine (1-based) index.
pub fn to_foreign_index(index: usize) -> c_int {
    index as c_int + 1
}

/// Engine (1-based) to host (0-based) index.
pub fn from_foreign_index(index: c_int) -> usize {
    index as usize - 1
}

/// Scalar out-parameter helpers; the engine returns every value through a
/// pointer argument.
pub fn get_f64<F: FnOnce(*mut f64)>(call: F) -> f64 {
    let mut val = 0.0f64;
    call(&mut val);
    val
}

pub fn get_i32<F: FnOnce(*mut c_int)>(call: F) -> i32 {
    let mut val: c_int = 0;
    call(&mut val);
    val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_f64_array_sizes_buffer_from_query() {
        let source = [1.0, 2.0, 3.0];
        let out = read_f64_array(
            || source.len(),
            |buf, n| {
                assert_eq!(*n as usize, source.len());
                unsafe { std::ptr::copy_nonoverlapping(source.as_ptr(), buf, source.len()) }
            },
        );
        assert_eq!(out, source);
    }

    #[test]
    fn read_string_reports_invalid_utf8() {
        let res = read_string(
            || 2,
            |buf, _| unsafe {
                *buf = 0xff_u8 as c_char;
                *buf.add(1) = 0xfe_u8 as c_char;
            },
        );
        assert!(matches!(res, Err(PartMcError::Utf8(_))));
    }

    #[test]
    fn check_dim_rejects_mismatch() {
        assert!(check_dim("test", 3, 3).is_ok());
        let err = check_dim("test", 3, 2).unwrap_err();
        assert!(matches!(
            err,
            PartMcError::DimensionMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn index_translation_is_inverse() {
        assert_eq!(to_foreign_index(0), 1);
        assert_eq!(from_foreign_index(1), 0);
        assert_eq!(from_foreign_index(to_foreign_index(41)), 41);
    }
}
