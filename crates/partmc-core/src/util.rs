//! Small numeric helpers and the engine RNG, exposed as boundary calls so
//! host-side results match the engine's own arithmetic exactly.

use crate::boundary::{get_f64, get_i32};
use partmc_sys as sys;

/// Smallest power of two at or above `n`.
pub fn pow2_above(n: i32) -> i32 {
    get_i32(|p| unsafe { sys::f_pow2_above(&n, p) })
}

pub fn sphere_vol2rad(vol: f64) -> f64 {
    get_f64(|p| unsafe { sys::f_sphere_vol2rad(&vol, p) })
}

pub fn sphere_rad2vol(radius: f64) -> f64 {
    get_f64(|p| unsafe { sys::f_sphere_rad2vol(&radius, p) })
}

pub fn rad2diam(radius: f64) -> f64 {
    get_f64(|p| unsafe { sys::f_rad2diam(&radius, p) })
}

pub fn diam2rad(diam: f64) -> f64 {
    get_f64(|p| unsafe { sys::f_diam2rad(&diam, p) })
}

/// Seeds the engine RNG; seed 0 asks for a time-based seed.
pub fn rand_init(seed: i32) {
    unsafe { sys::f_rand_init(&seed) }
}

/// One draw from the engine's normal distribution.
pub fn rand_normal(mean: f64, stddev: f64) -> f64 {
    get_f64(|p| unsafe { sys::f_rand_normal(&mean, &stddev, p) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow2_above_rounds_up() {
        assert_eq!(pow2_above(1), 1);
        assert_eq!(pow2_above(17), 32);
        assert_eq!(pow2_above(64), 64);
    }

    #[test]
    fn sphere_conversions_invert() {
        let vol = sphere_rad2vol(2e-7);
        assert!((sphere_vol2rad(vol) - 2e-7).abs() < 1e-18);
        assert_eq!(rad2diam(1.5), 3.0);
        assert_eq!(diam2rad(3.0), 1.5);
    }

    #[test]
    fn seeded_normal_draws_are_reproducible() {
        rand_init(42);
        let a = rand_normal(0.0, 1.0);
        rand_init(42);
        let b = rand_normal(0.0, 1.0);
        assert_eq!(a, b);
    }
}
