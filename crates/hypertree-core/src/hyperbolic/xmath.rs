//! Angle and hyperbolic-trig helpers not provided by `f64`.

use std::f64::consts::TAU;

/// Largest argument passed to `atanh` so results stay finite at the disk boundary.
pub const ATANH_LIMIT: f64 = 1.0 - 1e-12;

/// `atanh(x)` with `x` clamped to `[-ATANH_LIMIT, ATANH_LIMIT]`.
#[inline]
pub fn clamped_atanh(x: f64) -> f64 {
    x.clamp(-ATANH_LIMIT, ATANH_LIMIT).atanh()
}

/// Normalizes an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    let r = theta.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Signed smallest rotation taking angle `from` onto angle `to`, in `(-π, π]`.
#[inline]
pub fn angle_between(from: f64, to: f64) -> f64 {
    let d = normalize_angle(to - from);
    if d > std::f64::consts::PI {
        d - TAU
    } else {
        d
    }
}
