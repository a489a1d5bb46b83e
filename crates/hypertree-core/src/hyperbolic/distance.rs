//! Distances in the Poincare disk.
//!
//! # Mathematics
//!
//! Unit curvature (c = 1):
//! - Hyperbolic distance from the origin: `h = 2·atanh(e)` where `e = |z|`
//! - Inverse: `e = tanh(h / 2)`
//! - Between two points: `d(z1, z2) = 2·atanh(|z1 - z2| / |1 - conj(z1)·z2|)`

use super::complex::{Complex, ComplexExt};
use super::xmath::clamped_atanh;

/// Converts a Euclidean distance to the origin into a hyperbolic one.
///
/// Defined on `[0, 1)`; grows without bound towards the boundary and is
/// clamped to a finite value at `e >= 1`.
#[inline]
pub fn distance_to_origin_e2h(e: f64) -> f64 {
    2.0 * clamped_atanh(e)
}

/// Converts a hyperbolic distance to the origin into a Euclidean one.
#[inline]
pub fn distance_to_origin_h2e(h: f64) -> f64 {
    (h / 2.0).tanh()
}

/// Hyperbolic distance between two points of the disk.
///
/// Returns `0.0` for identical points.
pub fn hyperbolic_distance(z1: Complex, z2: Complex) -> f64 {
    let num = (z1 - z2).mag();
    if num == 0.0 {
        return 0.0;
    }
    let den = (Complex::new(1.0, 0.0) - z1.conj() * z2).mag();
    2.0 * clamped_atanh(num / den)
}

/// Euclidean distance between two points.
#[inline]
pub fn euclidean_distance(z1: Complex, z2: Complex) -> f64 {
    (z1 - z2).mag()
}
