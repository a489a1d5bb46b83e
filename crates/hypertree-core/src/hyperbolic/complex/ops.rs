//! Complex helpers used throughout the geometry core.

use super::Complex;
use crate::error::{HyperError, HyperResult};
use crate::hyperbolic::xmath::ATANH_LIMIT;

/// Extension operations on [`Complex`] needed by the disk geometry.
///
/// `num_complex` already provides `+ - * /`, scalar multiply/divide, `conj`,
/// negation, `arg` and `from_polar`. This trait adds the disk-specific
/// vocabulary on top.
pub trait ComplexExt: Sized {
    /// Magnitude `|z|`.
    fn mag(&self) -> f64;

    /// Squared magnitude `|z|^2`.
    fn abs2(&self) -> f64;

    /// Unit complex with the same argument.
    ///
    /// Precondition: `z != 0`. A zero input yields NaN components.
    fn normalized(&self) -> Self;

    /// Builds a complex from an argument and a magnitude.
    fn polar(arg: f64, mag: f64) -> Self;

    /// True when `|z| < 1`.
    fn is_in_disk(&self) -> bool;

    /// Scales `z` back onto the unit circle when `|z| > 1`, otherwise returns it unchanged.
    fn clamp_to_disk(&self) -> Self;

    /// Scales `z` down to magnitude [`ATANH_LIMIT`] when it is not already
    /// below it, so the result can parameterize a translation.
    fn pull_inside(&self) -> Self;

    /// Component-wise comparison within `eps`.
    fn approx_eq(&self, other: &Self, eps: f64) -> bool;
}

impl ComplexExt for Complex {
    #[inline]
    fn mag(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn abs2(&self) -> f64 {
        self.norm_sqr()
    }

    #[inline]
    fn normalized(&self) -> Self {
        debug_assert!(
            self.norm_sqr() > 0.0,
            "normalized() called on zero complex"
        );
        let mag = self.norm();
        Complex::new(self.re / mag, self.im / mag)
    }

    #[inline]
    fn polar(arg: f64, mag: f64) -> Self {
        Complex::from_polar(mag, arg)
    }

    #[inline]
    fn is_in_disk(&self) -> bool {
        self.norm_sqr() < 1.0
    }

    #[inline]
    fn clamp_to_disk(&self) -> Self {
        if self.norm_sqr() > 1.0 {
            self.normalized()
        } else {
            *self
        }
    }

    #[inline]
    fn pull_inside(&self) -> Self {
        let mag = self.norm();
        if mag >= ATANH_LIMIT {
            *self * (ATANH_LIMIT / mag)
        } else {
            *self
        }
    }

    #[inline]
    fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        (self.re - other.re).abs() < eps && (self.im - other.im).abs() < eps
    }
}

/// Validates a point arriving from outside the core (settings, CLI, UI).
///
/// # Errors
///
/// `HyperError::PointOutsideDisk` if the point is not strictly inside the
/// unit disk, or if either component is NaN.
pub fn checked_disk_point(re: f64, im: f64) -> HyperResult<Complex> {
    let z = Complex::new(re, im);
    if z.is_nan() || !z.is_in_disk() {
        return Err(HyperError::PointOutsideDisk {
            re,
            im,
            norm: z.norm(),
        });
    }
    Ok(z)
}
