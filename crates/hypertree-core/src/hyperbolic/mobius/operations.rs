//! Mobius algebra: mapping, composition and inversion.
//!
//! # Mathematics
//!
//! - Two-point translation: the `p` with `map(from, p) = to` solves
//!   `p + from = to + conj(p)·to·from`, i.e.
//!   `p = (b + a·conj(b)) / (1 - |a|^2)` with `a = to·from`, `b = to - from`
//! - Composition `t2(t1(z))`, with `d = conj(p2)·p1·theta2 + 1`:
//!   `p = (p1·theta2 + p2) / d`, `theta = theta1·(theta2 + conj(p1)·p2) / d`
//! - Inverse: `theta' = conj(theta)`, `p' = -(p·theta')`

use super::types::{HyperRotation, HyperTransform, HyperTranslation};
use crate::hyperbolic::complex::{Complex, ComplexExt, ONE};

impl HyperTranslation {
    /// Maps `z` through the translation by `p`: `(z + p) / (1 + conj(p)·z)`.
    #[inline]
    pub fn map(z: Complex, p: Complex) -> Complex {
        (z + p) / (ONE + p.conj() * z)
    }

    /// The unique translation taking `from` to `to`.
    ///
    /// This is not `to - from`: the conjugate cross term is what keeps the
    /// map an isometry of the disk.
    ///
    /// Precondition: both points strictly inside the disk. Points on the
    /// boundary make the denominator vanish and yield NaN/Inf.
    pub fn between(from: Complex, to: Complex) -> Self {
        let a = to * from;
        let b = to - from;
        let denom = 1.0 - a.abs2();
        debug_assert!(denom > 0.0, "translation between boundary points");
        Self((b + a * b.conj()) / denom)
    }

    /// Applies this translation to `z`.
    #[inline]
    pub fn translate(&self, z: Complex) -> Complex {
        Self::map(z, self.0)
    }

    /// The opposite translation.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self(-self.0)
    }
}

impl HyperRotation {
    /// Rotates `z` by `theta`.
    #[inline]
    pub fn map(z: Complex, theta: Complex) -> Complex {
        z * theta
    }

    /// Applies this rotation to `z`.
    #[inline]
    pub fn rotate(&self, z: Complex) -> Complex {
        z * self.0
    }

    /// The opposite rotation.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self(self.0.conj())
    }
}

impl HyperTransform {
    /// The null transform.
    #[inline]
    pub fn identity() -> Self {
        Self {
            theta: HyperRotation::IDENTITY,
            xlat: HyperTranslation::IDENTITY,
        }
    }

    #[inline]
    pub fn new(theta: HyperRotation, xlat: HyperTranslation) -> Self {
        Self { theta, xlat }
    }

    /// Pure translation by `p`.
    #[inline]
    pub fn translation(p: Complex) -> Self {
        Self::new(HyperRotation::IDENTITY, HyperTranslation::new(p))
    }

    /// Pure translation taking `from` to `to`.
    #[inline]
    pub fn translation_between(from: Complex, to: Complex) -> Self {
        Self::new(HyperRotation::IDENTITY, HyperTranslation::between(from, to))
    }

    /// Pure rotation about the origin.
    #[inline]
    pub fn rotation(theta: HyperRotation) -> Self {
        Self::new(theta, HyperTranslation::IDENTITY)
    }

    /// `(z·theta + p) / (1 + conj(p)·z·theta)`
    #[inline]
    pub fn map(&self, z: Complex) -> Complex {
        let p = self.xlat.0;
        let zt = z * self.theta.0;
        (zt + p) / (ONE + p.conj() * zt)
    }

    /// Transform applying `self` first, then `other`.
    ///
    /// The rotation component is renormalized to unit magnitude to stop
    /// drift over long chains of compositions.
    pub fn compose(&self, other: &HyperTransform) -> HyperTransform {
        let p1 = self.xlat.0;
        let t1 = self.theta.0;
        let p2 = other.xlat.0;
        let t2 = other.theta.0;

        let denom = p2.conj() * p1 * t2 + ONE;
        let p = (p1 * t2 + p2) / denom;
        let theta = t1 * (t2 + p1.conj() * p2) / denom;

        HyperTransform {
            theta: HyperRotation(theta.normalized()),
            xlat: HyperTranslation(p),
        }
    }

    /// The transform undoing `self`.
    #[inline]
    pub fn inverse(&self) -> HyperTransform {
        let theta = self.theta.0.conj();
        HyperTransform {
            theta: HyperRotation(theta),
            xlat: HyperTranslation(-(self.xlat.0 * theta)),
        }
    }

    /// True for the null transform (exact comparison).
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl From<HyperTranslation> for HyperTransform {
    fn from(xlat: HyperTranslation) -> Self {
        HyperTransform::new(HyperRotation::IDENTITY, xlat)
    }
}

impl From<HyperRotation> for HyperTransform {
    fn from(theta: HyperRotation) -> Self {
        HyperTransform::rotation(theta)
    }
}
