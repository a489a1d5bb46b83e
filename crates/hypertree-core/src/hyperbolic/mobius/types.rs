//! Type definitions for disk automorphisms.

use serde::{Deserialize, Serialize};

use crate::hyperbolic::complex::{Complex, ONE, ZERO};

/// Translation parameter `p` of a disk automorphism.
///
/// # Constraint
///
/// `|p| < 1`. The zero translation is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperTranslation(pub Complex);

/// Rotation `theta` of the disk about the origin.
///
/// # Constraint
///
/// `|theta| == 1`. `ONE` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperRotation(pub Complex);

/// General disk automorphism: rotation by `theta` followed by translation by `xlat`.
///
/// `map(z) = (z·theta + p) / (1 + conj(p)·z·theta)`
///
/// # Example
///
/// ```
/// use hypertree_core::hyperbolic::{Complex, ComplexExt, HyperTransform};
///
/// let t = HyperTransform::translation(Complex::new(0.5, 0.0));
/// let image = t.map(Complex::new(0.0, 0.0));
/// assert!(image.approx_eq(&Complex::new(0.5, 0.0), 1e-12));
///
/// let back = t.inverse().map(image);
/// assert!(back.approx_eq(&Complex::new(0.0, 0.0), 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperTransform {
    pub theta: HyperRotation,
    pub xlat: HyperTranslation,
}

impl Default for HyperTransform {
    /// The null transform.
    fn default() -> Self {
        Self::identity()
    }
}

impl HyperTranslation {
    /// The zero translation.
    pub const IDENTITY: HyperTranslation = HyperTranslation(ZERO);

    #[inline]
    pub fn new(p: Complex) -> Self {
        debug_assert!(p.norm_sqr() < 1.0, "translation parameter outside disk: {p}");
        Self(p)
    }

    /// Translation parameter.
    #[inline]
    pub fn p(&self) -> Complex {
        self.0
    }
}

impl HyperRotation {
    /// The null rotation.
    pub const IDENTITY: HyperRotation = HyperRotation(ONE);

    #[inline]
    pub fn new(theta: Complex) -> Self {
        Self(theta)
    }

    /// Rotation by `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self(Complex::from_polar(1.0, angle))
    }

    /// Rotation value.
    #[inline]
    pub fn theta(&self) -> Complex {
        self.0
    }
}
