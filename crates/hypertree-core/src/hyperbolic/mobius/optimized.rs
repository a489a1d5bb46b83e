//! Precomputed transform for whole-tree passes.

use super::types::HyperTransform;
use crate::hyperbolic::complex::{Complex, ONE};

/// A [`HyperTransform`] with its per-call constants folded in.
///
/// Dividing numerator and denominator of the general map by `theta` gives
/// `map(z) = (z + p/theta) / (1/theta + conj(p)·z)`, so each call costs one
/// multiply, two adds and one divide. Behaviorally identical to
/// [`HyperTransform::map`].
#[derive(Debug, Clone, Copy)]
pub struct HyperOptimizedTransform {
    theta_inv: Complex,
    p_over_theta: Complex,
    p_conj: Complex,
}

impl HyperOptimizedTransform {
    pub fn new(t: &HyperTransform) -> Self {
        let theta = t.theta.0;
        let p = t.xlat.0;
        let theta_inv = ONE / theta;
        Self {
            theta_inv,
            p_over_theta: p * theta_inv,
            p_conj: p.conj(),
        }
    }

    #[inline]
    pub fn map(&self, z: Complex) -> Complex {
        (z + self.p_over_theta) / (self.theta_inv + self.p_conj * z)
    }
}

impl From<&HyperTransform> for HyperOptimizedTransform {
    fn from(t: &HyperTransform) -> Self {
        Self::new(t)
    }
}
