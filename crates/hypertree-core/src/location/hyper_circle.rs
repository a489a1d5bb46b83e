//! Node location in hyperbolic space.

use serde::Serialize;

use crate::hyperbolic::complex::{Complex, ComplexExt, ORIGIN};

/// Euclidean distance from the origin beyond which a node is drawn as border.
pub const BORDER_THRESHOLD: f64 = 0.95;

/// Hyperbolic circle of a node.
///
/// `center0` is the position computed by layout and is only changed by
/// [`HyperCircle::set`]. `center` is the position under the active transform.
/// `is_dirty` is raised by every mutation and cleared once the Euclidean
/// circle has been recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperCircle {
    pub(crate) center0: Complex,
    pub(crate) center: Complex,
    pub(crate) radius: f64,
    pub(crate) dist: f64,
    pub(crate) is_border: bool,
    pub(crate) is_dirty: bool,
}

impl Default for HyperCircle {
    fn default() -> Self {
        Self {
            center0: ORIGIN,
            center: ORIGIN,
            radius: 0.0,
            dist: 0.0,
            is_border: false,
            is_dirty: true,
        }
    }
}

impl HyperCircle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the circle as computed by layout.
    pub fn set(&mut self, center: Complex, radius: f64) {
        self.center0 = center;
        self.radius = radius;
        self.place(center);
    }

    /// Restores the untransformed layout position.
    pub fn reset(&mut self) {
        self.place(self.center0);
    }

    /// Moves the current center, refreshing the cached distance and border flag.
    pub(crate) fn place(&mut self, center: Complex) {
        self.center = center;
        self.dist = center.mag();
        self.is_border = self.dist > BORDER_THRESHOLD;
        self.is_dirty = true;
    }

    #[inline]
    pub fn center0(&self) -> Complex {
        self.center0
    }

    #[inline]
    pub fn center(&self) -> Complex {
        self.center
    }

    /// Hyperbolic radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Cached `|center|`.
    #[inline]
    pub fn dist(&self) -> f64 {
        self.dist
    }

    #[inline]
    pub fn is_border(&self) -> bool {
        self.is_border
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }
}
