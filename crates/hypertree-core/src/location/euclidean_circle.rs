use serde::Serialize;

use crate::hyperbolic::complex::{Complex, ORIGIN};

/// Circle handed to the drawing surface, in unit-disk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EuclideanCircle {
    pub center: Complex,
    pub radius: f64,
}

impl Default for EuclideanCircle {
    fn default() -> Self {
        Self {
            center: ORIGIN,
            radius: 0.0,
        }
    }
}
