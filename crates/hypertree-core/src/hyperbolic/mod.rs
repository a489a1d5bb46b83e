//! Hyperbolic geometry in the Poincare disk.
//!
//! - [`complex`]: complex value type and disk helpers
//! - [`mobius`]: translations, rotations and their compositions
//! - [`distance`]: hyperbolic/Euclidean distance conversions
//! - [`xmath`]: angle and trig helpers
//! - [`arc`]: geodesic arcs for edge drawing

pub mod arc;
pub mod complex;
pub mod distance;
pub mod mobius;
pub mod xmath;

pub use arc::{geodesic, Geodesic};
pub use complex::{
    checked_disk_point, Complex, ComplexExt, EAST, NORTH, ONE, ORIGIN, SOUTH, WEST, ZERO,
};
pub use distance::{
    distance_to_origin_e2h, distance_to_origin_h2e, euclidean_distance, hyperbolic_distance,
};
pub use mobius::{
    orientation_preserving_transform, radial_orientation_preserving_transform,
    HyperOptimizedTransform, HyperRotation, HyperTransform, HyperTranslation,
};
