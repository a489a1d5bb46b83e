//! Mobius transforms of the Poincare disk.
//!
//! # Mathematics
//!
//! Every orientation-preserving isometry of the disk can be written as
//! a rotation followed by a translation:
//!
//! - Translation by `p` (`|p| < 1`): `z -> (z + p) / (1 + conj(p)·z)`
//! - Rotation by `theta` (`|theta| = 1`): `z -> z·theta`
//! - General transform: `z -> (z·theta + p) / (1 + conj(p)·z·theta)`
//!
//! Composition is associative but not commutative. `t1.compose(&t2)` is the
//! transform that applies `t1` first, then `t2`.
//!
//! # Module Structure
//!
//! - `types`: `HyperTranslation`, `HyperRotation`, `HyperTransform`
//! - `operations`: map, compose, inverse, two-point translation
//! - `optimized`: `HyperOptimizedTransform` for whole-tree passes
//! - `orientation`: orientation-preserving pan transforms

mod operations;
mod optimized;
mod orientation;
mod types;


pub use self::optimized::HyperOptimizedTransform;
pub use self::orientation::{
    orientation_preserving_transform, radial_orientation_preserving_transform,
};
pub use self::types::{HyperRotation, HyperTransform, HyperTranslation};
