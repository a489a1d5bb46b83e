//! Pan transforms that do not spin the tree.
//!
//! A plain translation from `from` to `to` turns the whole picture about
//! `to` as a side effect of the disk's curvature. These constructors add a
//! corrective rotation so that the direction towards a reference point
//! (an orientation vector, or the root) is the same before and after.

use super::types::{HyperRotation, HyperTransform};
use crate::hyperbolic::complex::{Complex, ComplexExt};

/// Below this magnitude a reference image has no usable direction.
const DIRECTION_EPS: f64 = 1e-12;

/// Transform taking `from` to `to` while keeping the direction towards
/// `orientation` unchanged.
///
/// `orientation` is a point of the closed disk: a unit vector names an
/// ideal point on the boundary (a compass direction), an interior point
/// names a node. The construction:
///
/// 1. `t1` translates `from` to the origin.
/// 2. `orientation` is mapped through `t1` and through the translation
///    taking `to` to the origin; the ratio of the two images is the
///    corrective rotation.
/// 3. Result: `t1`, then the rotation, then the translation of the origin to `to`.
///
/// Falls back to a plain translation when the reference point coincides
/// with `from` or `to` (its direction is undefined there).
pub fn orientation_preserving_transform(
    from: Complex,
    to: Complex,
    orientation: Complex,
) -> HyperTransform {
    let t1 = HyperTransform::translation(-from);
    let t2_inv = HyperTransform::translation(-to);

    let o1 = t1.map(orientation);
    let o2 = t2_inv.map(orientation);
    if o1.mag() < DIRECTION_EPS || o2.mag() < DIRECTION_EPS || !(o2 / o1).is_finite() {
        return HyperTransform::translation_between(from, to);
    }

    let r = HyperTransform::rotation(HyperRotation::new((o2 / o1).normalized()));
    t1.compose(&r).compose(&HyperTransform::translation(to))
}

/// Transform taking `from` to `to` while keeping the direction towards
/// `root` unchanged; used in radial layouts where there is no compass
/// orientation to hold on to.
#[inline]
pub fn radial_orientation_preserving_transform(
    from: Complex,
    to: Complex,
    root: Complex,
) -> HyperTransform {
    orientation_preserving_transform(from, to, root)
}
