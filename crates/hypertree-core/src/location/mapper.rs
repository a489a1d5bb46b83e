//! Hyperbolic to Euclidean circle mapping.

use super::{EuclideanCircle, HyperCircle};
use crate::hyperbolic::complex::{Complex, ComplexExt};
use crate::hyperbolic::distance::distance_to_origin_h2e;
use crate::hyperbolic::mobius::HyperTranslation;
use crate::tree::{NodeId, Tree};

/// Converts hyperbolic circles into the Euclidean circles that represent them.
///
/// A hyperbolic circle away from the origin is still a Euclidean circle, but
/// not a concentric one: its Euclidean center sits closer to the origin than
/// its hyperbolic center. The two endpoints of the diameter pointing at the
/// origin are translated out to the circle's center and the Euclidean circle
/// is fitted through them.
pub struct MapperToEuclidean;

impl MapperToEuclidean {
    /// Recomputes `out` from `hc` and clears the dirty flag.
    pub fn map_to_euclidean(hc: &mut HyperCircle, out: &mut EuclideanCircle) {
        let radius = distance_to_origin_h2e(hc.radius);
        if hc.dist == 0.0 {
            out.center = hc.center;
            out.radius = radius;
        } else {
            let u: Complex = hc.center * (radius / hc.dist);
            let a = HyperTranslation::map(u, hc.center);
            let b = HyperTranslation::map(-u, hc.center);
            out.center = (a + b) / 2.0;
            out.radius = (a - b).mag() / 2.0;
        }
        hc.is_dirty = false;
    }

    /// Remaps every dirty attached node under `root`; returns how many were recomputed.
    pub fn map_tree(tree: &mut Tree, root: NodeId) -> usize {
        let mut mapped = 0;
        for id in tree.preorder(root) {
            let location = &mut tree[id].location;
            if location.hyper.is_dirty {
                Self::map_to_euclidean(&mut location.hyper, &mut location.euclidean);
                mapped += 1;
            }
        }
        tracing::debug!(root = %root, mapped, "remapped euclidean circles");
        mapped
    }
}
