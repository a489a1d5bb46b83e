//! Current view transform and whole-tree application.

use crate::hyperbolic::complex::{Complex, ComplexExt, ORIGIN};
use crate::hyperbolic::mobius::{
    orientation_preserving_transform, radial_orientation_preserving_transform,
    HyperOptimizedTransform, HyperTransform,
};
use crate::tree::{NodeId, Tree};

/// Holds the accumulated pan/rotate state and applies it to node circles.
///
/// Node positions computed by layout (`center0`) are never changed here;
/// each pass recomputes `center` from them.
#[derive(Debug, Clone)]
pub struct Transformer {
    transform: HyperTransform,
    preserve_orientation: bool,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Transformer {
    pub fn new(preserve_orientation: bool) -> Self {
        Self {
            transform: HyperTransform::identity(),
            preserve_orientation,
        }
    }

    /// The current transform.
    #[inline]
    pub fn transform_of(&self) -> HyperTransform {
        self.transform
    }

    #[inline]
    pub fn preserve_orientation(&self) -> bool {
        self.preserve_orientation
    }

    pub fn set_preserve_orientation(&mut self, preserve: bool) {
        self.preserve_orientation = preserve;
    }

    pub fn set_transform(&mut self, transform: HyperTransform) {
        self.transform = transform;
    }

    /// Applies `t` after the current transform.
    pub fn compose_transform(&mut self, t: &HyperTransform) {
        self.transform = self.transform.compose(t);
    }

    /// Maps every attached node under `root` from its layout position
    /// through the current transform. Returns the number of nodes visited.
    ///
    /// Images that overshoot the unit circle through rounding are pulled
    /// back onto it. The root of the pass is never drawn as border.
    pub fn transform(&self, tree: &mut Tree, root: NodeId) -> usize {
        let fast = HyperOptimizedTransform::new(&self.transform);
        let order = tree.preorder(root);
        let mut overshoots = 0usize;

        for &id in &order {
            let hc = &mut tree[id].location.hyper;
            let mut z = fast.map(hc.center0);
            if z.abs2() > 1.0 {
                z = z.normalized();
                overshoots += 1;
            }
            hc.place(z);
        }
        if let Some(&first) = order.first() {
            tree[first].location.hyper.is_border = false;
        }

        if overshoots > 0 {
            tracing::warn!(overshoots, "clamped node centers back onto the unit circle");
        }
        tracing::debug!(root = %root, nodes = order.len(), "transformed tree");
        order.len()
    }

    /// Restores every node under `root` to its layout position and drops
    /// the current transform. Returns the number of nodes visited.
    pub fn reset(&mut self, tree: &mut Tree, root: NodeId) -> usize {
        let order = tree.preorder(root);
        for &id in &order {
            tree[id].location.hyper.reset();
        }
        self.transform = HyperTransform::identity();
        tracing::debug!(root = %root, nodes = order.len(), "reset tree transform");
        order.len()
    }

    /// Transform moving the point currently displayed at `from` to `to`.
    ///
    /// `orientation` is the layout's orientation vector; `ZERO` selects the
    /// radial variant, which keeps the direction towards the displayed
    /// root fixed.
    pub fn make_transform(
        &self,
        from: Complex,
        to: Complex,
        orientation: Complex,
    ) -> HyperTransform {
        if !self.preserve_orientation {
            return HyperTransform::translation_between(from, to);
        }
        if orientation == ORIGIN {
            let root = self.transform.map(ORIGIN);
            radial_orientation_preserving_transform(from, to, root)
        } else {
            orientation_preserving_transform(from, to, orientation)
        }
    }
}
