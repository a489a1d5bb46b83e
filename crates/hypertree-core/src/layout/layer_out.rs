//! Radial wedge layout.
//!
//! Every node owns an angular wedge, described by the direction it points
//! in (`orientation`) and its half-width (`half_wedge`). Its children are
//! placed on a hyperbolic circle around it, each one centered in a slice of
//! the wedge proportional to its weight. A child's own wedge is the angle
//! its slice subtends when seen from the child, so deeper levels keep
//! fanning out instead of shrinking into a thin cone.

use crate::config::LayoutConfig;
use crate::hyperbolic::complex::{Complex, ComplexExt, ORIGIN};
use crate::hyperbolic::distance::distance_to_origin_e2h;
use crate::hyperbolic::mobius::HyperTranslation;
use crate::tree::{MountPoint, NodeId, Tree};

/// Balances wedge widening against radial lengthening in [`LayerOut::compute_distance`].
pub const KSI: f64 = 4.0;

/// Assigns every node a hyperbolic circle from its weight.
///
/// Weights must be up to date, see [`Weigher`](super::Weigher).
#[derive(Debug, Clone, Default)]
pub struct LayerOut {
    config: LayoutConfig,
}

/// Pending node of the layout walk.
struct Frame {
    node: NodeId,
    center: Complex,
    half_wedge: f64,
    orientation: f64,
}

impl LayerOut {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Euclidean distance from a node to its `child_count` children.
    ///
    /// `base + (1 - 1/ksi - base) · cos(ksi · sweep / (ksi - 1 + child_count))`.
    /// Tends to `1 - 1/ksi` as the child count grows, so crowded nodes push
    /// their children further out while sparse ones stay near `base`.
    pub fn compute_distance(&self, child_count: usize) -> f64 {
        let base = self.config.base_node_distance();
        let l1 = 1.0 - 1.0 / KSI - base;
        let l2 = (KSI * self.config.sweep_factor() / (KSI - 1.0 + child_count as f64)).cos();
        base + l1 * l2
    }

    /// Places `root` at the origin and lays out everything below it.
    /// Returns the number of nodes placed.
    pub fn layout(&self, tree: &mut Tree, root: NodeId) -> usize {
        tree[root].location.hyper.set(ORIGIN, self.config.root_radius());
        let placed = 1 + self.layout_from(
            tree,
            root,
            ORIGIN,
            self.config.root_half_wedge(),
            self.config.orientation_vector().arg(),
        );
        tracing::debug!(root = %root, nodes = placed, "laid out tree");
        placed
    }

    /// Lays out the descendants of `node`, which sits at `center` with the
    /// given wedge. The node's own circle is left untouched.
    /// Returns the number of descendants placed.
    ///
    /// Centers are kept at most [`ATANH_LIMIT`](crate::hyperbolic::xmath::ATANH_LIMIT)
    /// from the origin; deep chains otherwise round onto the unit circle and
    /// every translation below them degenerates.
    pub fn layout_from(
        &self,
        tree: &mut Tree,
        node: NodeId,
        center: Complex,
        half_wedge: f64,
        orientation: f64,
    ) -> usize {
        let sign = if self.config.clockwise() { -1.0 } else { 1.0 };
        let mut placed = 0;

        // explicit worklist, trees may be arbitrarily deep
        let mut pending = vec![Frame {
            node,
            center: center.pull_inside(),
            half_wedge,
            orientation,
        }];
        while let Some(frame) = pending.pop() {
            let children = tree[frame.node].children().to_vec();
            if children.is_empty() {
                continue;
            }

            let distance = self.compute_distance(children.len());
            let child_radius = distance_to_origin_e2h(distance / 2.0);

            let children_weight = tree[frame.node].children_weight();
            let (total, equal_shares) = if children_weight > 0.0 {
                (children_weight, false)
            } else {
                (children.len() as f64, true)
            };

            let mut sweeper = frame.orientation - sign * frame.half_wedge;
            for child in children {
                let weight = if equal_shares {
                    1.0
                } else {
                    tree[child].weight.abs()
                };
                let half_share = frame.half_wedge * weight / total;
                sweeper += sign * half_share;

                let child_center =
                    HyperTranslation::map(Complex::polar(sweeper, distance), frame.center)
                        .pull_inside();
                tree[child].location.hyper.set(child_center, child_radius);

                // direction at the child of the ideal point its parent aims at
                let ideal = HyperTranslation::map(Complex::polar(sweeper, 1.0), frame.center);
                let child_orientation = HyperTranslation::map(ideal, -child_center).arg();

                // angle the slice edge subtends seen from the child
                let edge = HyperTranslation::map(
                    Complex::polar(-half_share, distance),
                    Complex::new(-distance, 0.0),
                );
                let child_half_wedge = edge.arg().abs();

                Self::record_mount_point(tree, child, child_half_wedge, child_orientation);

                pending.push(Frame {
                    node: child,
                    center: child_center,
                    half_wedge: child_half_wedge,
                    orientation: child_orientation,
                });
                placed += 1;
                sweeper += sign * half_share;
            }
        }
        placed
    }

    /// Stores the wedge a mount point was given, so a subtree grafted there
    /// later is laid out in the same slice.
    fn record_mount_point(tree: &mut Tree, child: NodeId, half_wedge: f64, orientation: f64) {
        let target = match tree[child].mount_point() {
            Some(MountPoint::Mounting { .. }) => child,
            Some(MountPoint::Mounted { .. }) => match tree.resolve_mounting(child) {
                Some(mounting) => mounting,
                None => return,
            },
            None => return,
        };
        if let Some(MountPoint::Mounting {
            half_wedge: hw,
            orientation: o,
            ..
        }) = tree[target].mount_point.as_mut()
        {
            *hw = half_wedge;
            *o = orientation;
            tracing::trace!(node = %target, half_wedge, orientation, "recorded mount point");
        }
    }
}
