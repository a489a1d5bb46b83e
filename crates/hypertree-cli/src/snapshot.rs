//! Serializable view of a laid-out tree.

use hypertree_core::{geodesic, Complex, Geodesic, HyperTransform, NodeId, Tree};
use serde::Serialize;

/// Node circles and edge geodesics of every attached node.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub label: String,
    pub weight: f64,
    /// Center after the view transform, `[re, im]`.
    pub center: Complex,
    /// Euclidean radius of the drawn circle.
    pub radius: f64,
    pub border: bool,
}

#[derive(Debug, Serialize)]
pub struct EdgeSnapshot {
    pub parent: NodeId,
    pub child: NodeId,
    pub geodesic: Geodesic,
}

/// One animation frame of a focus change.
#[derive(Debug, Serialize)]
pub struct FrameSnapshot {
    pub index: usize,
    pub transform: HyperTransform,
    /// Where the focused node is displayed after this frame.
    pub focus_center: Complex,
}

impl Snapshot {
    /// Captures the current state of `tree`, nodes in preorder.
    pub fn capture(tree: &Tree) -> Self {
        let order = tree.preorder(tree.root());
        let mut nodes = Vec::with_capacity(order.len());
        let mut edges = Vec::with_capacity(order.len().saturating_sub(1));

        for id in order {
            let node = &tree[id];
            nodes.push(NodeSnapshot {
                id,
                label: node.label.clone(),
                weight: node.weight,
                center: node.location.euclidean.center,
                radius: node.location.euclidean.radius,
                border: node.location.hyper.is_border(),
            });
            if let Some(parent) = node.parent() {
                edges.push(EdgeSnapshot {
                    parent,
                    child: id,
                    geodesic: geodesic(
                        tree[parent].location.hyper.center(),
                        node.location.hyper.center(),
                    ),
                });
            }
        }
        Self { nodes, edges }
    }
}

/// Serializes `value` as JSON, pretty-printed when asked.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
