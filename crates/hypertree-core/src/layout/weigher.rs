//! Subtree weights.

use crate::tree::{NodeId, Tree};

/// Computes node weights bottom-up.
///
/// - Leaf: `children_weight = 0`, `min_weight = 1`, weight reset to `1`.
/// - Internal: `children_weight = Σ|child.weight|`,
///   `min_weight = min |child.weight|`, weight set to
///   `max(1, ln(1 + children_weight))`.
///
/// Negative weights are fixed by the author and never overwritten, but
/// their magnitude is what parents add up.
pub struct Weigher;

impl Weigher {
    /// Weighs every attached node under `root`; returns the number of nodes visited.
    ///
    /// Walks a reversed pre-order so every child is weighed before its
    /// parent without recursion.
    pub fn weigh(tree: &mut Tree, root: NodeId) -> usize {
        let order = tree.preorder(root);
        for &id in order.iter().rev() {
            let (children_weight, min_weight) = if tree[id].is_leaf() {
                (0.0, 1.0)
            } else {
                tree[id]
                    .children()
                    .iter()
                    .map(|&child| tree[child].weight.abs())
                    .fold((0.0, f64::INFINITY), |(sum, min), w| (sum + w, min.min(w)))
            };

            let node = &mut tree[id];
            node.children_weight = children_weight;
            node.min_weight = min_weight;
            if node.weight >= 0.0 {
                node.weight = if node.is_leaf() {
                    1.0
                } else {
                    children_weight.ln_1p().max(1.0)
                };
            }
        }
        tracing::debug!(root = %root, nodes = order.len(), "weighed tree");
        order.len()
    }
}
