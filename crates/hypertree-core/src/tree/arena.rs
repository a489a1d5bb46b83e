//! Arena-backed tree.

use std::ops::{Index, IndexMut};

use super::{MountPoint, Node, NodeId};
use crate::error::{HyperError, HyperResult};

/// Owns every node of a displayed tree, addressed by [`NodeId`].
///
/// Nodes are never removed from the arena: grafts and prunes detach them
/// instead, so ids stay valid for the lifetime of the tree.
///
/// # Example
/// ```
/// use hypertree_core::tree::Tree;
///
/// let mut tree = Tree::new("root");
/// let root = tree.root();
/// let a = tree.add_child(root, "a").unwrap();
/// let _b = tree.add_child(a, "b").unwrap();
/// assert_eq!(tree.preorder(root).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
}

impl Tree {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_label, None)],
            root: NodeId(0),
        }
    }

    /// Complete tree of the given depth where every internal node has
    /// `branching` children. Labels are dotted paths from the root (`0.2.1`).
    pub fn balanced(depth: usize, branching: usize) -> Self {
        let mut tree = Tree::new("0");
        let mut frontier = vec![tree.root];
        for _ in 0..depth {
            let mut next = Vec::with_capacity(frontier.len() * branching);
            for parent in frontier {
                for k in 0..branching {
                    let label = format!("{}.{}", tree.nodes[parent.0].label, k);
                    next.push(tree.push(parent, label));
                }
            }
            frontier = next;
        }
        tree
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena, detached ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> HyperResult<&Node> {
        self.nodes.get(id.0).ok_or(HyperError::NodeNotFound(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> HyperResult<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(HyperError::NodeNotFound(id))
    }

    /// Appends a new child under `parent`.
    ///
    /// # Errors
    /// - `NodeNotFound` if `parent` is not in the arena
    /// - `InvalidMount` if `parent` has been detached
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> HyperResult<NodeId> {
        if !self.get(parent)?.attached {
            return Err(HyperError::InvalidMount {
                node: parent,
                reason: "cannot add a child under a detached node".to_string(),
            });
        }
        Ok(self.push(parent, label.into()))
    }

    fn push(&mut self, parent: NodeId, label: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(label, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Node ids under `start` in depth-first pre-order, `start` first.
    ///
    /// Returns an empty list for an unknown id.
    pub fn preorder(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        if !self.contains(start) {
            return order;
        }
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    /// Iterates over attached nodes with their ids, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.attached)
            .map(|(i, n)| (NodeId(i), n))
    }

    /// Marks `id` as a graft point for the subtree found at `url`.
    pub fn set_mounting(&mut self, id: NodeId, url: impl Into<String>) -> HyperResult<()> {
        self.get_mut(id)?.mount_point = Some(MountPoint::mounting(url));
        Ok(())
    }

    /// Follows `Mounted` back-references from `id` to the `Mounting` node
    /// it ultimately stands for.
    ///
    /// Returns `None` if `id` carries no mount point or the chain does not
    /// end in a `Mounting` node within `len()` hops.
    pub fn resolve_mounting(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(current.0)?.mount_point.as_ref()? {
                MountPoint::Mounting { .. } => return Some(current),
                MountPoint::Mounted { mounting } => current = *mounting,
            }
        }
        None
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Tree {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
