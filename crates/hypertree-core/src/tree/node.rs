//! Tree node and its identifier.

use std::fmt;

use serde::Serialize;

use super::MountPoint;
use crate::location::Location;

/// Index of a node in its [`Tree`](super::Tree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the displayed tree.
///
/// A negative `weight` is fixed by the author and left untouched by the
/// weigher; its magnitude still counts towards the parent's share.
#[derive(Debug, Clone)]
pub struct Node {
    pub label: String,
    pub weight: f64,
    pub(crate) children_weight: f64,
    pub(crate) min_weight: f64,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub location: Location,
    pub(crate) mount_point: Option<MountPoint>,
    pub(crate) attached: bool,
}

impl Node {
    pub(crate) fn new(label: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            label: label.into(),
            weight: 0.0,
            children_weight: 0.0,
            min_weight: 0.0,
            children: Vec::new(),
            parent,
            location: Location::default(),
            mount_point: None,
            attached: true,
        }
    }

    /// Sum of `|weight|` over the children, as of the last weighing.
    #[inline]
    pub fn children_weight(&self) -> f64 {
        self.children_weight
    }

    /// Smallest `|weight|` among the children (1 for leaves).
    #[inline]
    pub fn min_weight(&self) -> f64 {
        self.min_weight
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn mount_point(&self) -> Option<&MountPoint> {
        self.mount_point.as_ref()
    }

    /// False once the node has been replaced by a graft or removed by a prune.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
