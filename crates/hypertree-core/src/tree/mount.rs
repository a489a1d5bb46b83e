//! Graft points for lazily loaded subtrees.

use serde::Serialize;

use super::NodeId;

/// Marks a node taking part in a graft.
///
/// A `Mounting` node stands in for a subtree that has not been loaded yet.
/// Layout records the wedge it was given so the subtree can later be laid
/// out in the same place. Once grafted, the subtree's root carries
/// `Mounted` with a back-reference to the node it replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MountPoint {
    Mounting {
        url: String,
        half_wedge: f64,
        orientation: f64,
    },
    Mounted {
        mounting: NodeId,
    },
}

impl MountPoint {
    pub fn mounting(url: impl Into<String>) -> Self {
        MountPoint::Mounting {
            url: url.into(),
            half_wedge: 0.0,
            orientation: 0.0,
        }
    }

    #[inline]
    pub fn is_mounting(&self) -> bool {
        matches!(self, MountPoint::Mounting { .. })
    }
}
