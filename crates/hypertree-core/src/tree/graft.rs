//! Grafting and pruning of mounted subtrees.

use super::{MountPoint, NodeId, Tree};
use crate::error::{HyperError, HyperResult};

impl Tree {
    /// Replaces the `Mounting` node `mounting` with the root of `subtree`.
    ///
    /// The subtree's nodes are appended to the arena. Its root takes the
    /// mounting node's place in the parent's child list, inherits its
    /// hyperbolic circle and is marked `Mounted { mounting }`. The mounting
    /// node is detached and kept for [`Tree::prune`].
    ///
    /// # Errors
    /// - `NodeNotFound` if `mounting` is not in the arena
    /// - `InvalidMount` if it is detached, the tree root, or not a `Mounting` node
    pub fn graft(&mut self, mounting: NodeId, subtree: Tree) -> HyperResult<NodeId> {
        let node = self.get(mounting)?;
        if !node.attached {
            return Err(invalid(mounting, "node is detached"));
        }
        if !node.mount_point.as_ref().is_some_and(MountPoint::is_mounting) {
            return Err(invalid(mounting, "node is not a mounting point"));
        }
        let parent = node
            .parent
            .ok_or_else(|| invalid(mounting, "the tree root cannot be replaced"))?;

        let offset = self.nodes.len();
        let shift = |id: NodeId| NodeId(id.0 + offset);
        let grafted = shift(subtree.root);

        self.nodes.reserve(subtree.nodes.len());
        for mut node in subtree.nodes {
            for child in node.children.iter_mut() {
                *child = shift(*child);
            }
            node.parent = node.parent.map(shift);
            if let Some(MountPoint::Mounted { mounting: target }) = node.mount_point.as_mut() {
                *target = shift(*target);
            }
            self.nodes.push(node);
        }

        let circle = self.nodes[mounting.0].location.hyper.clone();
        let root = &mut self.nodes[grafted.0];
        root.parent = Some(parent);
        root.mount_point = Some(MountPoint::Mounted { mounting });
        root.location.hyper.clone_from(&circle);

        replace_child(self, parent, mounting, grafted);
        self.nodes[mounting.0].attached = false;

        tracing::debug!(
            mounting = %mounting,
            grafted = %grafted,
            nodes = self.nodes.len() - offset,
            "grafted subtree"
        );
        Ok(grafted)
    }

    /// Undoes the graft rooted at `mounted`, putting the original mounting
    /// node back in its place. Returns the restored mounting node.
    ///
    /// # Errors
    /// - `NodeNotFound` if `mounted` is not in the arena
    /// - `InvalidMount` if it is detached or not a `Mounted` node
    pub fn prune(&mut self, mounted: NodeId) -> HyperResult<NodeId> {
        let node = self.get(mounted)?;
        if !node.attached {
            return Err(invalid(mounted, "node is detached"));
        }
        let mounting = match node.mount_point {
            Some(MountPoint::Mounted { mounting }) => mounting,
            _ => return Err(invalid(mounted, "node is not a mounted subtree root")),
        };
        let parent = node
            .parent
            .ok_or_else(|| invalid(mounted, "mounted node has no parent"))?;

        replace_child(self, parent, mounted, mounting);
        self.nodes[mounting.0].attached = true;
        let removed = self.preorder(mounted);
        for id in &removed {
            self.nodes[id.0].attached = false;
        }

        tracing::debug!(
            mounted = %mounted,
            restored = %mounting,
            nodes = removed.len(),
            "pruned subtree"
        );
        Ok(mounting)
    }
}

fn replace_child(tree: &mut Tree, parent: NodeId, old: NodeId, new: NodeId) {
    for child in tree.nodes[parent.0].children.iter_mut() {
        if *child == old {
            *child = new;
        }
    }
}

fn invalid(node: NodeId, reason: &str) -> HyperError {
    HyperError::InvalidMount {
        node,
        reason: reason.to_string(),
    }
}
