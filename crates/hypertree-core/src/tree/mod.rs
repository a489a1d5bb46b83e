//! Displayed tree: an arena of nodes with mount points for lazily loaded
//! subtrees.

mod arena;
mod graft;
mod mount;
mod node;

pub use arena::Tree;
pub use mount::MountPoint;
pub use node::{Node, NodeId};
