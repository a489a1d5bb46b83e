//! Hyperbolic tree layout in the Poincare disk.
//!
//! Lays out arbitrarily large trees in the unit disk so that the whole tree
//! stays visible while the region around the focus is shown in detail, and
//! navigates the layout with disk automorphisms.
//!
//! # Architecture
//!
//! - **hyperbolic**: complex helpers, Mobius transforms, distances, geodesic arcs
//! - **config**: settings loading/validation and derived layout parameters
//! - **tree**: node arena with mount points for lazily loaded subtrees
//! - **location**: per-node hyperbolic and Euclidean circles
//! - **layout**: weigher and radial wedge layout
//! - **transform**: view transform application and animation frames
//! - **view**: lock-protected facade tying the passes together
//! - **error**: `HyperError` / `HyperResult`
//!
//! # Pipeline
//!
//! [`Weigher`] → [`LayerOut`] → [`Transformer`] → [`MapperToEuclidean`],
//! with [`AnimationTransforms`] producing the transforms to step through.
//!
//! # Example
//!
//! ```
//! use hypertree_core::{LayerOut, MapperToEuclidean, Transformer, Tree, Weigher};
//!
//! let mut tree = Tree::balanced(3, 4);
//! let root = tree.root();
//! Weigher::weigh(&mut tree, root);
//! LayerOut::default().layout(&mut tree, root);
//! Transformer::default().transform(&mut tree, root);
//! assert_eq!(MapperToEuclidean::map_tree(&mut tree, root), tree.len());
//! ```

pub mod config;
pub mod error;
pub mod hyperbolic;
pub mod layout;
pub mod location;
pub mod transform;
pub mod tree;
pub mod view;

// Re-exports for convenience
pub use config::{LayoutConfig, Orientation, Settings};
pub use error::{HyperError, HyperResult};
pub use hyperbolic::{
    geodesic, Complex, ComplexExt, Geodesic, HyperOptimizedTransform, HyperRotation,
    HyperTransform, HyperTranslation,
};
pub use layout::{LayerOut, Weigher};
pub use location::{EuclideanCircle, HyperCircle, Location, MapperToEuclidean};
pub use transform::{AnimationTransforms, Transformer};
pub use tree::{MountPoint, Node, NodeId, Tree};
pub use view::HyperView;
