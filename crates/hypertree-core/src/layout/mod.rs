//! Tree layout in the Poincare disk.
//!
//! [`Weigher`] derives subtree weights, then [`LayerOut`] turns them into a
//! hyperbolic circle per node.

mod layer_out;
mod weigher;

pub use layer_out::{LayerOut, KSI};
pub use weigher::Weigher;
