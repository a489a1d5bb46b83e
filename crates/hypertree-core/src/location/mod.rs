//! Per-node location state.
//!
//! Every node carries a [`Location`]: the [`HyperCircle`] written by layout
//! and transform passes, and the [`EuclideanCircle`] derived from it by
//! [`MapperToEuclidean`] for the drawing surface.

mod euclidean_circle;
mod hyper_circle;
mod mapper;

pub use euclidean_circle::EuclideanCircle;
pub use hyper_circle::{HyperCircle, BORDER_THRESHOLD};
pub use mapper::MapperToEuclidean;

use serde::Serialize;

/// Hyperbolic and Euclidean placement of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub hyper: HyperCircle,
    pub euclidean: EuclideanCircle,
}
