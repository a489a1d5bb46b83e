//! Error types for hyperbolic tree operations.
//!
//! The numeric core (complex arithmetic, Mobius transforms, layout and
//! transform walks) never fails: degenerate inputs yield NaN/Inf and are
//! guarded by `debug_assert!`. Errors are reserved for the surfaces that
//! take external input: settings, node addressing, and mount operations.

use thiserror::Error;

use crate::tree::NodeId;

/// Result type alias for hypertree operations.
pub type HyperResult<T> = Result<T, HyperError>;

/// Error type for all fallible hypertree operations.
#[derive(Error, Debug)]
pub enum HyperError {
    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Orientation string not one of radial/north/south/east/west.
    #[error("Invalid orientation '{0}' (expected radial, north, south, east or west)")]
    InvalidOrientation(String),

    /// Settings source could not be read or deserialized.
    #[error("Configuration source error: {0}")]
    Config(String),

    // ========== Geometry Errors ==========
    /// Point supplied from outside the core is not strictly inside the unit disk.
    #[error("Point ({re}, {im}) is outside the unit disk: norm {norm} >= 1")]
    PointOutsideDisk { re: f64, im: f64, norm: f64 },

    // ========== Tree Errors ==========
    /// Node id does not address a node of this tree.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Graft or prune requested on a node that cannot take part in it.
    #[error("Invalid mount operation on node {node}: {reason}")]
    InvalidMount { node: NodeId, reason: String },

    // ========== Serialization Errors ==========
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ========== Error Conversions ==========

impl From<config::ConfigError> for HyperError {
    fn from(err: config::ConfigError) -> Self {
        HyperError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for HyperError {
    fn from(err: serde_json::Error) -> Self {
        HyperError::Serialization(err.to_string())
    }
}

static_assertions::assert_impl_all!(HyperError: Send, Sync, std::error::Error);
