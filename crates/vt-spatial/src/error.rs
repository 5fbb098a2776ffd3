//! Spatial-subsystem error type.

use thiserror::Error;

use vt_core::NodeKey;

/// Errors produced by `vt-spatial`.  Both are expected outcomes (data gaps,
/// stale keys), not faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeKey, to: NodeKey },

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeKey),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
