//! Core errors.

use thiserror::Error;

use crate::node::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The node is not reachable from the scene's top-level children.
    #[error("node {0:?} has not been added to a scene")]
    NodeNotAttached(NodeId),
    /// The handle does not refer to a live node (deleted, or from another scene).
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
}

pub type CoreResult<T> = Result<T, CoreError>;
