//! Library-level errors

use thiserror::Error;

use crate::structural::composite::NodeId;

/// Errors raised by the pattern implementations.
///
/// Every failing operation leaves the value it was called on unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no builder configured for the director")]
    BuilderNotSet,

    #[error("missing pizza field: {0}")]
    MissingField(&'static str),

    #[error("component {component} is not a child of {parent}")]
    ComponentNotFound { parent: NodeId, component: NodeId },

    #[error("node not found in tree: {0}")]
    NodeNotFound(NodeId),

    #[error("adding {0} would make it its own descendant")]
    CycleDetected(NodeId),

    #[error("unknown operating system: {0}")]
    UnknownSystem(String),

    #[error("config error: {message}")]
    Config { message: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
