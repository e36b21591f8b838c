//! Link-estimation request errors.

use super::error_code::{self, ErrorCode};

/// Errors raised by a malformed link-estimation request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinkError {
    #[error("invalid node: {node} is not part of the neighbour mapping")]
    InvalidNode { node: String },

    #[error("external variable {name} is also a network node")]
    ExternalIsNetworkNode { name: String },

    #[error("failed to build worker pool: {reason}")]
    WorkerPool { reason: String },
}

impl ErrorCode for LinkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidNode { .. } => error_code::INVALID_NODE,
            _ => error_code::LINK_ERROR,
        }
    }
}
