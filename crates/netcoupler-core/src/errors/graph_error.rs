//! Network graph errors.

use super::error_code::{self, ErrorCode};

/// Errors raised by graph construction and graph queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("node not found in network graph: {node}")]
    NodeNotFound { node: String },

    #[error("self-loop on {node} is not allowed in a network graph")]
    SelfLoop { node: String },

    #[error("network needs at least {min} variables, got {actual}")]
    TooFewNodes { min: usize, actual: usize },

    #[error("not enough complete observations to learn the network: {n_obs}")]
    InsufficientObservations { n_obs: usize },

    #[error("invalid significance level {alpha}: must be in (0, 1)")]
    InvalidAlpha { alpha: f64 },
}

impl ErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NodeNotFound { .. } => error_code::NODE_NOT_FOUND,
            _ => error_code::GRAPH_ERROR,
        }
    }
}
