//! Top-level error aggregating every subsystem error via `From` conversions.

use super::error_code::ErrorCode;
use super::{ConfigError, FitError, GraphError, LinkError, TableError};

/// Errors that escape a public NetCoupler call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetCouplerError {
    #[error("table error: {0}")]
    Table(#[from] TableError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("model fit error: {0}")]
    Fit(#[from] FitError),

    #[error("link error: {0}")]
    Link(#[from] LinkError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for NetCouplerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Table(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Fit(e) => e.error_code(),
            Self::Link(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type NetCouplerResult<T> = Result<T, NetCouplerError>;
