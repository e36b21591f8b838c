//! Model-fit failures. These are per node and per adjustment step; the
//! orchestrator records them rather than aborting a run.

use super::error_code::{self, ErrorCode};

/// Reasons a single model fit did not produce a usable coefficient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("insufficient complete observations: {n_obs} rows for {n_params} parameters")]
    InsufficientObservations { n_obs: usize, n_params: usize },

    #[error("only {n_obs} complete observations, at least {min} required")]
    TooFewObservations { n_obs: usize, min: usize },

    #[error("design matrix is singular (collinear predictors)")]
    SingularDesign,

    #[error("fit did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("non-finite estimate for term {term}")]
    NonFiniteEstimate { term: String },

    #[error("term {term} missing from fitted model")]
    MissingTerm { term: String },

    #[error("invalid response for {family} family: {reason}")]
    InvalidResponse { family: String, reason: String },

    #[error("{fitter} does not support the {family} family")]
    UnsupportedFamily { fitter: String, family: String },

    #[error("model variable unavailable: {reason}")]
    UnavailableVariable { reason: String },

    #[error("model fitter panicked: {message}")]
    Panicked { message: String },
}

impl ErrorCode for FitError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_FIT_FAILURE
    }
}
