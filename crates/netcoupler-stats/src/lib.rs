//! # netcoupler-stats
//!
//! Numerics behind NetCoupler: Cholesky-based least squares, IRLS for
//! generalized linear models, correlation and partial correlation, and
//! log/scale/residual standardization of network variables.
//!
//! `LinearModel` and `GeneralizedLinearModel` implement
//! [`netcoupler_core::ModelFitter`] and can be handed to the link engine.

pub mod correlation;
pub mod design;
pub mod glm;
pub mod inference;
pub mod linalg;
pub mod ols;
pub mod standardize;

pub use correlation::CorrelationMatrix;
pub use glm::GeneralizedLinearModel;
pub use inference::{pvalue_t, pvalue_z};
pub use ols::LinearModel;
pub use standardize::standardize;
