//! # netcoupler-core
//!
//! Foundation crate for NetCoupler: the observation table, column selection,
//! the link data model, errors, configuration, and the model-fitting
//! capability trait. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod table;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NetCouplerConfig;
pub use errors::{NetCouplerError, NetCouplerResult};
pub use models::{
    EffectClass, FittedModel, LinkDirection, LinkEstimate, LinkEstimateTable, ModelFamily,
    ModelResult, ModelSpec,
};
pub use table::{ColumnSelector, DataTable};
pub use traits::ModelFitter;
