//! Error handling for NetCoupler.
//! One error enum per subsystem, `thiserror` only.
//!
//! Table, graph and config errors are fatal to the call that raised them.
//! `FitError` is recovered per node and folded into an undetermined link
//! estimate by the orchestrator.

pub mod config_error;
pub mod error_code;
pub mod fit_error;
pub mod graph_error;
pub mod link_error;
pub mod netcoupler_error;
pub mod table_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use fit_error::FitError;
pub use graph_error::GraphError;
pub use link_error::LinkError;
pub use netcoupler_error::{NetCouplerError, NetCouplerResult};
pub use table_error::TableError;
