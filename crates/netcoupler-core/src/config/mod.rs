//! Configuration for NetCoupler.
//! TOML-based; compiled defaults, then file, then `NETCOUPLER_*` environment
//! overrides. Configuration is always passed explicitly into calls.

pub mod defaults;
pub mod execution_config;
pub mod link_config;
pub mod netcoupler_config;
pub mod network_config;

pub use execution_config::{ExecutionConfig, ExecutionStrategy};
pub use link_config::{AdjustmentStrategy, LinkConfig};
pub use netcoupler_config::NetCouplerConfig;
pub use network_config::NetworkConfig;

use crate::errors::ConfigError;

/// `value` must lie strictly inside (0, 1). NaN fails.
pub(crate) fn check_probability(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be strictly between 0.0 and 1.0, got {value}"),
        })
    }
}
