//! Top-level NetCoupler configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ExecutionConfig, LinkConfig, NetworkConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`NETCOUPLER_*`, via `apply_env_overrides`)
/// 2. TOML file or string
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetCouplerConfig {
    pub network: NetworkConfig,
    pub links: LinkConfig,
    pub execution: ExecutionConfig,
}

impl NetCouplerConfig {
    /// Load from a TOML string. Missing sections keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `NETCOUPLER_NETWORK_ALPHA`, `NETCOUPLER_SIGNIFICANCE` and
    /// `NETCOUPLER_THREADS`. Setting a thread count turns on parallel execution.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (environment, CLI map, tests).
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup(defaults::ENV_NETWORK_ALPHA) {
            self.network.alpha = parse_override(defaults::ENV_NETWORK_ALPHA, &raw)?;
        }
        if let Some(raw) = lookup(defaults::ENV_SIGNIFICANCE) {
            self.links.significance_threshold = parse_override(defaults::ENV_SIGNIFICANCE, &raw)?;
        }
        if let Some(raw) = lookup(defaults::ENV_THREADS) {
            let threads: usize = parse_override(defaults::ENV_THREADS, &raw)?;
            self.execution.parallel = true;
            self.execution.threads = Some(threads);
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.network.validate()?;
        self.links.validate()?;
        if self.execution.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "execution.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
        path: key.to_string(),
        message: e.to_string(),
    })
}
