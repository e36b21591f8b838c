use serde::{Deserialize, Serialize};

use super::{check_probability, defaults};
use crate::errors::ConfigError;

/// Network structure-learning configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Significance level of the conditional-independence tests.
    pub alpha: f64,
    /// Largest conditioning-set size to test. `None` runs to completion.
    pub max_condition_size: Option<usize>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_NETWORK_ALPHA,
            max_condition_size: None,
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("network.alpha", self.alpha)
    }
}
