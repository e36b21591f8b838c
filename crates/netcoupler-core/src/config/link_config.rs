use serde::{Deserialize, Serialize};

use super::{check_probability, defaults};
use crate::errors::ConfigError;

/// How the adjustment sequence between "confounders only" and
/// "confounders plus all neighbours" is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentStrategy {
    /// Two steps: minimal and fully adjusted.
    #[default]
    Extremes,
    /// Add neighbours one at a time, in name order.
    Incremental,
}

/// Link classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// p-value below which a coefficient counts as significant.
    pub significance_threshold: f64,
    /// A direct effect must keep the same sign at every step.
    pub require_consistent_sign: bool,
    /// Fits with fewer complete rows are recorded as failed.
    pub min_observations: usize,
    pub adjustment_strategy: AdjustmentStrategy,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            significance_threshold: defaults::DEFAULT_SIGNIFICANCE_THRESHOLD,
            require_consistent_sign: defaults::DEFAULT_REQUIRE_CONSISTENT_SIGN,
            min_observations: defaults::DEFAULT_MIN_OBSERVATIONS,
            adjustment_strategy: AdjustmentStrategy::default(),
        }
    }
}

impl LinkConfig {
    /// Reject thresholds outside (0, 1) and a zero observation floor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("links.significance_threshold", self.significance_threshold)?;
        if self.min_observations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "links.min_observations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
