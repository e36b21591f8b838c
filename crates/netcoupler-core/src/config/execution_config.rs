use serde::{Deserialize, Serialize};

use super::defaults;

/// How per-node work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ExecutionStrategy {
    #[default]
    Sequential,
    /// Dedicated worker pool; `None` lets rayon pick the thread count.
    Parallel { threads: Option<usize> },
}

/// Execution configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub parallel: bool,
    pub threads: Option<usize>,
}

impl ExecutionConfig {
    pub fn strategy(&self) -> ExecutionStrategy {
        if self.parallel {
            ExecutionStrategy::Parallel {
                threads: self.threads,
            }
        } else {
            ExecutionStrategy::Sequential
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            threads: None,
        }
    }
}
