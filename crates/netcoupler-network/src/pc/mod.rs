//! Constraint-based skeleton learning.

pub mod skeleton;

use std::collections::{BTreeMap, BTreeSet};

use netcoupler_core::config::NetworkConfig;
use netcoupler_core::errors::GraphError;
use netcoupler_stats::CorrelationMatrix;

pub use ci_test::{fisher_z_test, CiTestResult};

/// Output of a structure learner: an undirected adjacency over the
/// correlation matrix's variables, by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    pub names: Vec<String>,
    pub adjacency: Vec<BTreeSet<usize>>,
    /// Conditioning set that separated each removed pair `(i, j)`, `i < j`.
    pub separating_sets: BTreeMap<(usize, usize), Vec<usize>>,
    /// Largest p-value seen for each retained pair `(i, j)`, `i < j`.
    pub max_p_values: BTreeMap<(usize, usize), f64>,
    pub tests_performed: usize,
    /// Largest conditioning-set size that was tested.
    pub max_level: usize,
}

impl Skeleton {
    /// Retained edges as `(i, j)` with `i < j`, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, adj)| adj.iter().filter(move |&&j| j > i).map(move |&j| (i, j)))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}

/// Anything that turns a correlation matrix into an undirected skeleton.
pub trait GraphLearner: Send + Sync {
    fn learn(&self, corr: &CorrelationMatrix, alpha: f64) -> Result<Skeleton, GraphError>;

    fn name(&self) -> &str {
        "custom"
    }
}

/// Order-independent PC skeleton with Gaussian conditional-independence tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PcSkeleton {
    /// Largest conditioning-set size to test. `None` runs until no pair has
    /// enough neighbours.
    pub max_condition_size: Option<usize>,
}

impl PcSkeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_condition_size(mut self, size: usize) -> Self {
        self.max_condition_size = Some(size);
        self
    }
}

impl From<&NetworkConfig> for PcSkeleton {
    fn from(config: &NetworkConfig) -> Self {
        Self {
            max_condition_size: config.max_condition_size,
        }
    }
}

impl GraphLearner for PcSkeleton {
    fn learn(&self, corr: &CorrelationMatrix, alpha: f64) -> Result<Skeleton, GraphError> {
        skeleton::pc_skeleton(corr, alpha, self.max_condition_size)
    }

    fn name(&self) -> &str {
        "pc-stable"
    }
}
