//! NetCoupler: classify how each variable of a correlated network links to
//! one exposure or outcome.
//!
//! The workflow is four calls:
//!
//! 1. [`standardize`] the network columns (log, optional residualization, z-score)
//! 2. [`estimate_network`] learns the conditional-independence graph
//! 3. [`as_edge_table`] flattens it into the `(from, to)` interchange format
//! 4. [`estimate_exposure_links`] / [`estimate_outcome_links`] fit one model
//!    sequence per node and label it direct, ambiguous, none or undetermined
//!
//! [`NetCoupler`] bundles the same operations behind one loaded configuration.

pub mod prelude;

use tracing::debug;

pub use netcoupler_core::config::{
    AdjustmentStrategy, ExecutionConfig, ExecutionStrategy, LinkConfig, NetworkConfig,
};
pub use netcoupler_core::errors::{
    ConfigError, ErrorCode, FitError, GraphError, LinkError, NetCouplerError, NetCouplerResult,
    TableError,
};
pub use netcoupler_core::models::{
    EffectClass, FittedModel, LinkDirection, LinkEstimate, LinkEstimateTable, ModelFamily,
    ModelResult, ModelSpec,
};
pub use netcoupler_core::table::{ColumnSelector, DataTable};
pub use netcoupler_core::tracing_setup::init_tracing;
pub use netcoupler_core::traits::ModelFitter;
pub use netcoupler_core::NetCouplerConfig;
pub use netcoupler_links::LinkEstimator;
pub use netcoupler_network::{EdgeRow, EdgeTable, GraphLearner, NetworkGraph, PcSkeleton};
pub use netcoupler_stats::{GeneralizedLinearModel, LinearModel};

/// Log-transform and scale the selected columns, optionally residualized on
/// `regressed_on`. Other columns pass through.
pub fn standardize(
    table: &DataTable,
    columns: &ColumnSelector,
    regressed_on: Option<&[String]>,
) -> NetCouplerResult<DataTable> {
    netcoupler_stats::standardize(table, columns, regressed_on)
}

/// Learn the network over the selected columns.
pub fn estimate_network(
    table: &DataTable,
    columns: &ColumnSelector,
    config: &NetworkConfig,
) -> NetCouplerResult<NetworkGraph> {
    netcoupler_network::estimate_network(table, columns, config)
}

/// Flatten a network into its edge table.
pub fn as_edge_table(graph: &NetworkGraph) -> EdgeTable {
    graph.to_edge_table()
}

/// Classify every node's link from `exposure`.
pub fn estimate_exposure_links(
    table: &DataTable,
    edges: &EdgeTable,
    exposure: &str,
    fitter: &dyn ModelFitter,
    adjustment: &[String],
    config: &LinkConfig,
    strategy: ExecutionStrategy,
) -> NetCouplerResult<LinkEstimateTable> {
    LinkEstimator::new(config.clone(), strategy)
        .estimate_exposure_links(table, edges, exposure, fitter, adjustment)
}

/// Classify every node's link to `outcome`.
pub fn estimate_outcome_links(
    table: &DataTable,
    edges: &EdgeTable,
    outcome: &str,
    fitter: &dyn ModelFitter,
    adjustment: &[String],
    config: &LinkConfig,
    strategy: ExecutionStrategy,
) -> NetCouplerResult<LinkEstimateTable> {
    LinkEstimator::new(config.clone(), strategy)
        .estimate_outcome_links(table, edges, outcome, fitter, adjustment)
}

/// Holds one configuration and runs the whole workflow with it.
#[derive(Debug, Clone, Default)]
pub struct NetCoupler {
    config: NetCouplerConfig,
}

impl NetCoupler {
    pub fn new(config: NetCouplerConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a TOML file, with environment overrides.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> NetCouplerResult<Self> {
        let config = NetCouplerConfig::load(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &NetCouplerConfig {
        &self.config
    }

    pub fn standardize(
        &self,
        table: &DataTable,
        columns: &ColumnSelector,
        regressed_on: Option<&[String]>,
    ) -> NetCouplerResult<DataTable> {
        standardize(table, columns, regressed_on)
    }

    pub fn estimate_network(
        &self,
        table: &DataTable,
        columns: &ColumnSelector,
    ) -> NetCouplerResult<NetworkGraph> {
        estimate_network(table, columns, &self.config.network)
    }

    pub fn estimate_exposure_links(
        &self,
        table: &DataTable,
        edges: &EdgeTable,
        exposure: &str,
        fitter: &dyn ModelFitter,
        adjustment: &[String],
    ) -> NetCouplerResult<LinkEstimateTable> {
        LinkEstimator::from_config(&self.config)
            .estimate_exposure_links(table, edges, exposure, fitter, adjustment)
    }

    pub fn estimate_outcome_links(
        &self,
        table: &DataTable,
        edges: &EdgeTable,
        outcome: &str,
        fitter: &dyn ModelFitter,
        adjustment: &[String],
    ) -> NetCouplerResult<LinkEstimateTable> {
        LinkEstimator::from_config(&self.config)
            .estimate_outcome_links(table, edges, outcome, fitter, adjustment)
    }
}
