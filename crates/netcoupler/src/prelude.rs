//! Everything needed for a typical run.

pub use crate::{
    as_edge_table, estimate_exposure_links, estimate_network, estimate_outcome_links,
    standardize, ColumnSelector, DataTable, EdgeTable, EffectClass, ExecutionStrategy,
    GeneralizedLinearModel, LinearModel, LinkConfig, LinkEstimateTable, ModelFitter, NetCoupler,
    NetCouplerConfig, NetCouplerError, NetCouplerResult, NetworkConfig, NetworkGraph,
};
