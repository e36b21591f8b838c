//! From table columns to a learned `NetworkGraph`.

use tracing::info;

use netcoupler_core::config::defaults::MIN_NETWORK_NODES;
use netcoupler_core::config::NetworkConfig;
use netcoupler_core::errors::{GraphError, NetCouplerResult};
use netcoupler_core::table::{ColumnSelector, DataTable};
use netcoupler_stats::CorrelationMatrix;

use crate::graph::{EdgeEvidence, NetworkGraph};
use crate::pc::{GraphLearner, PcSkeleton};

/// Learn the network over the selected columns with the PC skeleton.
pub fn estimate_network(
    table: &DataTable,
    columns: &ColumnSelector,
    config: &NetworkConfig,
) -> NetCouplerResult<NetworkGraph> {
    estimate_network_with(table, columns, config, &PcSkeleton::from(config))
}

/// Learn the network over the selected columns with any `GraphLearner`.
///
/// Column problems are fatal. The returned graph's node set is exactly the
/// resolved columns, in resolution order.
pub fn estimate_network_with(
    table: &DataTable,
    columns: &ColumnSelector,
    config: &NetworkConfig,
    learner: &dyn GraphLearner,
) -> NetCouplerResult<NetworkGraph> {
    let names = columns.resolve(table)?;
    table.require_numeric(&names)?;
    if names.len() < MIN_NETWORK_NODES {
        return Err(GraphError::TooFewNodes {
            min: MIN_NETWORK_NODES,
            actual: names.len(),
        }
        .into());
    }

    let corr = CorrelationMatrix::from_table(table, &names)?;
    let skeleton = learner.learn(&corr, config.alpha)?;

    let mut graph = NetworkGraph::with_nodes(&names);
    for (i, j) in skeleton.edges() {
        let evidence = EdgeEvidence {
            correlation: corr.get(i, j),
            max_p_value: skeleton.max_p_values.get(&(i, j)).copied().unwrap_or(f64::NAN),
        };
        graph.add_edge(&names[i], &names[j], evidence)?;
    }

    info!(
        learner = learner.name(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        n_obs = corr.n_obs(),
        tests = skeleton.tests_performed,
        alpha = config.alpha,
        "estimated network"
    );
    Ok(graph)
}
