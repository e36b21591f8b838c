//! Network estimation for NetCoupler.
//!
//! - `graph`: the immutable undirected network and its neighbour accessor
//! - `edge_table`: the `(from, to)` interchange format between learning and
//!   link estimation
//! - `pc`: the PC-skeleton conditional-independence learner
//! - `estimate`: `estimate_network`, from table columns to a `NetworkGraph`

pub mod edge_table;
pub mod estimate;
pub mod graph;
pub mod pc;

pub use edge_table::{EdgeRow, EdgeTable, NeighborMap};
pub use estimate::{estimate_network, estimate_network_with};
pub use graph::{neighbors, to_edge_table, EdgeEvidence, NetworkGraph};
pub use pc::{GraphLearner, PcSkeleton, Skeleton};
