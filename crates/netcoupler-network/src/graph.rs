//! Immutable undirected network over named variables.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use netcoupler_core::errors::GraphError;

use crate::edge_table::{EdgeTable, NeighborMap};

/// Evidence kept on a learned edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeEvidence {
    /// Marginal Pearson correlation of the two variables.
    pub correlation: f64,
    /// Largest conditional-independence p-value seen while the edge survived.
    pub max_p_value: f64,
}

impl EdgeEvidence {
    /// Evidence for edges read from an edge table, where none is known.
    pub const UNKNOWN: Self = Self {
        correlation: f64::NAN,
        max_p_value: f64::NAN,
    };
}

/// Undirected graph of network variables with name → index lookup.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    pub graph: UnGraph<String, EdgeEvidence>,
    node_index: HashMap<String, NodeIndex>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with the given nodes and no edges.
    pub fn with_nodes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for name in names {
            graph.ensure_node(name.as_ref());
        }
        graph
    }

    /// Rebuild a graph from an edge table. Repeated edges collapse into one.
    pub fn from_edge_table(table: &EdgeTable) -> Result<Self, GraphError> {
        let mut graph = Self::with_nodes(table.node_set());
        for row in table {
            if let Some(to) = &row.to {
                graph.add_edge(&row.from, to, EdgeEvidence::UNKNOWN)?;
            }
        }
        Ok(graph)
    }

    /// Index of `name`, adding the node if absent.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    fn require_node(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.get_node(name).ok_or_else(|| GraphError::NodeNotFound {
            node: name.to_string(),
        })
    }

    /// Connect two existing nodes, replacing the evidence of an existing edge.
    pub fn add_edge(&mut self, a: &str, b: &str, evidence: EdgeEvidence) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop {
                node: a.to_string(),
            });
        }
        let ia = self.require_node(a)?;
        let ib = self.require_node(b)?;
        self.graph.update_edge(ia, ib, evidence);
        Ok(())
    }

    /// Node names in insertion order.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph.node_weights().map(String::as_str).collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.get_node(a), self.get_node(b)) {
            (Some(ia), Some(ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    pub fn edge_evidence(&self, a: &str, b: &str) -> Option<&EdgeEvidence> {
        let edge = self.graph.find_edge(self.get_node(a)?, self.get_node(b)?)?;
        self.graph.edge_weight(edge)
    }

    /// Adjacent nodes of `node`.
    pub fn neighbors(&self, node: &str) -> Result<BTreeSet<String>, GraphError> {
        let idx = self.require_node(node)?;
        Ok(self
            .graph
            .neighbors(idx)
            .map(|n| self.graph[n].clone())
            .collect())
    }

    /// Neighbour sets of every node; isolated nodes map to an empty set.
    pub fn neighbor_map(&self) -> NeighborMap {
        self.graph
            .node_indices()
            .map(|idx| {
                let adjacent = self.graph.neighbors(idx).map(|n| self.graph[n].clone()).collect();
                (self.graph[idx].clone(), adjacent)
            })
            .collect()
    }

    /// Each edge once as (min, max) in lexicographic order, then one row per
    /// isolated node, also sorted.
    pub fn to_edge_table(&self) -> EdgeTable {
        let mut edges: Vec<(String, String)> = self
            .graph
            .edge_references()
            .map(|e| {
                let a = &self.graph[e.source()];
                let b = &self.graph[e.target()];
                if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                }
            })
            .collect();
        edges.sort();
        edges.dedup();

        let mut isolated: Vec<&String> = self
            .graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors(idx).next().is_none())
            .map(|idx| &self.graph[idx])
            .collect();
        isolated.sort();

        let mut table = EdgeTable::from_pairs(edges);
        for node in isolated {
            table.push_isolated(node.clone());
        }
        table
    }
}

/// Adjacent nodes of `node` in `graph`.
pub fn neighbors(graph: &NetworkGraph, node: &str) -> Result<BTreeSet<String>, GraphError> {
    graph.neighbors(node)
}

/// Flatten `graph` into its edge table.
pub fn to_edge_table(graph: &NetworkGraph) -> EdgeTable {
    graph.to_edge_table()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_isolated() -> NetworkGraph {
        let mut g = NetworkGraph::with_nodes(["c", "b", "a", "d"]);
        let ev = EdgeEvidence {
            correlation: 0.5,
            max_p_value: 0.001,
        };
        g.add_edge("c", "a", ev).unwrap();
        g.add_edge("b", "a", ev).unwrap();
        g.add_edge("c", "b", ev).unwrap();
        g
    }

    #[test]
    fn edge_table_is_sorted_and_lists_isolated_nodes() {
        let table = triangle_plus_isolated().to_edge_table();
        let rows: Vec<(&str, Option<&str>)> = table
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_deref()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("a", Some("b")),
                ("a", Some("c")),
                ("b", Some("c")),
                ("d", None),
            ]
        );
    }

    #[test]
    fn neighbours_and_missing_nodes() {
        let g = triangle_plus_isolated();
        assert_eq!(
            g.neighbors("a").unwrap().into_iter().collect::<Vec<_>>(),
            vec!["b", "c"]
        );
        assert!(g.neighbors("d").unwrap().is_empty());
        assert_eq!(
            g.neighbors("zzz"),
            Err(GraphError::NodeNotFound {
                node: "zzz".to_string()
            })
        );
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut g = NetworkGraph::with_nodes(["a"]);
        assert_eq!(
            g.add_edge("a", "a", EdgeEvidence::UNKNOWN),
            Err(GraphError::SelfLoop {
                node: "a".to_string()
            })
        );
    }

    #[test]
    fn repeated_edges_collapse() {
        let table = EdgeTable::from_pairs([("a", "b"), ("b", "a"), ("a", "b")]);
        let g = NetworkGraph::from_edge_table(&table).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.nodes(), vec!["a", "b"]);
    }
}
