//! Flattened `(from, to)` view of a network graph.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// node → adjacent nodes. Every node is a key, isolated nodes map to an
/// empty set.
pub type NeighborMap = BTreeMap<String, BTreeSet<String>>;

/// One row of an edge table. `to == None` lists an isolated node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeRow {
    pub from: String,
    pub to: Option<String>,
}

impl EdgeRow {
    pub fn edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: Some(to.into()),
        }
    }

    pub fn isolated(node: impl Into<String>) -> Self {
        Self {
            from: node.into(),
            to: None,
        }
    }

    /// The edge as a (min, max) pair, or `None` for an isolated-node row.
    pub fn normalized(&self) -> Option<(String, String)> {
        let to = self.to.as_ref()?;
        if self.from <= *to {
            Some((self.from.clone(), to.clone()))
        } else {
            Some((to.clone(), self.from.clone()))
        }
    }
}

/// Undirected edges as rows. Direction within a row carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTable {
    pub rows: Vec<EdgeRow>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(from, to)` pairs.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            rows: pairs.into_iter().map(|(a, b)| EdgeRow::edge(a, b)).collect(),
        }
    }

    pub fn push_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.rows.push(EdgeRow::edge(from, to));
    }

    pub fn push_isolated(&mut self, node: impl Into<String>) {
        self.rows.push(EdgeRow::isolated(node));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeRow> {
        self.rows.iter()
    }

    /// Distinct node names in order of first appearance (`from` before `to`).
    pub fn node_set(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for row in &self.rows {
            for name in std::iter::once(&row.from).chain(row.to.as_ref()) {
                if seen.insert(name.as_str()) {
                    nodes.push(name.clone());
                }
            }
        }
        nodes
    }

    /// Distinct undirected edges as (min, max) pairs. Self-loop rows are ignored.
    pub fn edge_set(&self) -> BTreeSet<(String, String)> {
        self.rows
            .iter()
            .filter_map(EdgeRow::normalized)
            .filter(|(a, b)| a != b)
            .collect()
    }

    /// Neighbour sets of every node in the table.
    pub fn neighbor_map(&self) -> NeighborMap {
        let mut map: NeighborMap = self
            .node_set()
            .into_iter()
            .map(|n| (n, BTreeSet::new()))
            .collect();
        for (a, b) in self.edge_set() {
            map.entry(a.clone()).or_default().insert(b.clone());
            map.entry(b).or_default().insert(a);
        }
        map
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a EdgeTable {
    type Item = &'a EdgeRow;
    type IntoIter = std::slice::Iter<'a, EdgeRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
