//! Property tests for the graph ↔ edge-table conversion.

use std::collections::BTreeSet;

use proptest::prelude::*;

use netcoupler_network::{EdgeTable, NetworkGraph};

fn edge_table(n: usize, pairs: &[(usize, usize)], isolated: &[usize]) -> EdgeTable {
    let mut table = EdgeTable::new();
    for &(a, b) in pairs {
        if a % n != b % n {
            table.push_edge(format!("v{}", a % n), format!("v{}", b % n));
        }
    }
    for &i in isolated {
        table.push_isolated(format!("v{}", i % n));
    }
    table
}

proptest! {
    #[test]
    fn edge_table_round_trips_edge_and_node_sets(
        n in 2usize..12,
        pairs in prop::collection::vec((0usize..12, 0usize..12), 0..30),
        isolated in prop::collection::vec(0usize..12, 0..4),
    ) {
        let table = edge_table(n, &pairs, &isolated);
        let graph = NetworkGraph::from_edge_table(&table).unwrap();
        let round = graph.to_edge_table();

        prop_assert_eq!(round.edge_set(), table.edge_set());
        let before: BTreeSet<String> = table.node_set().into_iter().collect();
        let after: BTreeSet<String> = round.node_set().into_iter().collect();
        prop_assert_eq!(before, after);

        // A second pass is a fixed point.
        let again = NetworkGraph::from_edge_table(&round).unwrap().to_edge_table();
        prop_assert_eq!(again, round);
    }

    #[test]
    fn each_edge_appears_once_in_canonical_order(
        n in 2usize..12,
        pairs in prop::collection::vec((0usize..12, 0usize..12), 0..30),
    ) {
        let table = edge_table(n, &pairs, &[]);
        let round = NetworkGraph::from_edge_table(&table).unwrap().to_edge_table();
        let edges: Vec<(String, String)> = round.iter().filter_map(|r| r.normalized()).collect();
        let mut sorted = edges.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&edges, &sorted);
        for row in round.iter().filter(|r| r.to.is_some()) {
            prop_assert!(row.to.as_deref().is_some_and(|to| row.from.as_str() < to));
        }
    }
}
