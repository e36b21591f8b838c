//! Adjustment-set enumeration.

use std::collections::HashSet;

use tracing::trace;

use netcoupler_core::config::AdjustmentStrategy;
use netcoupler_core::errors::LinkError;
use netcoupler_core::models::LinkDirection;
use netcoupler_network::NeighborMap;

/// Ordered, non-decreasing adjustment sets for `node`.
///
/// The first set is `confounders` alone and the last is `confounders` plus
/// every neighbour of `node`; `Incremental` adds neighbours one at a time in
/// between. Always at least two steps: with no neighbours both are the
/// confounders. `node` itself is never an adjustment variable and repeated
/// names are dropped. The direction does not affect enumeration.
pub fn enumerate(
    node: &str,
    neighbors: &NeighborMap,
    confounders: &[String],
    direction: LinkDirection,
    strategy: AdjustmentStrategy,
) -> Result<Vec<Vec<String>>, LinkError> {
    let adjacent = neighbors.get(node).ok_or_else(|| LinkError::InvalidNode {
        node: node.to_string(),
    })?;

    let mut seen: HashSet<&str> = HashSet::from([node]);
    let base: Vec<String> = confounders
        .iter()
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect();
    let added: Vec<String> = adjacent
        .iter()
        .filter(|n| seen.insert(n.as_str()))
        .cloned()
        .collect();

    let mut steps = vec![base.clone()];
    match strategy {
        AdjustmentStrategy::Extremes => {
            let mut full = base;
            full.extend(added);
            steps.push(full);
        }
        AdjustmentStrategy::Incremental => {
            let mut current = base;
            for neighbor in added {
                current.push(neighbor);
                steps.push(current.clone());
            }
            if steps.len() == 1 {
                steps.push(current);
            }
        }
    }

    trace!(node, %direction, steps = steps.len(), "enumerated adjustment sets");
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn map(entries: &[(&str, Vec<&str>)]) -> NeighborMap {
        entries
            .iter()
            .map(|(k, v)| {
                (
                    k.to_string(),
                    v.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
                )
            })
            .collect()
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extremes_is_base_then_full() {
        let m = map(&[("a", vec!["c", "b"]), ("b", vec!["a"]), ("c", vec!["a"])]);
        let steps = enumerate(
            "a",
            &m,
            &strings(&["age", "sex"]),
            LinkDirection::Exposure,
            AdjustmentStrategy::Extremes,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![strings(&["age", "sex"]), strings(&["age", "sex", "b", "c"])]
        );
    }

    #[test]
    fn incremental_adds_one_neighbour_per_step() {
        let m = map(&[("a", vec!["c", "b"]), ("b", vec!["a"]), ("c", vec!["a"])]);
        let steps = enumerate(
            "a",
            &m,
            &strings(&["age"]),
            LinkDirection::Outcome,
            AdjustmentStrategy::Incremental,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                strings(&["age"]),
                strings(&["age", "b"]),
                strings(&["age", "b", "c"])
            ]
        );
    }

    #[test]
    fn isolated_node_gets_two_identical_steps() {
        let m = map(&[("z", vec![])]);
        for strategy in [AdjustmentStrategy::Extremes, AdjustmentStrategy::Incremental] {
            let steps = enumerate("z", &m, &strings(&["age"]), LinkDirection::Exposure, strategy)
                .unwrap();
            assert_eq!(steps, vec![strings(&["age"]), strings(&["age"])]);
        }
    }

    #[test]
    fn node_and_duplicates_are_not_adjusted_for() {
        let m = map(&[("a", vec!["b"]), ("b", vec!["a"])]);
        let steps = enumerate(
            "a",
            &m,
            &strings(&["age", "a", "b", "age"]),
            LinkDirection::Exposure,
            AdjustmentStrategy::Extremes,
        )
        .unwrap();
        assert_eq!(steps, vec![strings(&["age", "b"]), strings(&["age", "b"])]);
    }

    #[test]
    fn unknown_node_is_invalid() {
        let m = map(&[("a", vec![])]);
        assert_eq!(
            enumerate("q", &m, &[], LinkDirection::Exposure, AdjustmentStrategy::Extremes),
            Err(LinkError::InvalidNode {
                node: "q".to_string()
            })
        );
    }
}
