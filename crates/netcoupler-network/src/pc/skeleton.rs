//! Stable PC skeleton search.
//!
//! Adjacencies are frozen at the start of each conditioning level, so the
//! result does not depend on the order in which pairs are visited.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use netcoupler_core::errors::GraphError;
use netcoupler_stats::CorrelationMatrix;

use super::ci_test::fisher_z_test;
use super::Skeleton;

/// Run the skeleton phase of the PC algorithm on `corr`.
///
/// An edge is removed as soon as one conditioning subset of the current
/// neighbours gives `p >= alpha`. Tests that cannot be computed (too few
/// observations, singular sub-matrix) leave the edge in place.
pub fn pc_skeleton(
    corr: &CorrelationMatrix,
    alpha: f64,
    max_condition_size: Option<usize>,
) -> Result<Skeleton, GraphError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(GraphError::InvalidAlpha { alpha });
    }
    let n_obs = corr.n_obs();
    if n_obs < 4 {
        return Err(GraphError::InsufficientObservations { n_obs });
    }

    let k = corr.len();
    let mut adjacency: Vec<BTreeSet<usize>> = (0..k)
        .map(|i| (0..k).filter(|&j| j != i).collect())
        .collect();
    let mut separating_sets = BTreeMap::new();
    let mut max_p_values: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    let mut tests_performed = 0;
    let mut max_level = 0;

    let mut level = 0;
    loop {
        if max_condition_size.is_some_and(|max| level > max) {
            break;
        }
        let frozen = adjacency.clone();
        let mut testable = false;
        let mut removed = 0;

        for i in 0..k {
            for &j in &frozen[i] {
                if !adjacency[i].contains(&j) {
                    continue;
                }
                let candidates: Vec<usize> = frozen[i].iter().copied().filter(|&c| c != j).collect();
                if candidates.len() < level {
                    continue;
                }
                testable = true;
                max_level = level;

                let key = (i.min(j), i.max(j));
                for subset in Combinations::new(&candidates, level) {
                    let Some(r) = corr.partial_correlation(i, j, &subset) else {
                        continue;
                    };
                    let Some(test) = fisher_z_test(r, n_obs, level) else {
                        continue;
                    };
                    tests_performed += 1;
                    if test.p_value >= alpha {
                        adjacency[i].remove(&j);
                        adjacency[j].remove(&i);
                        max_p_values.remove(&key);
                        separating_sets.insert(key, subset);
                        removed += 1;
                        break;
                    }
                    let entry = max_p_values.entry(key).or_insert(0.0);
                    *entry = entry.max(test.p_value);
                }
            }
        }

        debug!(level, removed, tests_performed, "pc skeleton level done");
        if !testable {
            break;
        }
        level += 1;
    }

    Ok(Skeleton {
        names: corr.names().to_vec(),
        adjacency,
        separating_sets,
        max_p_values,
        tests_performed,
        max_level,
    })
}

/// Lexicographic `size`-subsets of `items`.
struct Combinations<'a> {
    items: &'a [usize],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    fn new(items: &'a [usize], size: usize) -> Self {
        Self {
            items,
            indices: (0..size).collect(),
            done: size > items.len(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.iter().map(|&i| self.items[i]).collect();

        let n = self.items.len();
        let size = self.indices.len();
        match (0..size).rev().find(|&pos| self.indices[pos] < n - size + pos) {
            Some(pos) => {
                self.indices[pos] += 1;
                for next in pos + 1..size {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn chain_correlation(k: usize, rho: f64, n_obs: usize) -> CorrelationMatrix {
        let names = (1..=k).map(|i| format!("m{i}")).collect();
        let values = Array2::from_shape_fn((k, k), |(i, j)| rho.powi((i as i32 - j as i32).abs()));
        CorrelationMatrix::from_parts(names, values, n_obs)
    }

    #[test]
    fn combinations_enumerate_in_order() {
        let items = [3, 5, 7, 9];
        let all: Vec<Vec<usize>> = Combinations::new(&items, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![3, 5],
                vec![3, 7],
                vec![3, 9],
                vec![5, 7],
                vec![5, 9],
                vec![7, 9]
            ]
        );
        assert_eq!(Combinations::new(&items, 0).count(), 1);
        assert_eq!(Combinations::new(&items, 5).count(), 0);
    }

    #[test]
    fn markov_chain_reduces_to_a_path() {
        let corr = chain_correlation(4, 0.6, 1000);
        let skeleton = pc_skeleton(&corr, 0.01, None).unwrap();
        assert_eq!(skeleton.edges(), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(skeleton.separating_sets[&(0, 2)], vec![1]);
        assert!(skeleton.max_p_values[&(0, 1)] < 0.01);
    }

    #[test]
    fn max_condition_size_zero_keeps_marginal_edges() {
        let corr = chain_correlation(4, 0.6, 1000);
        let skeleton = pc_skeleton(&corr, 0.01, Some(0)).unwrap();
        assert_eq!(skeleton.edge_count(), 6);
        assert_eq!(skeleton.max_level, 0);
    }

    #[test]
    fn independent_variables_have_no_edges() {
        let corr = CorrelationMatrix::from_parts(
            vec!["a".into(), "b".into(), "c".into()],
            Array2::eye(3),
            200,
        );
        let skeleton = pc_skeleton(&corr, 0.05, None).unwrap();
        assert_eq!(skeleton.edge_count(), 0);
        assert_eq!(skeleton.separating_sets.len(), 3);
    }

    #[test]
    fn rejects_bad_alpha_and_tiny_samples() {
        let corr = chain_correlation(3, 0.5, 100);
        assert_eq!(
            pc_skeleton(&corr, 1.5, None),
            Err(GraphError::InvalidAlpha { alpha: 1.5 })
        );
        let tiny = chain_correlation(3, 0.5, 3);
        assert_eq!(
            pc_skeleton(&tiny, 0.05, None),
            Err(GraphError::InsufficientObservations { n_obs: 3 })
        );
    }
}
