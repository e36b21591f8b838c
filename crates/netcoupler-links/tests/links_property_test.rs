//! Property tests for enumeration, classification and row counts.

use std::collections::BTreeSet;

use proptest::prelude::*;

use netcoupler_core::config::AdjustmentStrategy;
use netcoupler_core::errors::FitError;
use netcoupler_core::models::{
    CoefficientSummary, EffectClass, EffectEstimate, FittedModel, LinkDirection, ModelResult,
    ModelSpec,
};
use netcoupler_core::table::DataTable;
use netcoupler_links::{classify, enumerate, ClassifyOptions, LinkEstimator};
use netcoupler_network::EdgeTable;

fn results(steps: &[(f64, f64)]) -> Vec<ModelResult> {
    steps
        .iter()
        .enumerate()
        .map(|(k, &(estimate, p_value))| {
            ModelResult::fitted(
                k,
                Vec::new(),
                100,
                EffectEstimate {
                    estimate,
                    std_error: 0.1,
                    p_value,
                },
            )
        })
        .collect()
}

fn edge_table(pairs: &[(usize, usize)], isolated: &[usize]) -> EdgeTable {
    let mut table = EdgeTable::new();
    for &(a, b) in pairs {
        if a != b {
            table.push_edge(format!("v{a}"), format!("v{b}"));
        }
    }
    for &i in isolated {
        table.push_isolated(format!("v{i}"));
    }
    table
}

fn constant_fitter(spec: &ModelSpec, _data: &DataTable) -> Result<FittedModel, FitError> {
    Ok(FittedModel {
        family: spec.family,
        coefficients: vec![CoefficientSummary {
            term: spec.focal.clone(),
            estimate: 1.0,
            std_error: 0.1,
            statistic: 10.0,
            p_value: 0.001,
        }],
        n_obs: 100,
        converged: true,
        iterations: 1,
    })
}

proptest! {
    #[test]
    fn classification_follows_the_rules(
        steps in prop::collection::vec((-1.0_f64..1.0, 0.0_f64..1.0), 1..6)
    ) {
        let opts = ClassifyOptions::default();
        let alpha = opts.significance_threshold;
        let c = classify(&results(&steps), &opts);

        let all_significant = steps.iter().all(|&(_, p)| p < alpha);
        let first_positive = steps[0].0 > 0.0;
        let same_sign = steps.iter().all(|&(e, _)| (e > 0.0) == first_positive);
        let expected = if steps[0].1 >= alpha {
            EffectClass::NoEffect
        } else if all_significant && same_sign {
            EffectClass::Direct
        } else {
            EffectClass::Ambiguous
        };
        prop_assert_eq!(c.effect, expected);

        // Pure function of its inputs.
        prop_assert_eq!(classify(&results(&steps), &opts), c);
    }

    #[test]
    fn adjustment_sets_grow_monotonically(
        pairs in prop::collection::vec((0usize..8, 0usize..8), 0..20),
        node in 0usize..8,
        incremental in any::<bool>(),
    ) {
        let mut edges = edge_table(&pairs, &[]);
        edges.push_isolated(format!("v{node}"));
        let map = edges.neighbor_map();
        let confounders = vec!["age".to_string(), "sex".to_string()];
        let strategy = if incremental {
            AdjustmentStrategy::Incremental
        } else {
            AdjustmentStrategy::Extremes
        };
        let name = format!("v{node}");
        let steps = enumerate(&name, &map, &confounders, LinkDirection::Exposure, strategy).unwrap();

        prop_assert!(steps.len() >= 2);
        prop_assert_eq!(&steps[0], &confounders);
        for w in steps.windows(2) {
            let before: BTreeSet<&String> = w[0].iter().collect();
            let after: BTreeSet<&String> = w[1].iter().collect();
            prop_assert!(before.is_subset(&after));
        }
        let full: BTreeSet<String> = steps.last().unwrap().iter().cloned().collect();
        let mut expected: BTreeSet<String> = map[&name].clone();
        expected.extend(confounders.iter().cloned());
        prop_assert_eq!(full, expected);
    }

    #[test]
    fn one_row_per_distinct_node(
        pairs in prop::collection::vec((0usize..10, 0usize..10), 0..20),
        isolated in prop::collection::vec(0usize..10, 0..3),
    ) {
        let mut columns: Vec<(String, Vec<f64>)> =
            (0..10).map(|i| (format!("v{i}"), vec![0.0; 12])).collect();
        columns.push(("exposure".to_string(), vec![0.0; 12]));
        let table = DataTable::from_numeric(columns).unwrap();
        let edges = edge_table(&pairs, &isolated);

        let result = LinkEstimator::default()
            .estimate_exposure_links(&table, &edges, "exposure", &constant_fitter, &[])
            .unwrap();
        prop_assert_eq!(result.len(), edges.node_set().len());
        let nodes: Vec<String> = result.iter().map(|r| r.node.clone()).collect();
        prop_assert_eq!(nodes, edges.node_set());
        prop_assert_eq!(result.count(EffectClass::Direct), result.len());
    }
}
