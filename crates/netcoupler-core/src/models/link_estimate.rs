use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{EffectClass, LinkDirection, ModelResult};

/// Final record for one network node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEstimate {
    pub node: String,
    pub external: String,
    pub direction: LinkDirection,
    /// Model results in adjustment order.
    pub steps: Vec<ModelResult>,
    pub effect: EffectClass,
    pub significance_threshold: f64,
    /// Why the node is undetermined or ambiguous.
    pub diagnostic: Option<String>,
}

impl LinkEstimate {
    /// Result of the minimally adjusted model.
    pub fn unadjusted(&self) -> Option<&ModelResult> {
        self.steps.first()
    }

    /// Result of the fully adjusted model.
    pub fn fully_adjusted(&self) -> Option<&ModelResult> {
        self.steps.last()
    }
}

/// One row per (node, step), for tabular export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatLinkRow {
    pub node: String,
    pub effect: EffectClass,
    pub step: usize,
    pub adjusted_for: String,
    pub n_obs: usize,
    pub estimate: Option<f64>,
    pub std_error: Option<f64>,
    pub p_value: Option<f64>,
    pub failure: Option<String>,
}

/// All link estimates of one run, one row per node in node-set order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEstimateTable {
    pub direction: LinkDirection,
    pub external: String,
    pub rows: Vec<LinkEstimate>,
}

impl LinkEstimateTable {
    pub fn new(direction: LinkDirection, external: impl Into<String>, rows: Vec<LinkEstimate>) -> Self {
        Self {
            direction,
            external: external.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkEstimate> {
        self.rows.iter()
    }

    pub fn get(&self, node: &str) -> Option<&LinkEstimate> {
        self.rows.iter().find(|r| r.node == node)
    }

    pub fn effect_of(&self, node: &str) -> Option<EffectClass> {
        self.get(node).map(|r| r.effect)
    }

    /// Number of nodes with the given classification.
    pub fn count(&self, effect: EffectClass) -> usize {
        self.rows.iter().filter(|r| r.effect == effect).count()
    }

    /// Counts for every classification, including zeros.
    pub fn summary(&self) -> BTreeMap<EffectClass, usize> {
        EffectClass::ALL
            .iter()
            .map(|&e| (e, self.count(e)))
            .collect()
    }

    /// Nodes with the given classification, in table order.
    pub fn nodes_with(&self, effect: EffectClass) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.effect == effect)
            .map(|r| r.node.as_str())
            .collect()
    }

    /// Flatten into one row per node and adjustment step.
    pub fn flatten(&self) -> Vec<FlatLinkRow> {
        self.rows
            .iter()
            .flat_map(|row| {
                row.steps.iter().map(move |step| FlatLinkRow {
                    node: row.node.clone(),
                    effect: row.effect,
                    step: step.step,
                    adjusted_for: step.adjusted_for.join(" + "),
                    n_obs: step.n_obs,
                    estimate: step.effect.map(|e| e.estimate),
                    std_error: step.effect.map(|e| e.std_error),
                    p_value: step.effect.map(|e| e.p_value),
                    failure: step.failure.clone(),
                })
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
