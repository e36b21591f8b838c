//! Reduce a node's sequence of model results to one effect class.

use netcoupler_core::config::LinkConfig;
use netcoupler_core::models::{EffectClass, ModelResult};

/// Classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifyOptions {
    pub significance_threshold: f64,
    pub require_consistent_sign: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self::from(&LinkConfig::default())
    }
}

impl From<&LinkConfig> for ClassifyOptions {
    fn from(config: &LinkConfig) -> Self {
        Self {
            significance_threshold: config.significance_threshold,
            require_consistent_sign: config.require_consistent_sign,
        }
    }
}

/// A label and, for undetermined or ambiguous nodes, the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub effect: EffectClass,
    pub diagnostic: Option<String>,
}

impl Classification {
    fn new(effect: EffectClass, diagnostic: Option<String>) -> Self {
        Self { effect, diagnostic }
    }
}

/// Classify one node from its results in adjustment order.
///
/// - any failed step, or no steps: `Undetermined`
/// - first step not significant: `NoEffect`, whatever follows
/// - significant at every step with one sign (when required): `Direct`
/// - otherwise `Ambiguous`
pub fn classify(results: &[ModelResult], options: &ClassifyOptions) -> Classification {
    let Some(first) = results.first() else {
        return Classification::new(
            EffectClass::Undetermined,
            Some("no model results".to_string()),
        );
    };

    let mut effects = Vec::with_capacity(results.len());
    for result in results {
        match result.effect {
            Some(effect) if !result.is_failed() && !effect.p_value.is_nan() => effects.push(effect),
            _ => {
                let cause = result
                    .failure
                    .clone()
                    .unwrap_or_else(|| "no usable estimate".to_string());
                return Classification::new(
                    EffectClass::Undetermined,
                    Some(format!("step {} failed: {}", result.step, cause)),
                );
            }
        }
    }

    let alpha = options.significance_threshold;
    if effects[0].p_value >= alpha {
        return Classification::new(EffectClass::NoEffect, None);
    }

    let first_positive = effects[0].estimate > 0.0;
    for (result, effect) in results.iter().zip(&effects).skip(1) {
        if effect.p_value >= alpha {
            return Classification::new(
                EffectClass::Ambiguous,
                Some(format!(
                    "not significant at step {} (p = {:.4}, adjusted for {})",
                    result.step,
                    effect.p_value,
                    describe(&result.adjusted_for)
                )),
            );
        }
        if options.require_consistent_sign && (effect.estimate > 0.0) != first_positive {
            return Classification::new(
                EffectClass::Ambiguous,
                Some(format!(
                    "sign changed at step {} (estimate {:.4} vs {:.4} at step {})",
                    result.step, effect.estimate, effects[0].estimate, first.step
                )),
            );
        }
    }

    Classification::new(EffectClass::Direct, None)
}

fn describe(vars: &[String]) -> String {
    if vars.is_empty() {
        "nothing".to_string()
    } else {
        vars.join(", ")
    }
}
