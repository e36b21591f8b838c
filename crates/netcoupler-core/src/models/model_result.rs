use serde::{Deserialize, Serialize};

use crate::errors::FitError;

/// The focal coefficient of one fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectEstimate {
    pub estimate: f64,
    pub std_error: f64,
    pub p_value: f64,
}

/// One model in a node's adjustment sequence. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    /// Position in the adjustment sequence, 0 = minimal adjustment.
    pub step: usize,
    pub adjusted_for: Vec<String>,
    pub n_obs: usize,
    pub converged: bool,
    /// `None` when the fit failed.
    pub effect: Option<EffectEstimate>,
    /// Failure cause, set whenever `effect` is `None` or the fit did not converge.
    pub failure: Option<String>,
}

impl ModelResult {
    pub fn fitted(step: usize, adjusted_for: Vec<String>, n_obs: usize, effect: EffectEstimate) -> Self {
        Self {
            step,
            adjusted_for,
            n_obs,
            converged: true,
            effect: Some(effect),
            failure: None,
        }
    }

    pub fn failed(step: usize, adjusted_for: Vec<String>, n_obs: usize, error: &FitError) -> Self {
        Self {
            step,
            adjusted_for,
            n_obs,
            converged: false,
            effect: None,
            failure: Some(error.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        !self.converged || self.effect.is_none() || self.failure.is_some()
    }

    pub fn p_value(&self) -> Option<f64> {
        self.effect.map(|e| e.p_value)
    }

    pub fn estimate(&self) -> Option<f64> {
        self.effect.map(|e| e.estimate)
    }
}
