use serde::{Deserialize, Serialize};

use super::ModelFamily;
use crate::errors::FitError;

/// Per-predictor inference from a fitted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSummary {
    pub term: String,
    pub estimate: f64,
    pub std_error: f64,
    /// t statistic (Gaussian) or Wald z statistic (other families).
    pub statistic: f64,
    pub p_value: f64,
}

/// Output of the model-fitting capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    pub family: ModelFamily,
    /// Intercept (term `"(Intercept)"`) first, then predictors in spec order.
    pub coefficients: Vec<CoefficientSummary>,
    /// Complete-case rows used by the fit.
    pub n_obs: usize,
    pub converged: bool,
    pub iterations: usize,
}

impl FittedModel {
    pub const INTERCEPT: &'static str = "(Intercept)";

    pub fn coefficient(&self, term: &str) -> Option<&CoefficientSummary> {
        self.coefficients.iter().find(|c| c.term == term)
    }

    /// The coefficient for `term`, checked for presence and finiteness.
    pub fn require(&self, term: &str) -> Result<&CoefficientSummary, FitError> {
        let coef = self.coefficient(term).ok_or_else(|| FitError::MissingTerm {
            term: term.to_string(),
        })?;
        if !(coef.estimate.is_finite() && coef.std_error.is_finite() && coef.p_value.is_finite())
        {
            return Err(FitError::NonFiniteEstimate {
                term: term.to_string(),
            });
        }
        Ok(coef)
    }
}
