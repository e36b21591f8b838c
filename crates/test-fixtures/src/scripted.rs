//! A `ModelFitter` that returns pre-scripted coefficients.

use std::collections::{HashMap, HashSet};

use netcoupler_core::errors::FitError;
use netcoupler_core::models::{CoefficientSummary, FittedModel, ModelSpec};
use netcoupler_core::table::DataTable;
use netcoupler_core::traits::ModelFitter;

/// Scripted fitter keyed by network node and number of covariates.
///
/// The node is whichever of response and focal term is not the external
/// variable. Unscripted fits fail with `MissingTerm`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFitter {
    external: String,
    responses: HashMap<(String, usize), (f64, f64)>,
    failures: HashMap<String, FitError>,
    panics: HashSet<String>,
    n_obs: usize,
}

impl ScriptedFitter {
    pub fn new(external: impl Into<String>) -> Self {
        Self {
            external: external.into(),
            n_obs: 100,
            ..Default::default()
        }
    }

    /// Script the focal coefficient for `node` when fitted with `n_covariates`.
    pub fn respond(mut self, node: &str, n_covariates: usize, estimate: f64, p_value: f64) -> Self {
        self.responses
            .insert((node.to_string(), n_covariates), (estimate, p_value));
        self
    }

    /// Script the same coefficient for every step of `node`.
    pub fn respond_steps(mut self, node: &str, steps: &[(usize, f64, f64)]) -> Self {
        for &(n_cov, estimate, p_value) in steps {
            self = self.respond(node, n_cov, estimate, p_value);
        }
        self
    }

    /// Every fit involving `node` fails with `error`.
    pub fn fail(mut self, node: &str, error: FitError) -> Self {
        self.failures.insert(node.to_string(), error);
        self
    }

    /// Every fit involving `node` panics.
    pub fn panic_on(mut self, node: &str) -> Self {
        self.panics.insert(node.to_string());
        self
    }

    /// Reported sample size for every fit.
    pub fn with_n_obs(mut self, n_obs: usize) -> Self {
        self.n_obs = n_obs;
        self
    }

    fn node_of<'a>(&self, spec: &'a ModelSpec) -> &'a str {
        if spec.response == self.external {
            &spec.focal
        } else {
            &spec.response
        }
    }
}

impl ModelFitter for ScriptedFitter {
    fn fit(&self, spec: &ModelSpec, _data: &DataTable) -> Result<FittedModel, FitError> {
        let node = self.node_of(spec);
        if self.panics.contains(node) {
            panic!("scripted panic for {node}");
        }
        if let Some(error) = self.failures.get(node) {
            return Err(error.clone());
        }
        let &(estimate, p_value) = self
            .responses
            .get(&(node.to_string(), spec.covariates.len()))
            .ok_or_else(|| FitError::MissingTerm {
                term: spec.focal.clone(),
            })?;
        Ok(FittedModel {
            family: spec.family,
            coefficients: vec![
                CoefficientSummary {
                    term: FittedModel::INTERCEPT.to_string(),
                    estimate: 0.0,
                    std_error: 1.0,
                    statistic: 0.0,
                    p_value: 1.0,
                },
                CoefficientSummary {
                    term: spec.focal.clone(),
                    estimate,
                    std_error: 1.0,
                    statistic: estimate,
                    p_value,
                },
            ],
            n_obs: self.n_obs,
            converged: true,
            iterations: 1,
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
