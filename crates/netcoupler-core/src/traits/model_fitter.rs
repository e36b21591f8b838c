use crate::errors::FitError;
use crate::models::{FittedModel, ModelFamily, ModelSpec};
use crate::table::DataTable;

/// Model-fitting capability: given a model spec and a dataset, return
/// per-predictor estimates, standard errors and p-values.
///
/// Implementations drop rows with a missing value in any model variable.
/// Any conforming fitter (linear, generalized linear, or external) can be
/// handed to the link engine.
pub trait ModelFitter: Send + Sync {
    fn fit(&self, spec: &ModelSpec, data: &DataTable) -> Result<FittedModel, FitError>;

    /// Family the fitter estimates. Copied into every `ModelSpec` it receives.
    fn family(&self) -> ModelFamily {
        ModelFamily::Gaussian
    }

    /// Human-readable fitter name.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> ModelFitter for F
where
    F: Fn(&ModelSpec, &DataTable) -> Result<FittedModel, FitError> + Send + Sync,
{
    fn fit(&self, spec: &ModelSpec, data: &DataTable) -> Result<FittedModel, FitError> {
        self(spec, data)
    }
}
