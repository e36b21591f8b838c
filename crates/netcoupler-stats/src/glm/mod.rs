//! Generalized linear models fitted by iteratively reweighted least squares.

pub mod family;

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use netcoupler_core::config::defaults;
use netcoupler_core::errors::FitError;
use netcoupler_core::models::{CoefficientSummary, FittedModel, ModelFamily, ModelSpec};
use netcoupler_core::table::DataTable;
use netcoupler_core::traits::ModelFitter;

use crate::design::Design;
use crate::inference::pvalue_z;
use crate::linalg;
use crate::ols::LinearModel;

pub use family::GlmFamily;

/// Result of an IRLS run.
#[derive(Debug, Clone)]
pub struct IrlsFit {
    pub beta: Array1<f64>,
    pub std_errors: Array1<f64>,
    pub deviance: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// `glm`-equivalent fitter. The Gaussian family is solved exactly by OLS.
#[derive(Debug, Clone, Copy)]
pub struct GeneralizedLinearModel {
    family: ModelFamily,
    max_iterations: usize,
    tolerance: f64,
}

impl GeneralizedLinearModel {
    pub fn new(family: ModelFamily) -> Self {
        Self {
            family,
            max_iterations: defaults::DEFAULT_GLM_MAX_ITERATIONS,
            tolerance: defaults::DEFAULT_GLM_TOLERANCE,
        }
    }

    /// Logistic regression.
    pub fn binomial() -> Self {
        Self::new(ModelFamily::Binomial)
    }

    /// Log-linear count regression.
    pub fn poisson() -> Self {
        Self::new(ModelFamily::Poisson)
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for GeneralizedLinearModel {
    fn default() -> Self {
        Self::new(ModelFamily::Gaussian)
    }
}

/// Fit `family` to `(x, y)` by IRLS, starting from the family's initial means.
///
/// Convergence is declared when the relative change in deviance drops below
/// `tolerance`. Standard errors come from `(Xᵀ W X)⁻¹` with dispersion 1.
pub fn irls(
    family: ModelFamily,
    x: &Array2<f64>,
    y: &Array1<f64>,
    max_iterations: usize,
    tolerance: f64,
) -> Result<IrlsFit, FitError> {
    let (n, p) = x.dim();
    if n <= p {
        return Err(FitError::InsufficientObservations {
            n_obs: n,
            n_params: p,
        });
    }

    let mut mu: Array1<f64> = y.mapv(|v| family.initial_mu(v));
    let mut eta: Array1<f64> = mu.mapv(|m| family.link(m));
    let mut deviance = total_deviance(family, y, &mu);
    let mut beta = Array1::<f64>::zeros(p);
    let mut xtwx = Array2::<f64>::eye(p);
    let mut converged = false;
    let mut iterations = 0;

    for iter in 1..=max_iterations {
        iterations = iter;

        let d = eta.mapv(|e| family.mu_eta(e));
        let var = mu.mapv(|m| family.variance(m));
        let w: Array1<f64> = (&d * &d) / &var;
        let z: Array1<f64> = &eta + &((y - &mu) / &d);

        let sw = w.mapv(f64::sqrt);
        let xw = x * &sw.view().insert_axis(Axis(1));
        let zw = &z * &sw;
        xtwx = xw.t().dot(&xw);
        let l = linalg::cholesky(&xtwx).ok_or(FitError::SingularDesign)?;
        beta = linalg::cholesky_solve(&l, &xw.t().dot(&zw));

        eta = x.dot(&beta);
        mu = eta.mapv(|e| family.inverse_link(e));
        let new_deviance = total_deviance(family, y, &mu);
        if !new_deviance.is_finite() {
            break;
        }
        let change = (new_deviance - deviance).abs() / (new_deviance.abs() + 0.1);
        deviance = new_deviance;
        if change < tolerance {
            converged = true;
            break;
        }
    }

    let cov = linalg::spd_inverse(&xtwx).ok_or(FitError::SingularDesign)?;
    let std_errors = cov.diag().mapv(|v| v.max(0.0).sqrt());

    Ok(IrlsFit {
        beta,
        std_errors,
        deviance,
        iterations,
        converged,
    })
}

fn total_deviance(family: ModelFamily, y: &Array1<f64>, mu: &Array1<f64>) -> f64 {
    y.iter()
        .zip(mu.iter())
        .map(|(&yi, &mi)| family.unit_deviance(yi, mi))
        .sum()
}

impl ModelFitter for GeneralizedLinearModel {
    fn fit(&self, spec: &ModelSpec, data: &DataTable) -> Result<FittedModel, FitError> {
        if self.family == ModelFamily::Gaussian {
            return LinearModel.fit(spec, data);
        }

        let design = Design::build(spec, data)?;
        if let Some(y) = design.y.as_slice() {
            self.family.validate_response(y)?;
        }

        let fit = irls(
            self.family,
            &design.x,
            &design.y,
            self.max_iterations,
            self.tolerance,
        )?;
        if !fit.converged {
            debug!(
                formula = %spec.formula(),
                iterations = fit.iterations,
                "IRLS did not converge"
            );
        }

        let coefficients = design
            .terms
            .iter()
            .enumerate()
            .map(|(j, term)| {
                let estimate = fit.beta[j];
                let std_error = fit.std_errors[j];
                let statistic = estimate / std_error;
                CoefficientSummary {
                    term: term.clone(),
                    estimate,
                    std_error,
                    statistic,
                    p_value: pvalue_z(statistic),
                }
            })
            .collect();

        Ok(FittedModel {
            family: self.family,
            coefficients,
            n_obs: design.n_obs(),
            converged: fit.converged,
            iterations: fit.iterations,
        })
    }

    fn family(&self) -> ModelFamily {
        self.family
    }

    fn name(&self) -> &str {
        "glm"
    }
}
