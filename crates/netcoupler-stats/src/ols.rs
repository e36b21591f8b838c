//! Ordinary least squares with Student-t inference.

use ndarray::{Array1, Array2};

use netcoupler_core::errors::FitError;
use netcoupler_core::models::{CoefficientSummary, FittedModel, ModelFamily, ModelSpec};
use netcoupler_core::table::DataTable;
use netcoupler_core::traits::ModelFitter;

use crate::design::Design;
use crate::inference::pvalue_t;
use crate::linalg;

/// Raw least-squares solution.
#[derive(Debug, Clone)]
pub struct OlsFit {
    pub beta: Array1<f64>,
    pub std_errors: Array1<f64>,
    pub fitted: Array1<f64>,
    pub residuals: Array1<f64>,
    pub df_residual: usize,
    /// Residual variance estimate.
    pub sigma2: f64,
}

/// Solve `min ‖y − Xβ‖²` through the normal equations.
pub fn ols(x: &Array2<f64>, y: &Array1<f64>) -> Result<OlsFit, FitError> {
    let (n, p) = x.dim();
    if n <= p {
        return Err(FitError::InsufficientObservations {
            n_obs: n,
            n_params: p,
        });
    }

    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);
    let l = linalg::cholesky(&xtx).ok_or(FitError::SingularDesign)?;
    let beta = linalg::cholesky_solve(&l, &xty);
    let xtx_inv = linalg::spd_inverse(&xtx).ok_or(FitError::SingularDesign)?;

    let fitted = x.dot(&beta);
    let residuals = y - &fitted;
    let df_residual = n - p;
    let rss: f64 = residuals.iter().map(|r| r * r).sum();
    let sigma2 = rss / df_residual as f64;
    let std_errors = xtx_inv.diag().mapv(|v| (v * sigma2).max(0.0).sqrt());

    Ok(OlsFit {
        beta,
        std_errors,
        fitted,
        residuals,
        df_residual,
        sigma2,
    })
}

/// `lm`-equivalent fitter: Gaussian family, identity link, intercept included.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearModel;

impl LinearModel {
    pub fn new() -> Self {
        Self
    }
}

impl ModelFitter for LinearModel {
    fn fit(&self, spec: &ModelSpec, data: &DataTable) -> Result<FittedModel, FitError> {
        if spec.family != ModelFamily::Gaussian {
            return Err(FitError::UnsupportedFamily {
                fitter: self.name().to_string(),
                family: spec.family.to_string(),
            });
        }
        let design = Design::build(spec, data)?;
        let fit = ols(&design.x, &design.y)?;
        let df = fit.df_residual as f64;

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
                    p_value: pvalue_t(statistic, df),
                }
            })
            .collect();

        Ok(FittedModel {
            family: ModelFamily::Gaussian,
            coefficients,
            n_obs: design.n_obs(),
            converged: true,
            iterations: 1,
        })
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Gaussian
    }

    fn name(&self) -> &str {
        "lm"
    }
}
