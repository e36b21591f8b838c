//! Complete-case design matrices for a `ModelSpec`.

use ndarray::{Array1, Array2};

use netcoupler_core::errors::FitError;
use netcoupler_core::models::{FittedModel, ModelSpec};
use netcoupler_core::table::DataTable;

/// Response vector and intercept-augmented predictor matrix.
#[derive(Debug, Clone)]
pub struct Design {
    pub x: Array2<f64>,
    pub y: Array1<f64>,
    /// Column names of `x`, intercept first.
    pub terms: Vec<String>,
    /// Table rows used, in table order.
    pub rows: Vec<usize>,
}

impl Design {
    /// Build from the rows complete on every model variable.
    ///
    /// Covariates equal to the response or focal term, and repeated
    /// covariates, are dropped. Fails with `InsufficientObservations` unless
    /// at least one residual degree of freedom remains.
    pub fn build(spec: &ModelSpec, data: &DataTable) -> Result<Self, FitError> {
        let mut terms: Vec<String> = vec![FittedModel::INTERCEPT.to_string(), spec.focal.clone()];
        for cov in &spec.covariates {
            if *cov != spec.response && !terms.contains(cov) {
                terms.push(cov.clone());
            }
        }

        let mut variables: Vec<&str> = vec![spec.response.as_str()];
        variables.extend(terms[1..].iter().map(String::as_str));

        let rows = data.complete_rows(&variables).map_err(unavailable)?;
        let n = rows.len();
        let p = terms.len();
        if n <= p {
            return Err(FitError::InsufficientObservations {
                n_obs: n,
                n_params: p,
            });
        }

        let y = Array1::from(data.gather(&spec.response, &rows).map_err(unavailable)?);
        let mut x = Array2::<f64>::ones((n, p));
        for (j, term) in terms.iter().enumerate().skip(1) {
            let values = data.gather(term, &rows).map_err(unavailable)?;
            x.column_mut(j).assign(&Array1::from(values));
        }

        Ok(Self { x, y, terms, rows })
    }

    pub fn n_obs(&self) -> usize {
        self.rows.len()
    }

    pub fn n_params(&self) -> usize {
        self.terms.len()
    }
}

fn unavailable(e: netcoupler_core::errors::TableError) -> FitError {
    FitError::UnavailableVariable {
        reason: e.to_string(),
    }
}
