//! Standardization of network variables: natural log, optional
//! residualization on nuisance variables, then centring and scaling.

use tracing::{debug, warn};

use netcoupler_core::errors::NetCouplerResult;
use netcoupler_core::models::{ModelFamily, ModelSpec};
use netcoupler_core::table::{ColumnSelector, DataTable};

use crate::design::Design;
use crate::ols;

/// Standardize the selected columns of `table`.
///
/// Each selected column is log-transformed (non-positive values become
/// missing), replaced by its OLS residuals on `regressed_on` when given, and
/// scaled to mean 0 and unit sample SD. Columns listed in `regressed_on` are
/// never themselves transformed. All other columns pass through untouched.
pub fn standardize(
    table: &DataTable,
    columns: &ColumnSelector,
    regressed_on: Option<&[String]>,
) -> NetCouplerResult<DataTable> {
    let regressors: &[String] = regressed_on.unwrap_or(&[]);
    table.require_numeric(regressors)?;

    let selected: Vec<String> = columns
        .resolve(table)?
        .into_iter()
        .filter(|c| !regressors.contains(c))
        .collect();
    table.require_numeric(&selected)?;

    let mut out = table.clone();
    for name in &selected {
        let (logged, dropped) = log_transform(table.numeric(name)?);
        if dropped > 0 {
            warn!(column = %name, dropped, "non-positive values set to missing before log");
        }

        let values = if regressors.is_empty() {
            logged
        } else {
            out.replace_numeric(name, logged)?;
            residualize(&out, name, regressors)?
        };

        out.replace_numeric(name, scale(&values))?;
    }

    debug!(
        columns = selected.len(),
        residualized = !regressors.is_empty(),
        "standardized network variables"
    );
    Ok(out)
}

/// Natural log, with non-positive or missing inputs mapped to missing.
/// Returns the transformed values and the count of values dropped.
pub fn log_transform(values: &[Option<f64>]) -> (Vec<Option<f64>>, usize) {
    let mut dropped = 0;
    let out = values
        .iter()
        .map(|v| match v {
            Some(x) if *x > 0.0 => Some(x.ln()),
            Some(_) => {
                dropped += 1;
                None
            }
            None => None,
        })
        .collect();
    (out, dropped)
}

/// Centre to mean 0 and scale to unit sample SD, ignoring missing values.
///
/// With fewer than two observed values, or zero variance, values are only
/// centred.
pub fn scale(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let observed: Vec<f64> = values.iter().flatten().copied().collect();
    if observed.is_empty() {
        return values.to_vec();
    }
    let n = observed.len() as f64;
    let mean = observed.iter().sum::<f64>() / n;
    let sd = if observed.len() > 1 {
        (observed.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        0.0
    };
    let divisor = if sd > 0.0 && sd.is_finite() { sd } else { 1.0 };
    values
        .iter()
        .map(|v| v.map(|x| (x - mean) / divisor))
        .collect()
}

/// Residuals of `column ~ regressors`; rows with any missing value stay missing.
pub fn residualize(
    table: &DataTable,
    column: &str,
    regressors: &[String],
) -> NetCouplerResult<Vec<Option<f64>>> {
    let (focal, rest) = match regressors.split_first() {
        Some(split) => split,
        None => return Ok(table.numeric(column)?.to_vec()),
    };
    let spec = ModelSpec::new(column, focal.clone(), rest.to_vec(), ModelFamily::Gaussian);
    let design = Design::build(&spec, table)?;
    let fit = ols::ols(&design.x, &design.y)?;

    let mut out = vec![None; table.n_rows()];
    for (k, &row) in design.rows.iter().enumerate() {
        out[row] = Some(fit.residuals[k]);
    }
    Ok(out)
}
