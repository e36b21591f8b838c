//! Pearson correlation matrices and partial correlations.

use ndarray::Array2;
use tracing::warn;

use netcoupler_core::errors::TableError;
use netcoupler_core::table::DataTable;

use crate::linalg;

/// Correlation matrix over named variables, with the sample size it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Array2<f64>,
    n_obs: usize,
}

impl CorrelationMatrix {
    /// Pearson correlations over the rows complete on every column in `names`.
    ///
    /// A zero-variance column is uncorrelated with everything else.
    pub fn from_table(table: &DataTable, names: &[String]) -> Result<Self, TableError> {
        let rows = table.complete_rows(names)?;
        let n_obs = rows.len();
        let k = names.len();

        let mut centred: Vec<Vec<f64>> = Vec::with_capacity(k);
        let mut norms: Vec<f64> = Vec::with_capacity(k);
        for name in names {
            let values = table.gather(name, &rows)?;
            let mean = if n_obs > 0 {
                values.iter().sum::<f64>() / n_obs as f64
            } else {
                0.0
            };
            let dev: Vec<f64> = values.iter().map(|v| v - mean).collect();
            let norm = dev.iter().map(|d| d * d).sum::<f64>().sqrt();
            if norm == 0.0 {
                warn!(column = %name, "zero-variance column, treated as uncorrelated");
            }
            norms.push(norm);
            centred.push(dev);
        }

        let mut values = Array2::<f64>::eye(k);
        for i in 0..k {
            for j in (i + 1)..k {
                let r = if norms[i] > 0.0 && norms[j] > 0.0 {
                    let dot: f64 = centred[i].iter().zip(&centred[j]).map(|(a, b)| a * b).sum();
                    (dot / (norms[i] * norms[j])).clamp(-1.0, 1.0)
                } else {
                    0.0
                };
                values[[i, j]] = r;
                values[[j, i]] = r;
            }
        }

        Ok(Self {
            names: names.to_vec(),
            values,
            n_obs,
        })
    }

    /// Build from a precomputed matrix (e.g. from an external estimator).
    pub fn from_parts(names: Vec<String>, values: Array2<f64>, n_obs: usize) -> Self {
        Self {
            names,
            values,
            n_obs,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Partial correlation of variables `i` and `j` given `given`.
    ///
    /// Computed from the inverse of the correlation sub-matrix over
    /// `{i, j} ∪ given`. `None` if that sub-matrix is singular.
    pub fn partial_correlation(&self, i: usize, j: usize, given: &[usize]) -> Option<f64> {
        if given.is_empty() {
            return Some(self.values[[i, j]]);
        }
        let idx: Vec<usize> = [i, j].iter().chain(given).copied().collect();
        let m = idx.len();
        let mut sub = Array2::<f64>::zeros((m, m));
        for (a, &ia) in idx.iter().enumerate() {
            for (b, &ib) in idx.iter().enumerate() {
                sub[[a, b]] = self.values[[ia, ib]];
            }
        }
        let precision = linalg::spd_inverse(&sub)?;
        let denom = (precision[[0, 0]] * precision[[1, 1]]).sqrt();
        if !(denom.is_finite() && denom > 0.0) {
            return None;
        }
        Some((-precision[[0, 1]] / denom).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_perfect_and_inverse_correlation() {
        let table = DataTable::from_numeric([
            ("a", vec![1.0, 2.0, 3.0, 4.0]),
            ("b", vec![2.0, 4.0, 6.0, 8.0]),
            ("c", vec![4.0, 3.0, 2.0, 1.0]),
        ])
        .unwrap();
        let corr = CorrelationMatrix::from_table(&table, &names(&["a", "b", "c"])).unwrap();
        assert!((corr.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((corr.get(0, 2) + 1.0).abs() < 1e-12);
        assert_eq!(corr.n_obs(), 4);
    }

    #[test]
    fn test_missing_rows_are_dropped_listwise() {
        let mut table = DataTable::new();
        table
            .push_numeric("a", vec![Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)])
            .unwrap();
        table
            .push_numeric("b", vec![Some(1.0), None, Some(3.0), Some(4.0), Some(6.0)])
            .unwrap();
        let corr = CorrelationMatrix::from_table(&table, &names(&["a", "b"])).unwrap();
        assert_eq!(corr.n_obs(), 3);
    }

    #[test]
    fn test_zero_variance_column_uncorrelated() {
        let table = DataTable::from_numeric([
            ("a", vec![1.0, 2.0, 3.0]),
            ("k", vec![5.0, 5.0, 5.0]),
        ])
        .unwrap();
        let corr = CorrelationMatrix::from_table(&table, &names(&["a", "k"])).unwrap();
        assert_eq!(corr.get(0, 1), 0.0);
    }

    #[test]
    fn test_partial_correlation_removes_common_cause() {
        // a and b both correlate 0.5 with c, and 0.25 with each other:
        // exactly what c explains, so the partial correlation is zero.
        let values = array![[1.0, 0.25, 0.5], [0.25, 1.0, 0.5], [0.5, 0.5, 1.0]];
        let corr = CorrelationMatrix::from_parts(names(&["a", "b", "c"]), values, 100);
        assert!((corr.partial_correlation(0, 1, &[]).unwrap() - 0.25).abs() < 1e-12);
        assert!(corr.partial_correlation(0, 1, &[2]).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_partial_correlation_formula_single_conditioner() {
        let values = array![[1.0, 0.6, 0.3], [0.6, 1.0, 0.4], [0.3, 0.4, 1.0]];
        let corr = CorrelationMatrix::from_parts(names(&["a", "b", "c"]), values, 100);
        let expected = (0.6 - 0.3 * 0.4) / ((1.0_f64 - 0.09) * (1.0 - 0.16)).sqrt();
        assert!((corr.partial_correlation(0, 1, &[2]).unwrap() - expected).abs() < 1e-12);
    }
}
