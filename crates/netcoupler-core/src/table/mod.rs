//! Rectangular observation table: named columns of equal length.
//!
//! Network variables, the external variable and adjustment variables all live
//! in one `DataTable`. Missing values are kept as `None` and dropped per model,
//! never globally.

pub mod column;
pub mod selector;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::TableError;

pub use column::Column;
pub use selector::ColumnSelector;

/// An ordered collection of named, equal-length columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataTable {
    names: Vec<String>,
    columns: Vec<Column>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from fully observed numeric columns.
    pub fn from_numeric<N, I>(columns: I) -> Result<Self, TableError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<f64>)>,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            table.push_numeric(name, values.into_iter().map(Some).collect())?;
        }
        Ok(table)
    }

    /// Append a numeric column. `None` marks a missing value.
    pub fn push_numeric(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<(), TableError> {
        self.push(name.into(), Column::Numeric(values))
    }

    /// Append a text column. Text columns are carried through untouched.
    pub fn push_text(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Result<(), TableError> {
        self.push(name.into(), Column::Text(values))
    }

    fn push(&mut self, name: String, column: Column) -> Result<(), TableError> {
        if self.index_of(&name).is_some() {
            return Err(TableError::DuplicateColumn { name });
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(TableError::LengthMismatch {
                    name,
                    expected: first.len(),
                    actual: column.len(),
                });
            }
        }
        self.index.insert(name.clone(), self.names.len());
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows (0 for a table without columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.index_of(name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| TableError::InvalidColumn {
                name: name.to_string(),
            })
    }

    /// Look up a numeric column by name.
    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>], TableError> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(values),
            Column::Text(_) => Err(TableError::NonNumericColumn {
                name: name.to_string(),
            }),
        }
    }

    /// Check that every name refers to a numeric column.
    pub fn require_numeric<S: AsRef<str>>(&self, names: &[S]) -> Result<(), TableError> {
        for name in names {
            self.numeric(name.as_ref())?;
        }
        Ok(())
    }

    /// Replace the values of an existing numeric column.
    pub fn replace_numeric(
        &mut self,
        name: &str,
        values: Vec<Option<f64>>,
    ) -> Result<(), TableError> {
        let expected = self.n_rows();
        let idx = self.index_of(name).ok_or_else(|| TableError::InvalidColumn {
            name: name.to_string(),
        })?;
        if !self.columns[idx].is_numeric() {
            return Err(TableError::NonNumericColumn {
                name: name.to_string(),
            });
        }
        if values.len() != expected {
            return Err(TableError::LengthMismatch {
                name: name.to_string(),
                expected,
                actual: values.len(),
            });
        }
        self.columns[idx] = Column::Numeric(values);
        Ok(())
    }

    /// Indices of rows with no missing value in any of `names`.
    pub fn complete_rows<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>, TableError> {
        let columns = names
            .iter()
            .map(|n| self.numeric(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((0..self.n_rows())
            .filter(|&row| columns.iter().all(|col| col[row].is_some()))
            .collect())
    }

    /// Values of a numeric column restricted to `rows`, which should come
    /// from `complete_rows`.
    pub fn gather(&self, name: &str, rows: &[usize]) -> Result<Vec<f64>, TableError> {
        let values = self.numeric(name)?;
        rows.iter()
            .map(|&row| match values.get(row) {
                Some(Some(v)) => Ok(*v),
                Some(None) => Err(TableError::MissingValue {
                    name: name.to_string(),
                    row,
                }),
                None => Err(TableError::RowOutOfBounds {
                    index: row,
                    n_rows: values.len(),
                }),
            })
            .collect()
    }

    /// New table with the rows in the given order. Rows may repeat.
    pub fn select_rows(&self, rows: &[usize]) -> Result<Self, TableError> {
        let n_rows = self.n_rows();
        if let Some(&bad) = rows.iter().find(|&&r| r >= n_rows) {
            return Err(TableError::RowOutOfBounds { index: bad, n_rows });
        }
        let mut table = Self::new();
        for (name, column) in self.names.iter().zip(&self.columns) {
            table.push(name.clone(), column.take_rows(rows))?;
        }
        Ok(table)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        // The index is skipped by serde; fall back to a scan after deserialization.
        self.index
            .get(name)
            .copied()
            .or_else(|| self.names.iter().position(|n| n == name))
    }
}

impl PartialEq for DataTable {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.columns == other.columns
    }
}
