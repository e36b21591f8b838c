//! Column selection, resolved once at call entry into an ordered name list.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::DataTable;
use crate::errors::TableError;

type NamePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Which columns an operation applies to.
#[derive(Clone)]
pub enum ColumnSelector {
    /// Every column in the table.
    All,
    /// Explicit names, in caller order. Absent names are an error.
    Names(Vec<String>),
    /// Columns whose name starts with the prefix.
    Prefix(String),
    /// Columns whose name matches the regular expression.
    Matching(Regex),
    /// Columns whose name satisfies the predicate.
    Predicate(NamePredicate),
}

impl ColumnSelector {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Resolve against a table.
    ///
    /// Pattern-style selectors keep table order; `Names` keeps caller order
    /// with duplicates removed.
    pub fn resolve(&self, table: &DataTable) -> Result<Vec<String>, TableError> {
        let resolved: Vec<String> = match self {
            Self::All => table.column_names().to_vec(),
            Self::Names(names) => {
                let mut out: Vec<String> = Vec::with_capacity(names.len());
                for name in names {
                    if !table.has_column(name) {
                        return Err(TableError::InvalidColumn { name: name.clone() });
                    }
                    if !out.contains(name) {
                        out.push(name.clone());
                    }
                }
                out
            }
            Self::Prefix(prefix) => filter_names(table, |n| n.starts_with(prefix.as_str())),
            Self::Matching(re) => filter_names(table, |n| re.is_match(n)),
            Self::Predicate(f) => filter_names(table, |n| f(n)),
        };

        if resolved.is_empty() {
            return Err(TableError::EmptySelection {
                selector: self.to_string(),
            });
        }
        Ok(resolved)
    }
}

fn filter_names(table: &DataTable, keep: impl Fn(&str) -> bool) -> Vec<String> {
    table
        .column_names()
        .iter()
        .filter(|n| keep(n.as_str()))
        .cloned()
        .collect()
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all columns"),
            Self::Names(names) => write!(f, "names [{}]", names.join(", ")),
            Self::Prefix(p) => write!(f, "prefix {p:?}"),
            Self::Matching(re) => write!(f, "pattern /{}/", re.as_str()),
            Self::Predicate(_) => write!(f, "predicate"),
        }
    }
}

impl fmt::Debug for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnSelector({self})")
    }
}

impl From<Vec<String>> for ColumnSelector {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

impl From<&[&str]> for ColumnSelector {
    fn from(names: &[&str]) -> Self {
        Self::names(names.iter().copied())
    }
}

impl From<Regex> for ColumnSelector {
    fn from(re: Regex) -> Self {
        Self::Matching(re)
    }
}
