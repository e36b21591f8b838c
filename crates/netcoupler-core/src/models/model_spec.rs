use serde::{Deserialize, Serialize};

/// Response distribution and link of a fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// Normal response, identity link (ordinary least squares).
    #[default]
    Gaussian,
    /// 0/1 response, logit link.
    Binomial,
    /// Count response, log link.
    Poisson,
}

impl ModelFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Binomial => "binomial",
            Self::Poisson => "poisson",
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formula-equivalent description of one model: `response ~ focal + covariates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub response: String,
    /// The predictor whose coefficient is reported.
    pub focal: String,
    pub covariates: Vec<String>,
    pub family: ModelFamily,
}

impl ModelSpec {
    pub fn new(
        response: impl Into<String>,
        focal: impl Into<String>,
        covariates: Vec<String>,
        family: ModelFamily,
    ) -> Self {
        Self {
            response: response.into(),
            focal: focal.into(),
            covariates,
            family,
        }
    }

    /// Predictor names in design-matrix order: focal first, then covariates.
    pub fn predictors(&self) -> Vec<&str> {
        std::iter::once(self.focal.as_str())
            .chain(self.covariates.iter().map(String::as_str))
            .collect()
    }

    /// Every variable the model reads, response first.
    pub fn variables(&self) -> Vec<&str> {
        std::iter::once(self.response.as_str())
            .chain(self.predictors())
            .collect()
    }

    /// R-style formula string, for diagnostics.
    pub fn formula(&self) -> String {
        format!("{} ~ {}", self.response, self.predictors().join(" + "))
    }
}
