//! Variance functions and canonical links for the supported families.

use netcoupler_core::errors::FitError;
use netcoupler_core::models::ModelFamily;

/// Smallest/largest mean allowed for the binomial family.
const MU_EPSILON: f64 = 1e-10;

/// Per-family pieces the IRLS solver needs.
pub trait GlmFamily {
    /// Reject responses outside the family's support.
    fn validate_response(&self, y: &[f64]) -> Result<(), FitError>;
    /// Starting mean for an observation.
    fn initial_mu(&self, y: f64) -> f64;
    fn link(&self, mu: f64) -> f64;
    fn inverse_link(&self, eta: f64) -> f64;
    /// dμ/dη evaluated at η.
    fn mu_eta(&self, eta: f64) -> f64;
    fn variance(&self, mu: f64) -> f64;
    /// Contribution of one observation to the deviance.
    fn unit_deviance(&self, y: f64, mu: f64) -> f64;
}

impl GlmFamily for ModelFamily {
    fn validate_response(&self, y: &[f64]) -> Result<(), FitError> {
        let bad = match self {
            Self::Gaussian => y.iter().find(|v| !v.is_finite()),
            Self::Binomial => y.iter().find(|v| !(0.0..=1.0).contains(*v)),
            Self::Poisson => y.iter().find(|v| !v.is_finite() || **v < 0.0),
        };
        match bad {
            Some(v) => Err(FitError::InvalidResponse {
                family: self.to_string(),
                reason: format!("value {v} outside the family's support"),
            }),
            None => Ok(()),
        }
    }

    fn initial_mu(&self, y: f64) -> f64 {
        match self {
            Self::Gaussian => y,
            Self::Binomial => (y + 0.5) / 2.0,
            Self::Poisson => y + 0.1,
        }
    }

    fn link(&self, mu: f64) -> f64 {
        match self {
            Self::Gaussian => mu,
            Self::Binomial => (mu / (1.0 - mu)).ln(),
            Self::Poisson => mu.ln(),
        }
    }

    fn inverse_link(&self, eta: f64) -> f64 {
        match self {
            Self::Gaussian => eta,
            Self::Binomial => (1.0 / (1.0 + (-eta).exp())).clamp(MU_EPSILON, 1.0 - MU_EPSILON),
            Self::Poisson => eta.exp().max(MU_EPSILON),
        }
    }

    fn mu_eta(&self, eta: f64) -> f64 {
        match self {
            Self::Gaussian => 1.0,
            Self::Binomial => {
                let e = (-eta.abs()).exp();
                (e / ((1.0 + e) * (1.0 + e))).max(f64::EPSILON)
            }
            Self::Poisson => eta.exp().max(f64::EPSILON),
        }
    }

    fn variance(&self, mu: f64) -> f64 {
        match self {
            Self::Gaussian => 1.0,
            Self::Binomial => mu * (1.0 - mu),
            Self::Poisson => mu,
        }
    }

    fn unit_deviance(&self, y: f64, mu: f64) -> f64 {
        match self {
            Self::Gaussian => (y - mu).powi(2),
            Self::Binomial => 2.0 * (y_log_y(y, mu) + y_log_y(1.0 - y, 1.0 - mu)),
            Self::Poisson => 2.0 * (y_log_y(y, mu) - (y - mu)),
        }
    }
}

/// `y · ln(y / mu)` with the convention `0 · ln 0 = 0`.
fn y_log_y(y: f64, mu: f64) -> f64 {
    if y > 0.0 {
        y * (y / mu).ln()
    } else {
        0.0
    }
}
