//! Data model shared by the fitting, network and link crates.

pub mod direction;
pub mod effect_class;
pub mod fitted_model;
pub mod link_estimate;
pub mod model_result;
pub mod model_spec;

pub use direction::LinkDirection;
pub use effect_class::EffectClass;
pub use fitted_model::{CoefficientSummary, FittedModel};
pub use link_estimate::{FlatLinkRow, LinkEstimate, LinkEstimateTable};
pub use model_result::{EffectEstimate, ModelResult};
pub use model_spec::{ModelFamily, ModelSpec};
