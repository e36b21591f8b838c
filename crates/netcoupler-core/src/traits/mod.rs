//! Capability traits at the seams between the link engine and the numerics.

pub mod model_fitter;

pub use model_fitter::ModelFitter;
