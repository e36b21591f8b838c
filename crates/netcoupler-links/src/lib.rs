//! Link estimation between a network and one external variable.
//!
//! For every network node: enumerate adjustment sets from its neighbours
//! (`adjustment`), fit one model per set, and reduce the sequence of focal
//! coefficients to a direct / ambiguous / none label (`classify`). The
//! `engine` drives this per node, sequentially or on a worker pool.

pub mod adjustment;
pub mod classify;
pub mod engine;
pub mod execution;

pub use adjustment::enumerate;
pub use classify::{classify, Classification, ClassifyOptions};
pub use engine::LinkEstimator;
