//! Seeded simulation of network datasets.

use netcoupler_core::table::DataTable;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::Normal;
use rand::distributions::Distribution;

/// Seeded generator of standard-normal columns.
pub struct Simulator {
    rng: StdRng,
    normal: Normal,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            normal: Normal::new(0.0, 1.0).expect("unit normal"),
        }
    }

    /// `n` independent standard-normal draws.
    pub fn noise(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.normal.sample(&mut self.rng)).collect()
    }

    /// `coef * parent + noise`, element-wise.
    pub fn child(&mut self, parent: &[f64], coef: f64) -> Vec<f64> {
        parent
            .iter()
            .map(|p| coef * p + self.normal.sample(&mut self.rng))
            .collect()
    }
}

/// A linear chain `m1 -> m2 -> ... -> m{k}` of `n_obs` rows.
pub fn simulate_chain(n_obs: usize, n_nodes: usize, coef: f64, seed: u64) -> DataTable {
    let mut sim = Simulator::new(seed);
    let mut columns: Vec<(String, Vec<f64>)> = Vec::with_capacity(n_nodes);
    let mut prev = sim.noise(n_obs);
    columns.push(("m1".to_string(), prev.clone()));
    for k in 2..=n_nodes {
        prev = sim.child(&prev, coef);
        columns.push((format!("m{k}"), prev.clone()));
    }
    DataTable::from_numeric(columns).expect("equal-length columns")
}

/// `exposure -> m1 -> m2 -> m3`, plus an unrelated node `m4`.
///
/// With strong coefficients `m1` carries the only direct exposure effect;
/// `m2` and `m3` are associated with the exposure only through `m1`.
pub fn simulate_exposure_chain(n_obs: usize, seed: u64) -> DataTable {
    let mut sim = Simulator::new(seed);
    let exposure = sim.noise(n_obs);
    let m1 = sim.child(&exposure, 0.9);
    let m2 = sim.child(&m1, 0.9);
    let m3 = sim.child(&m2, 0.9);
    let m4 = sim.noise(n_obs);
    DataTable::from_numeric([
        ("exposure", exposure),
        ("m1", m1),
        ("m2", m2),
        ("m3", m3),
        ("m4", m4),
    ])
    .expect("equal-length columns")
}
