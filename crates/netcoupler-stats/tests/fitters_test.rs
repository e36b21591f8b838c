use netcoupler_core::errors::FitError;
use netcoupler_core::models::{FittedModel, ModelFamily, ModelSpec};
use netcoupler_core::table::DataTable;
use netcoupler_core::traits::ModelFitter;
use netcoupler_stats::{GeneralizedLinearModel, LinearModel};
use test_fixtures::Simulator;

fn spec(response: &str, focal: &str, covariates: &[&str], family: ModelFamily) -> ModelSpec {
    ModelSpec::new(
        response,
        focal,
        covariates.iter().map(|s| s.to_string()).collect(),
        family,
    )
}

#[test]
fn lm_recovers_simulated_slope() {
    let mut sim = Simulator::new(11);
    let x = sim.noise(400);
    let y = sim.child(&x, 0.8);
    let table = DataTable::from_numeric([("x", x), ("y", y)]).unwrap();

    let fit = LinearModel.fit(&spec("y", "x", &[], ModelFamily::Gaussian), &table).unwrap();
    let slope = fit.require("x").unwrap();
    assert!((slope.estimate - 0.8).abs() < 0.15, "slope {}", slope.estimate);
    assert!(slope.p_value < 1e-10);
    assert_eq!(fit.n_obs, 400);
    assert!(fit.converged);
    assert_eq!(fit.coefficients[0].term, FittedModel::INTERCEPT);
}

#[test]
fn lm_drops_incomplete_rows_per_model() {
    let mut table = DataTable::new();
    table
        .push_numeric("y", vec![Some(1.0), Some(2.1), Some(2.9), None, Some(5.2), Some(5.8)])
        .unwrap();
    table
        .push_numeric("x", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)])
        .unwrap();
    table
        .push_numeric("z", vec![None, None, None, None, None, None])
        .unwrap();

    let fit = LinearModel.fit(&spec("y", "x", &[], ModelFamily::Gaussian), &table).unwrap();
    assert_eq!(fit.n_obs, 5);

    // Adding an all-missing covariate leaves no complete rows.
    let err = LinearModel
        .fit(&spec("y", "x", &["z"], ModelFamily::Gaussian), &table)
        .unwrap_err();
    assert_eq!(
        err,
        FitError::InsufficientObservations {
            n_obs: 0,
            n_params: 3
        }
    );
}

#[test]
fn lm_rejects_non_gaussian_family() {
    let table = DataTable::from_numeric([("x", vec![1.0, 2.0, 3.0]), ("y", vec![0.0, 1.0, 1.0])]).unwrap();
    let err = LinearModel
        .fit(&spec("y", "x", &[], ModelFamily::Binomial), &table)
        .unwrap_err();
    assert!(matches!(err, FitError::UnsupportedFamily { .. }));
}

#[test]
fn gaussian_glm_matches_lm() {
    let mut sim = Simulator::new(5);
    let x = sim.noise(120);
    let z = sim.noise(120);
    let y: Vec<f64> = sim
        .child(&x, 0.5)
        .iter()
        .zip(&z)
        .map(|(a, b)| a - 0.3 * b)
        .collect();
    let table = DataTable::from_numeric([("x", x), ("z", z), ("y", y)]).unwrap();
    let s = spec("y", "x", &["z"], ModelFamily::Gaussian);

    let lm = LinearModel.fit(&s, &table).unwrap();
    let glm = GeneralizedLinearModel::default().fit(&s, &table).unwrap();
    for (a, b) in lm.coefficients.iter().zip(&glm.coefficients) {
        assert_eq!(a.term, b.term);
        assert!((a.estimate - b.estimate).abs() < 1e-10);
        assert!((a.std_error - b.std_error).abs() < 1e-10);
    }
}

#[test]
fn logistic_glm_detects_strong_effect() {
    let mut sim = Simulator::new(21);
    let x = sim.noise(600);
    let u = sim.noise(600);
    // Latent-variable logistic-like outcome: y = 1 when 1.5 x + noise > 0.
    let y: Vec<f64> = x
        .iter()
        .zip(&u)
        .map(|(a, e)| if 1.5 * a + e > 0.0 { 1.0 } else { 0.0 })
        .collect();
    let table = DataTable::from_numeric([("x", x), ("y", y)]).unwrap();

    let glm = GeneralizedLinearModel::binomial();
    assert_eq!(glm.family(), ModelFamily::Binomial);
    let fit = glm.fit(&spec("y", "x", &[], ModelFamily::Binomial), &table).unwrap();
    assert!(fit.converged);
    let slope = fit.require("x").unwrap();
    assert!(slope.estimate > 1.0, "slope {}", slope.estimate);
    assert!(slope.p_value < 1e-10);
}

#[test]
fn logistic_glm_rejects_out_of_range_response() {
    let table = DataTable::from_numeric([
        ("x", vec![1.0, 2.0, 3.0, 4.0]),
        ("y", vec![0.0, 1.0, 2.0, 1.0]),
    ])
    .unwrap();
    let err = GeneralizedLinearModel::binomial()
        .fit(&spec("y", "x", &[], ModelFamily::Binomial), &table)
        .unwrap_err();
    assert!(matches!(err, FitError::InvalidResponse { .. }));
}

#[test]
fn poisson_glm_recovers_log_rate() {
    // Counts exactly on the mean curve exp(0.5 + 0.3 x).
    let x: Vec<f64> = (0..30).map(|i| i as f64 / 10.0).collect();
    let y: Vec<f64> = x.iter().map(|v| (0.5 + 0.3 * v).exp()).collect();
    let table = DataTable::from_numeric([("x", x), ("y", y)]).unwrap();

    let fit = GeneralizedLinearModel::poisson()
        .fit(&spec("y", "x", &[], ModelFamily::Poisson), &table)
        .unwrap();
    assert!(fit.converged);
    assert!((fit.require("x").unwrap().estimate - 0.3).abs() < 1e-6);
    assert!((fit.coefficients[0].estimate - 0.5).abs() < 1e-6);
}

#[test]
fn closures_are_fitters() {
    let fitter = |s: &ModelSpec, data: &DataTable| LinearModel.fit(s, data);
    let table = DataTable::from_numeric([
        ("x", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("y", vec![1.1, 1.9, 3.2, 3.9, 5.1]),
    ])
    .unwrap();
    let fit = fitter.fit(&spec("y", "x", &[], ModelFamily::Gaussian), &table).unwrap();
    assert!(fit.require("x").unwrap().estimate > 0.9);
    assert_eq!(ModelFitter::name(&fitter), "custom");
}
