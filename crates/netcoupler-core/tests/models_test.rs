use netcoupler_core::errors::FitError;
use netcoupler_core::models::*;

fn step(step: usize, p: f64, estimate: f64) -> ModelResult {
    ModelResult::fitted(
        step,
        Vec::new(),
        100,
        EffectEstimate {
            estimate,
            std_error: 0.1,
            p_value: p,
        },
    )
}

#[test]
fn direction_assigns_model_roles() {
    assert_eq!(LinkDirection::Exposure.roles("m1", "bmi"), ("m1", "bmi"));
    assert_eq!(LinkDirection::Outcome.roles("m1", "t2d"), ("t2d", "m1"));
}

#[test]
fn model_spec_formula_lists_focal_first() {
    let spec = ModelSpec::new(
        "m1",
        "bmi",
        vec!["age".into(), "m2".into()],
        ModelFamily::Gaussian,
    );
    assert_eq!(spec.formula(), "m1 ~ bmi + age + m2");
    assert_eq!(spec.variables(), vec!["m1", "bmi", "age", "m2"]);
}

#[test]
fn fitted_model_require_checks_presence_and_finiteness() {
    let model = FittedModel {
        family: ModelFamily::Gaussian,
        coefficients: vec![CoefficientSummary {
            term: "x".into(),
            estimate: 1.0,
            std_error: f64::NAN,
            statistic: f64::NAN,
            p_value: f64::NAN,
        }],
        n_obs: 10,
        converged: true,
        iterations: 1,
    };
    assert_eq!(
        model.require("y"),
        Err(FitError::MissingTerm { term: "y".into() })
    );
    assert_eq!(
        model.require("x"),
        Err(FitError::NonFiniteEstimate { term: "x".into() })
    );
}

#[test]
fn failed_model_result_keeps_cause() {
    let failed = ModelResult::failed(1, vec!["m2".into()], 3, &FitError::SingularDesign);
    assert!(failed.is_failed());
    assert_eq!(failed.p_value(), None);
    assert!(failed.failure.unwrap().contains("singular"));
    assert!(!step(0, 0.01, 1.0).is_failed());
}

#[test]
fn table_summary_and_flatten() {
    let rows = vec![
        LinkEstimate {
            node: "a".into(),
            external: "e".into(),
            direction: LinkDirection::Exposure,
            steps: vec![step(0, 0.01, 0.5), step(1, 0.02, 0.4)],
            effect: EffectClass::Direct,
            significance_threshold: 0.05,
            diagnostic: None,
        },
        LinkEstimate {
            node: "c".into(),
            external: "e".into(),
            direction: LinkDirection::Exposure,
            steps: vec![step(0, 0.2, 0.1)],
            effect: EffectClass::NoEffect,
            significance_threshold: 0.05,
            diagnostic: None,
        },
    ];
    let table = LinkEstimateTable::new(LinkDirection::Exposure, "e", rows);

    assert_eq!(table.len(), 2);
    assert_eq!(table.effect_of("c"), Some(EffectClass::NoEffect));
    assert_eq!(table.summary()[&EffectClass::Direct], 1);
    assert_eq!(table.summary()[&EffectClass::Ambiguous], 0);
    assert_eq!(table.nodes_with(EffectClass::Direct), vec!["a"]);

    let flat = table.flatten();
    assert_eq!(flat.len(), 3);
    assert_eq!(flat[1].node, "a");
    assert_eq!(flat[1].step, 1);

    let json = table.to_json().unwrap();
    assert!(json.contains("\"effect\": \"none\""));
    let back: LinkEstimateTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}
