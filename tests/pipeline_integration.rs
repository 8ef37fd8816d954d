//! Integration tests for the full scoring pipeline.
//!
//! These tests drive `AnomalyDetector` end to end through its configuration
//! surface and check the documented scenarios.

use anofox_anomaly::config::{ComponentConfig, DetectorConfig};
use anofox_anomaly::contexts::Context;
use anofox_anomaly::detector::AnomalyDetector;
use anofox_anomaly::evaluation::{
    add_constant, best_support, bridged_random_walk, equal_support, full_support,
    normalized_euclidean, Interval,
};
use approx::assert_relative_eq;
use anofox_anomaly::AnomalyError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn plateau() -> Vec<f64> {
    vec![0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0]
}

fn sine(n: usize, period: f64) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period).sin())
        .collect()
}

fn config(width: usize, context: ComponentConfig, evaluator: ComponentConfig) -> DetectorConfig {
    DetectorConfig {
        evaluation_filter: ComponentConfig::new("sliding_window").with("width", width),
        context,
        reference_filter: ComponentConfig::new("sliding_window").with("width", width),
        evaluator,
        aggregator: ComponentConfig::new("max"),
        representation: None,
        discretization: None,
    }
}

// ==================== k-NN scenarios ====================

#[test]
fn plateau_scenario_from_json() {
    let json = r#"{
        "evaluation_filter": {"method": "sliding_window", "width": 3, "step": 1},
        "context": {"method": "trivial"},
        "reference_filter": {"method": "sliding_window", "width": "3"},
        "evaluator": {"method": "knn", "k": 1, "distance_measure": "euclidean"},
        "aggregator": {"method": "max"}
    }"#;
    let config = DetectorConfig::from_json(json).unwrap();
    let mut detector = AnomalyDetector::from_config(&config).unwrap();
    let scores = detector.evaluate(&plateau()).unwrap();

    assert_eq!(scores.len(), 11);
    for i in [0, 1, 9, 10] {
        assert_eq!(scores[i], 0.0, "flat index {i}");
    }
    for i in 3..=7 {
        assert!(scores[i] >= 10.0, "plateau index {i}: {}", scores[i]);
    }
}

#[test]
fn mean_aggregation_keeps_plateau_elevated() {
    let mut cfg = config(
        3,
        ComponentConfig::new("trivial"),
        ComponentConfig::new("knn").with("k", 1),
    );
    cfg.aggregator = ComponentConfig::new("mean");
    let scores = AnomalyDetector::from_config(&cfg)
        .unwrap()
        .evaluate(&plateau())
        .unwrap();

    assert_eq!(scores[0], 0.0);
    assert!(scores[5] > 5.0);
}

#[test]
fn dtw_with_novelty_context() {
    let cfg = config(
        3,
        ComponentConfig::new("novelty"),
        ComponentConfig::new("knn")
            .with("k", 1)
            .with("distance_measure", "dtw"),
    );
    let scores = AnomalyDetector::from_config(&cfg)
        .unwrap()
        .evaluate(&plateau())
        .unwrap();

    // Windows with no past at all score NaN, which max ignores.
    assert_eq!(scores[0], 0.0);
    assert!(scores[5] > 0.0);
    assert_eq!(scores[9], 0.0);
}

fn novelty_scores(aggregator: &str) -> Vec<f64> {
    let mut cfg = config(
        3,
        ComponentConfig::new("novelty"),
        ComponentConfig::new("knn").with("k", 1),
    );
    cfg.aggregator = ComponentConfig::new(aggregator);
    AnomalyDetector::from_config(&cfg)
        .unwrap()
        .evaluate(&plateau())
        .unwrap()
}

#[test]
fn median_novelty_scores_can_be_measured() {
    let scores = novelty_scores("median");
    assert!(scores[..5].iter().all(|s| s.is_nan()));
    assert_relative_eq!(scores[5], 200.0_f64.sqrt(), epsilon = 1e-12);

    // The plateau indices with a defined score are the top two.
    let labels: Vec<bool> = (0..11).map(|i| (4..=6).contains(&i)).collect();
    assert_eq!(equal_support(&labels, &scores).unwrap(), 0.0);
    assert_eq!(full_support(&labels, &scores).unwrap(), 0.0);
    assert_eq!(best_support(&labels, &scores).unwrap(), 0.0);
}

#[test]
fn min_novelty_scores_can_be_measured() {
    let scores = novelty_scores("min");
    assert!(scores[..3].iter().all(|&s| s == f64::INFINITY));

    let labels: Vec<bool> = (0..11).map(|i| (4..=6).contains(&i)).collect();
    let distance = normalized_euclidean(&labels, &scores).unwrap();
    // Index 3 normalizes to 1 against label 0, index 6 to 1/sqrt(2) against 1.
    let expected = (1.0 + (1.0 - 0.5_f64.sqrt()).powi(2)).sqrt();
    assert!(distance.is_finite());
    assert_relative_eq!(distance, expected, epsilon = 1e-12);
}

#[test]
fn local_context_scores_periodic_signal_low() {
    let cfg = config(
        10,
        ComponentConfig::new("local_symmetric").with("width", 40),
        ComponentConfig::new("knn").with("k", 1),
    );
    let scores = AnomalyDetector::from_config(&cfg)
        .unwrap()
        .evaluate(&sine(200, 20.0))
        .unwrap();

    assert_eq!(scores.len(), 200);
    assert!(scores.iter().all(|&s| s < 1e-6), "{scores:?}");
}

#[test]
fn semi_supervised_reference_matches_itself() {
    let reference = sine(60, 12.0);
    let cfg = config(
        12,
        ComponentConfig::new("semi-supervised").with("reference_sequence", reference.clone()),
        ComponentConfig::new("knn").with("k", 1),
    );
    let mut detector = AnomalyDetector::from_config(&cfg).unwrap();

    let normal = detector.evaluate(&reference).unwrap();
    assert!(normal.iter().all(|&s| s < 1e-9));

    let mut shifted = reference.clone();
    shifted[30] += 5.0;
    let scores = detector.evaluate(&shifted).unwrap();
    // The spike is 5 against a unit-amplitude reference.
    assert!(scores[30] > 2.0);
    assert!(scores[0] < 1e-9);
}

#[test]
fn injected_level_shift_is_found() {
    let mut rng = StdRng::seed_from_u64(11);
    let walk = bridged_random_walk(200, 0.0, 0.05, &mut rng).unwrap();
    let interval = Interval::new(100, 110);
    let sequence = add_constant(&walk, 20.0, interval).unwrap();

    let cfg = config(
        5,
        ComponentConfig::new("trivial"),
        ComponentConfig::new("knn").with("k", 1),
    );
    let scores = AnomalyDetector::from_config(&cfg)
        .unwrap()
        .evaluate(&sequence)
        .unwrap();

    let argmax = scores
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert!((95..115).contains(&argmax), "argmax at {argmax}");

    let labels: Vec<bool> = (0..200).map(|i| (96..114).contains(&i)).collect();
    assert!(equal_support(&labels, &scores).unwrap() < 0.1);
}

// ==================== representations ====================

#[test]
fn cdm_over_sax_words() {
    let mut cfg = config(
        16,
        ComponentConfig::new("trivial"),
        ComponentConfig::new("knn")
            .with("k", 1)
            .with("distance_measure", "cdm"),
    );
    cfg.discretization = Some(
        ComponentConfig::new("sax")
            .with("dimensions", 8)
            .with("alphabet_size", 4),
    );

    let mut sequence = sine(80, 16.0);
    for x in &mut sequence[40..48] {
        *x = 3.0;
    }
    let scores = AnomalyDetector::from_config(&cfg)
        .unwrap()
        .evaluate(&sequence)
        .unwrap();

    assert_eq!(scores.len(), 80);
    assert!(scores.iter().all(|s| s.is_finite() && *s > 0.0));
}

#[test]
fn continuous_representations_run_end_to_end() {
    for repr in [
        ComponentConfig::new("z-normalize"),
        ComponentConfig::new("paa").with("dimensions", 4),
        ComponentConfig::new("dft"),
        ComponentConfig::new("dwt").with("wavelet_family", "db2"),
    ] {
        let mut cfg = config(
            8,
            ComponentConfig::new("local_asymmetric")
                .with("left_width", 20)
                .with("right_width", 10),
            ComponentConfig::new("knn").with("k", 2),
        );
        cfg.representation = Some(repr.clone());

        let scores = AnomalyDetector::from_config(&cfg)
            .unwrap()
            .evaluate(&sine(64, 8.0))
            .unwrap();
        assert_eq!(scores.len(), 64, "{repr:?}");
        assert!(scores.iter().all(|s| !s.is_nan()), "{repr:?}");
    }
}

// ==================== one-class ====================

#[test]
fn first_one_class_evaluation_is_a_classification() {
    let cfg = config(
        4,
        ComponentConfig::new("trivial"),
        ComponentConfig::new("svm").with("nu", 0.2).with("gamma", 0.5),
    );
    let mut detector = AnomalyDetector::from_config(&cfg).unwrap();
    let scores = detector.evaluate(&sine(40, 10.0)).unwrap();

    assert_eq!(scores.len(), 40);
    assert!(scores.iter().all(|&s| s == 0.0 || s == 1.0));
}

#[test]
fn trained_one_class_flags_foreign_shape() {
    let cfg = config(
        5,
        ComponentConfig::new("trivial"),
        ComponentConfig::new("one_class").with("nu", 0.05).with("gamma", 0.5),
    );
    let mut detector = AnomalyDetector::from_config(&cfg).unwrap();
    detector.train(&sine(100, 10.0)).unwrap();

    let mut test = sine(50, 10.0);
    for x in &mut test[20..25] {
        *x = 8.0;
    }
    let scores = detector.evaluate(&test).unwrap();
    assert_eq!(scores[22], 1.0);
}

// ==================== contexts and errors ====================

#[test]
fn local_context_is_clamped_at_sequence_start() {
    let sequence = [1.0, 2.0, 3.0, 4.0, 5.0];
    let context = Context::local_symmetric(100);
    let parts = context.context(&sequence, 0, 0).unwrap();

    assert_eq!(parts.len(), 2);
    assert!(parts[0].is_empty());
    assert_eq!(parts[1], &sequence[1..]);
}

#[test]
fn unknown_methods_fail_construction() {
    let cases = [
        (
            config(3, ComponentConfig::new("everything"), ComponentConfig::new("knn")),
            "context.method",
        ),
        (
            config(3, ComponentConfig::new("trivial"), ComponentConfig::new("isolation_forest")),
            "evaluator.method",
        ),
    ];
    for (cfg, expected) in cases {
        match AnomalyDetector::from_config(&cfg).unwrap_err() {
            AnomalyError::Configuration { parameter, message } => {
                assert_eq!(parameter, expected);
                assert!(message.contains("unknown"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    let mut cfg = config(3, ComponentConfig::new("trivial"), ComponentConfig::new("knn"));
    cfg.evaluation_filter = ComponentConfig::new("sliding_window").with("width", 2.5);
    assert!(matches!(
        AnomalyDetector::from_config(&cfg),
        Err(AnomalyError::Configuration { ref parameter, .. }) if parameter == "evaluation_filter.width"
    ));
}

#[test]
fn progress_reaches_one() {
    let cfg = config(3, ComponentConfig::new("trivial"), ComponentConfig::new("knn"));
    let mut detector = AnomalyDetector::from_config(&cfg).unwrap();
    let mut last = 0.0;
    let mut calls = 0;
    detector
        .evaluate_with_progress(&plateau(), |p| {
            assert!(p >= last);
            last = p;
            calls += 1;
        })
        .unwrap();
    assert_eq!(last, 1.0);
    assert_eq!(calls, 10);
}
