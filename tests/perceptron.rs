use rand::{rngs::StdRng, SeedableRng};

use tanh_perceptron::data::parse_csv;
use tanh_perceptron::{Dataset, NonLinearPerceptron, Normalizer, PerceptronError, TrainConfig, TrainedModel, TrainingReport};

fn xor() -> Dataset {
    Dataset::from_pairs(vec![
        (vec![0.0, 0.0], -1.0),
        (vec![0.0, 1.0], 1.0),
        (vec![1.0, 0.0], 1.0),
        (vec![1.0, 1.0], -1.0),
    ])
    .unwrap()
}

#[test]
fn xor_runs_full_limit_and_trace_starts_with_initial_weights() {
    let mut p = NonLinearPerceptron::new(&xor(), TrainConfig::new(0.1, 1000)).unwrap();

    // The first three draws of the run are the initial weights.
    let mut probe = StdRng::seed_from_u64(2024);
    let initial = tanh_perceptron::math::vector::random_uniform(3, &mut probe);

    let report = p.train_with_rng(&mut StdRng::seed_from_u64(2024));

    assert_eq!(report.iterations, 1000);
    assert!(!report.trace.is_empty());
    assert_eq!(report.trace[0].step, 0);
    assert_eq!(report.trace[0].error, None);
    assert_eq!(report.initial_weights(), Some(initial.as_slice()));
    assert!(report.min_error.unwrap() > 0.0);
}

#[test]
fn trace_errors_are_non_increasing() {
    let mut p = NonLinearPerceptron::new(&xor(), TrainConfig::new(0.1, 1000)).unwrap();
    let report = p.train_with_rng(&mut StdRng::seed_from_u64(8));

    let errors: Vec<f64> = report.errors().collect();
    assert_eq!(errors.len(), report.trace.len() - 1);
    assert!(errors.windows(2).all(|w| w[1] <= w[0]));
    for snapshot in report.trace.iter().skip(1) {
        assert_eq!(snapshot.error, Some(p.training_error(&snapshot.weights)));
    }
}

#[test]
fn normalization_round_trip_over_training_targets() {
    let ds = parse_csv("x,y\n1,3.5\n2,-7.25\n3,100\n4,0.001\n").unwrap();
    let n = Normalizer::fit(ds.targets()).unwrap();
    for y in ds.targets() {
        let back = n.denormalize(n.normalize(y));
        assert!((back - y).abs() < 1e-9, "{} != {}", back, y);
    }
}

#[test]
fn constant_targets_are_rejected() {
    let ds = Dataset::from_pairs(vec![(vec![1.0], 5.0), (vec![2.0], 5.0), (vec![3.0], 5.0)]).unwrap();
    let err = NonLinearPerceptron::new(&ds, TrainConfig::default()).unwrap_err();
    assert!(matches!(err, PerceptronError::DegenerateRange { value } if value == 5.0));
}

#[test]
fn predict_requires_training() {
    let p = NonLinearPerceptron::new(&xor(), TrainConfig::default()).unwrap();
    assert!(matches!(p.predict(&[0.0, 1.0]), Err(PerceptronError::UntrainedModel)));
}

#[test]
fn predict_after_training_is_finite_and_checks_dimension() {
    let mut p = NonLinearPerceptron::new(&xor(), TrainConfig::default()).unwrap();
    p.train_with_rng(&mut StdRng::seed_from_u64(1));

    for sample in xor().samples() {
        assert!(p.predict(&sample.features).unwrap().is_finite());
    }

    let err = p.predict(&[1.0, 0.0, 1.0]).unwrap_err();
    assert!(matches!(err, PerceptronError::DimensionMismatch { expected: 2, actual: 3 }));
}

#[test]
fn retraining_replaces_best_weights() {
    let mut p = NonLinearPerceptron::new(&xor(), TrainConfig::new(0.1, 50)).unwrap();

    let first = p.train_with_rng(&mut StdRng::seed_from_u64(10));
    assert_eq!(p.w_min(), first.w_min.as_deref());

    let second = p.train_with_rng(&mut StdRng::seed_from_u64(11));
    assert_ne!(first.initial_weights(), second.initial_weights());
    assert_eq!(p.w_min(), second.w_min.as_deref());
}

#[test]
fn saved_model_predicts_like_the_perceptron() {
    let ds = Dataset::from_pairs((0..8).map(|i| (vec![i as f64, (i % 3) as f64], 2.0 * i as f64 - 1.0))).unwrap();
    let mut p = NonLinearPerceptron::new(&ds, TrainConfig::new(0.05, 300)).unwrap();
    p.train_with_rng(&mut StdRng::seed_from_u64(42));

    let path = std::env::temp_dir().join(format!("tanh_perceptron_it_{}.json", std::process::id()));
    let path = path.to_str().unwrap();
    p.model().unwrap().save_json(path).unwrap();
    let loaded = TrainedModel::load_json(path).unwrap();
    std::fs::remove_file(path).ok();

    for sample in ds.samples() {
        let a = loaded.predict(&sample.features).unwrap();
        let b = p.predict(&sample.features).unwrap();
        assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }
}

#[test]
fn ragged_input_is_rejected_at_ingestion() {
    let err = Dataset::from_pairs(vec![(vec![0.0, 0.0], 1.0), (vec![0.0, 1.0, 2.0], 2.0)]).unwrap_err();
    assert!(matches!(err, PerceptronError::DimensionMismatch { expected: 2, actual: 3 }));
}

#[test]
fn saturated_data_stops_on_zero_error() {
    let ds = Dataset::from_pairs(vec![(vec![-1000.0], 0.0), (vec![1000.0], 1.0)]).unwrap();
    let mut p = NonLinearPerceptron::new(&ds, TrainConfig::new(0.1, 1000)).unwrap();
    let report = p.train_with_rng(&mut StdRng::seed_from_u64(3));

    assert!(report.iterations < 1000, "ran {} iterations", report.iterations);
    assert_eq!(report.min_error, Some(0.0));
    assert_eq!(report.errors().last(), Some(0.0));
}

#[test]
fn empty_report_has_no_initial_weights() {
    let report = TrainingReport { trace: vec![], w_min: None, min_error: None, iterations: 0 };
    assert_eq!(report.initial_weights(), None);
}
