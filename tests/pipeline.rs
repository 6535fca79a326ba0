use std::collections::HashSet;
use std::process::Command;

use knn::dataset::load_iris;
use knn::experiment::{run, ExperimentConfig};
use knn::k_nearest_neighbors::KNearestNeighbors;
use knn::split::train_test_split;

#[test]
fn default_run_uses_120_30_split() {
    let report = run(&ExperimentConfig::default()).unwrap();

    assert_eq!(report.train_size, 120);
    assert_eq!(report.test_size, 30);
    assert_eq!(report.test_indices.iter().collect::<HashSet<_>>().len(), 30);
}

#[test]
fn seed_42_scores_29_of_30() {
    let report = run(&ExperimentConfig::default()).unwrap();

    assert_eq!(
        report.test_indices,
        vec![
            98, 44, 62, 2, 139, 140, 121, 92, 60, 34, 120, 90, 43, 117, 79, 88, 23, 83, 130, 4, 5,
            132, 125, 113, 128, 73, 63, 42, 91, 80
        ]
    );
    assert!((report.accuracy - 29.0 / 30.0).abs() < f64::EPSILON);
}

#[test]
fn accuracy_is_a_high_fraction() {
    let report = run(&ExperimentConfig::default()).unwrap();

    assert!((0.0..=1.0).contains(&report.accuracy));
    assert!(report.accuracy >= 0.8, "accuracy {}", report.accuracy);
}

#[test]
fn repeated_runs_are_identical() {
    let config = ExperimentConfig::default();
    let first = run(&config).unwrap();
    let second = run(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        format!("{:.3}", first.accuracy),
        format!("{:.3}", second.accuracy)
    );
}

#[test]
fn neighbor_count_does_not_change_split() {
    let base = run(&ExperimentConfig::default()).unwrap();

    for neighbors in [1, 5, 7] {
        let config = ExperimentConfig {
            neighbors,
            ..ExperimentConfig::default()
        };
        let report = run(&config).unwrap();

        assert_eq!(report.test_indices, base.test_indices);
        assert!((0.0..=1.0).contains(&report.accuracy));
    }
}

#[test]
fn every_training_sample_is_recalled_with_one_neighbor() {
    let dataset = load_iris().unwrap();
    let split = train_test_split(dataset.features.view(), &dataset.labels, 0.2, 42).unwrap();

    let mut model = KNearestNeighbors::new(1);
    model
        .fit(split.train_features.view(), &split.train_labels)
        .unwrap();

    // duplicate iris rows always share a species
    let accuracy = model
        .score(split.train_features.view(), &split.train_labels)
        .unwrap();
    assert!((accuracy - 1.0).abs() < f64::EPSILON, "accuracy {accuracy}");
}

#[test]
fn binary_prints_one_accuracy_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_knn"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    assert_eq!(lines[0], "Test accuracy: 0.967");
}
