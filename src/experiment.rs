use tracing::info;

use crate::dataset::load_iris;
use crate::error::Result;
use crate::k_nearest_neighbors::KNearestNeighbors;
use crate::split::train_test_split;

pub const TEST_FRACTION: f64 = 0.2;
pub const SEED: u64 = 42;
pub const NEIGHBORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentConfig {
    pub test_fraction: f64,
    pub seed: u64,
    pub neighbors: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            test_fraction: TEST_FRACTION,
            seed: SEED,
            neighbors: NEIGHBORS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub accuracy: f64,
    pub train_size: usize,
    pub test_size: usize,
    pub test_indices: Vec<usize>,
}

/// Loads iris, splits it, fits the classifier on the train side and scores
/// it on the test side.
pub fn run(config: &ExperimentConfig) -> Result<Report> {
    let dataset = load_iris()?;

    let split = train_test_split(
        dataset.features.view(),
        &dataset.labels,
        config.test_fraction,
        config.seed,
    )?;

    let mut model = KNearestNeighbors::new(config.neighbors);
    model.fit(split.train_features.view(), &split.train_labels)?;

    let accuracy = model.score(split.test_features.view(), &split.test_labels)?;
    info!(
        accuracy,
        neighbors = config.neighbors,
        seed = config.seed,
        "evaluated classifier"
    );

    Ok(Report {
        accuracy,
        train_size: split.train_labels.len(),
        test_size: split.test_labels.len(),
        test_indices: split.test_indices,
    })
}
