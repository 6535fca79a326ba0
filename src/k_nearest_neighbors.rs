use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::debug;

use crate::error::{Error, Result};

/// Majority-vote classifier over the `neighbors` closest training rows by
/// Euclidean distance.
///
/// Equal distances are ordered by training row index, and equal vote counts
/// go to the lowest label.
#[derive(Debug, Clone)]
pub struct KNearestNeighbors {
    neighbors: usize,
    train_features: Option<Array2<f64>>,
    train_labels: Vec<usize>,
}

impl KNearestNeighbors {
    pub fn new(neighbors: usize) -> Self {
        Self {
            neighbors,
            train_features: None,
            train_labels: Vec::new(),
        }
    }

    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    pub fn is_fitted(&self) -> bool {
        self.train_features.is_some()
    }

    /// Replaces the training set. Any previous fit is discarded first, so a
    /// failed call leaves the model unfitted.
    pub fn fit(&mut self, features: ArrayView2<f64>, labels: &[usize]) -> Result<()> {
        self.train_features = None;
        self.train_labels.clear();

        let samples = features.nrows();
        if samples != labels.len() {
            return Err(Error::LengthMismatch {
                features: samples,
                labels: labels.len(),
            });
        }
        if samples == 0 {
            return Err(Error::Empty);
        }
        if self.neighbors == 0 || self.neighbors > samples {
            return Err(Error::InvalidNeighbors {
                neighbors: self.neighbors,
                samples,
            });
        }

        self.train_features = Some(features.to_owned());
        self.train_labels = labels.to_vec();
        debug!(
            samples,
            features = features.ncols(),
            neighbors = self.neighbors,
            "fitted classifier"
        );

        Ok(())
    }

    pub fn predict(&self, query: ArrayView1<f64>) -> Result<usize> {
        let train_features = self.train_features.as_ref().ok_or(Error::NotFitted)?;
        if query.len() != train_features.ncols() {
            return Err(Error::DimensionMismatch {
                expected: train_features.ncols(),
                found: query.len(),
            });
        }

        let mut distances: Vec<(f64, usize)> = train_features
            .rows()
            .into_iter()
            .enumerate()
            .map(|(index, row)| (euclidean_distance(row, query), index))
            .collect();

        distances.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        distances.truncate(self.neighbors);

        Ok(self.vote(&distances))
    }

    pub fn predict_batch(&self, features: ArrayView2<f64>) -> Result<Vec<usize>> {
        features.rows().into_iter().map(|row| self.predict(row)).collect()
    }

    /// Fraction of rows in `features` predicted as their label.
    pub fn score(&self, features: ArrayView2<f64>, labels: &[usize]) -> Result<f64> {
        if features.nrows() != labels.len() {
            return Err(Error::LengthMismatch {
                features: features.nrows(),
                labels: labels.len(),
            });
        }
        if labels.is_empty() {
            return Err(Error::Empty);
        }

        let predictions = self.predict_batch(features)?;
        let correct_predictions = predictions
            .iter()
            .zip(labels)
            .filter(|(prediction, label)| prediction == label)
            .count();

        let accuracy = correct_predictions as f64 / labels.len() as f64;
        debug!(
            correct_predictions,
            samples = labels.len(),
            accuracy,
            "scored classifier"
        );

        Ok(accuracy)
    }

    fn vote(&self, nearest: &[(f64, usize)]) -> usize {
        let classes = nearest
            .iter()
            .map(|&(_, index)| self.train_labels[index])
            .max()
            .map_or(0, |label| label + 1);

        let mut counts = vec![0usize; classes];
        for &(_, index) in nearest {
            counts[self.train_labels[index]] += 1;
        }

        let mut best_label = 0;
        for (label, &count) in counts.iter().enumerate() {
            if count > counts[best_label] {
                best_label = label;
            }
        }

        best_label
    }
}

pub fn euclidean_distance(first: ArrayView1<f64>, second: ArrayView1<f64>) -> f64 {
    let difference = &first - &second;

    difference.dot(&difference).sqrt()
}
