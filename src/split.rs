use ndarray::{Array2, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use tracing::debug;

use crate::error::{Error, Result};

/// Disjoint train/test partition of a dataset. Indices refer to rows of the
/// original dataset, in permutation order.
#[derive(Debug, Clone)]
pub struct Split {
    pub train_features: Array2<f64>,
    pub test_features: Array2<f64>,
    pub train_labels: Vec<usize>,
    pub test_labels: Vec<usize>,
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Returns `(train_size, test_size)` for `samples` rows. The test side is
/// rounded up.
pub fn split_sizes(samples: usize, test_fraction: f64) -> Result<(usize, usize)> {
    if test_fraction.is_nan() || test_fraction <= 0.0 || test_fraction >= 1.0 {
        return Err(Error::InvalidTestFraction(test_fraction));
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let test = (samples as f64 * test_fraction).ceil() as usize;
    let train = samples.saturating_sub(test);

    if train == 0 || test == 0 {
        return Err(Error::DegenerateSplit {
            samples,
            train,
            test,
        });
    }

    Ok((train, test))
}

/// Seeded permutation of `0..samples`. ChaCha12 output is fixed for a given
/// seed across releases, so the permutation only changes if the shuffle
/// algorithm does.
pub fn permutation(samples: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..samples).collect();
    indices.shuffle(&mut rng);

    indices
}

pub fn train_test_split(
    features: ArrayView2<f64>,
    labels: &[usize],
    test_fraction: f64,
    seed: u64,
) -> Result<Split> {
    let samples = features.nrows();
    if samples != labels.len() {
        return Err(Error::LengthMismatch {
            features: samples,
            labels: labels.len(),
        });
    }

    let (train_size, test_size) = split_sizes(samples, test_fraction)?;

    let indices = permutation(samples, seed);
    let (test_indices, train_indices) = indices.split_at(test_size);
    debug!(train_size, test_size, seed, "split dataset");

    Ok(Split {
        train_features: features.select(Axis(0), train_indices),
        test_features: features.select(Axis(0), test_indices),
        train_labels: train_indices.iter().map(|&i| labels[i]).collect(),
        test_labels: test_indices.iter().map(|&i| labels[i]).collect(),
        train_indices: train_indices.to_vec(),
        test_indices: test_indices.to_vec(),
    })
}
