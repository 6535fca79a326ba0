use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("unexpected species '{0}'")]
    UnknownSpecies(String),

    #[error("record {record}: expected {expected} fields, found {found}")]
    FieldCount {
        record: usize,
        expected: usize,
        found: usize,
    },

    #[error("record {record}: '{value}' is not a number")]
    InvalidNumber { record: usize, value: String },

    #[error("test fraction must be in (0, 1), got {0}")]
    InvalidTestFraction(f64),

    #[error("split of {samples} samples leaves {train} train and {test} test samples")]
    DegenerateSplit {
        samples: usize,
        train: usize,
        test: usize,
    },

    #[error("{features} feature rows but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("expected {expected} features, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("cannot use {neighbors} neighbors with {samples} training samples")]
    InvalidNeighbors { neighbors: usize, samples: usize },

    #[error("empty sample set")]
    Empty,

    #[error("model is not fitted")]
    NotFitted,
}

pub type Result<T> = std::result::Result<T, Error>;
