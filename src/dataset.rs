use csv::{ReaderBuilder, Trim};
use ndarray::Array2;
use std::io::Read;
use tracing::debug;

use crate::error::{Error, Result};

pub const DIMENSIONS: usize = 4;

/// Species names in label order.
pub const CLASSES: [&str; 3] = ["setosa", "versicolor", "virginica"];

const IRIS_CSV: &str = include_str!("../data/iris.csv");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: [f64; DIMENSIONS],
    pub label: usize,
}

/// Feature rows and their labels as parallel sequences, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Array2<f64>,
    pub labels: Vec<usize>,
}

impl Dataset {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let features =
            Array2::from_shape_fn((samples.len(), DIMENSIONS), |(i, j)| samples[i].features[j]);
        let labels = samples.iter().map(|sample| sample.label).collect();

        Self { features, labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn to_label(species: &str) -> Result<usize> {
    CLASSES
        .iter()
        .position(|&name| name == species)
        .ok_or_else(|| Error::UnknownSpecies(species.to_string()))
}

pub fn parse_samples<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();

    for (index, result) in reader.records().enumerate() {
        const SPECIES_FIELD_INDEX: usize = DIMENSIONS;

        let record = result?;
        let record_number = index + 1;

        if record.len() != DIMENSIONS + 1 {
            return Err(Error::FieldCount {
                record: record_number,
                expected: DIMENSIONS + 1,
                found: record.len(),
            });
        }

        let mut features = [0.0; DIMENSIONS];
        for (feature, value) in features.iter_mut().zip(record.iter()) {
            *feature = value.parse::<f64>().map_err(|_| Error::InvalidNumber {
                record: record_number,
                value: value.to_string(),
            })?;
        }

        let label = to_label(&record[SPECIES_FIELD_INDEX])?;

        samples.push(Sample { features, label });
    }

    Ok(samples)
}

pub fn parse_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let samples = parse_samples(reader)?;

    Ok(Dataset::from_samples(&samples))
}

/// Loads the bundled 150-sample iris table.
pub fn load_iris() -> Result<Dataset> {
    let dataset = parse_dataset(IRIS_CSV.as_bytes())?;
    debug!(
        samples = dataset.len(),
        features = DIMENSIONS,
        classes = CLASSES.len(),
        "loaded iris dataset"
    );

    Ok(dataset)
}
