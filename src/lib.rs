pub mod dataset;
pub mod error;
pub mod experiment;
pub mod k_nearest_neighbors;
pub mod split;

pub use error::{Error, Result};
