use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// One labeled example: a feature vector and its scalar target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub features: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: f64) -> Sample {
        Sample { features, target }
    }

    pub fn is_finite(&self) -> bool {
        self.target.is_finite() && self.features.iter().all(|x| x.is_finite())
    }
}

/// A non-empty, ordered set of samples sharing one feature dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
    dimension: usize,
}

impl Dataset {
    /// Builds a data set, checking that every feature vector has the length of
    /// the first one and that every value is finite.
    pub fn new(samples: Vec<Sample>) -> Result<Dataset> {
        let dimension = samples.first()
            .map(|s| s.features.len())
            .ok_or(PerceptronError::EmptyDataset)?;

        if let Some(bad) = samples.iter().find(|s| s.features.len() != dimension) {
            return Err(PerceptronError::DimensionMismatch {
                expected: dimension,
                actual: bad.features.len(),
            });
        }

        if let Some(idx) = samples.iter().position(|s| !s.is_finite()) {
            return Err(PerceptronError::NonFiniteValue { row: idx + 1 });
        }

        Ok(Dataset { samples, dimension })
    }

    /// Convenience constructor from `(features, target)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Dataset>
    where
        I: IntoIterator<Item = (Vec<f64>, f64)>,
    {
        Dataset::new(
            pairs.into_iter()
                .map(|(features, target)| Sample::new(features, target))
                .collect()
        )
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of features per sample (bias slot excluded).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.target)
    }
}
