use serde::{Serialize, Deserialize};

use crate::data::dataset::{Dataset, Sample};
use crate::error::{PerceptronError, Result};

/// Affine map of targets onto `[-1, 1]` using the training set's min and max.
///
/// A `Normalizer` only exists after a successful [`Normalizer::fit`], so
/// `denormalize` can never run against an unset range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalizer {
    min_val: f64,
    max_val: f64,
}

impl Normalizer {
    /// Computes the range from `targets`.
    ///
    /// Fails with `DegenerateRange` when all targets are equal (this includes a
    /// single-sample set), with `NonFiniteValue` on a NaN or infinite target and
    /// with `EmptyDataset` when there are none.
    pub fn fit<I>(targets: I) -> Result<Normalizer>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut range: Option<(f64, f64)> = None;

        for (idx, y) in targets.into_iter().enumerate() {
            if !y.is_finite() {
                return Err(PerceptronError::NonFiniteValue { row: idx + 1 });
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(y), hi.max(y)),
                None => (y, y),
            });
        }

        let (min_val, max_val) = range.ok_or(PerceptronError::EmptyDataset)?;
        if max_val == min_val {
            return Err(PerceptronError::DegenerateRange { value: min_val });
        }
        Ok(Normalizer { min_val, max_val })
    }

    /// Rebuilds a normalizer from a stored range.
    pub(crate) fn from_range(min_val: f64, max_val: f64) -> Result<Normalizer> {
        if !min_val.is_finite() || !max_val.is_finite() || max_val <= min_val {
            return Err(PerceptronError::UninitializedModel);
        }
        Ok(Normalizer { min_val, max_val })
    }

    pub fn min_val(&self) -> f64 {
        self.min_val
    }

    pub fn max_val(&self) -> f64 {
        self.max_val
    }

    /// `2 * (y - min) / (max - min) - 1`
    pub fn normalize(&self, y: f64) -> f64 {
        2.0 * ((y - self.min_val) / (self.max_val - self.min_val)) - 1.0
    }

    /// `(y_norm + 1) / 2 * (max - min) + min`
    pub fn denormalize(&self, y_norm: f64) -> f64 {
        (y_norm + 1.0) / 2.0 * (self.max_val - self.min_val) + self.min_val
    }

    /// Same feature vectors, targets rescaled.
    pub fn normalize_dataset(&self, dataset: &Dataset) -> Vec<Sample> {
        dataset.samples().iter()
            .map(|s| Sample::new(s.features.clone(), self.normalize(s.target)))
            .collect()
    }
}
