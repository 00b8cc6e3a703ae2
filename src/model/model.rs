use serde::{Serialize, Deserialize};

use crate::data::normalizer::Normalizer;
use crate::error::{PerceptronError, Result};
use crate::math::vector::{excite, with_bias};

/// The state needed to make predictions: best weights plus the target range
/// they were trained against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    /// `weights[0]` is the bias, the rest line up with the input features.
    pub weights: Vec<f64>,
    pub normalizer: Normalizer,
}

impl TrainedModel {
    pub fn new(weights: Vec<f64>, normalizer: Normalizer) -> TrainedModel {
        TrainedModel { weights, normalizer }
    }

    /// Number of input features the model expects.
    pub fn dimension(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }

    /// Predicts the target for an unnormalized feature vector.
    ///
    /// The raw excitation (not `tanh` of it) is denormalized. Training compares
    /// activated outputs, so this is an asymmetry kept on purpose; see DESIGN.md.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if self.weights.is_empty() {
            return Err(PerceptronError::UninitializedModel);
        }
        if features.len() != self.dimension() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.dimension(),
                actual: features.len(),
            });
        }

        let h = excite(&with_bias(features), &self.weights);
        Ok(self.normalizer.denormalize(h))
    }

    /// Serializes the model to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a model written by `save_json`, re-checking its invariants.
    pub fn load_json(path: &str) -> Result<TrainedModel> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let model: TrainedModel = serde_json::from_reader(reader)?;

        let normalizer = Normalizer::from_range(model.normalizer.min_val(), model.normalizer.max_val())?;
        if model.weights.is_empty() {
            return Err(PerceptronError::UninitializedModel);
        }

        Ok(TrainedModel { normalizer, ..model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TrainedModel {
        TrainedModel::new(vec![0.5, 1.0, -1.0], Normalizer::fit(vec![0.0, 10.0]).unwrap())
    }

    #[test]
    fn predicts_denormalized_excitation() {
        // h = 0.5 + 0.2 - 0.4 = 0.3  ->  (1.3 / 2) * 10
        let y = model().predict(&[0.2, 0.4]).unwrap();
        assert!((y - 6.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_wrong_dimension() {
        let err = model().predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, PerceptronError::DimensionMismatch { expected: 2, actual: 3 }));
    }

    #[test]
    fn empty_weights_cannot_predict() {
        let empty = TrainedModel::new(vec![], Normalizer::fit(vec![0.0, 1.0]).unwrap());
        assert!(matches!(empty.predict(&[]), Err(PerceptronError::UninitializedModel)));
    }

    #[test]
    fn json_round_trip() {
        let path = std::env::temp_dir().join(format!("tanh_perceptron_model_{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let original = model();
        original.save_json(path).unwrap();
        let loaded = TrainedModel::load_json(path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(loaded, original);
    }

    #[test]
    fn load_rejects_degenerate_range() {
        let path = std::env::temp_dir().join(format!("tanh_perceptron_bad_{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        std::fs::write(path, r#"{"weights":[0.1,0.2],"normalizer":{"min_val":3.0,"max_val":3.0}}"#).unwrap();
        let res = TrainedModel::load_json(path);
        std::fs::remove_file(path).ok();

        assert!(matches!(res, Err(PerceptronError::UninitializedModel)));
    }
}
