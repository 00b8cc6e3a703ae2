use log::{debug, info, trace};
use rand::Rng;

use crate::activation::activation::Tanh;
use crate::data::dataset::{Dataset, Sample};
use crate::data::normalizer::Normalizer;
use crate::error::{PerceptronError, Result};
use crate::loss::half_sse::HalfSseLoss;
use crate::math::vector::{add, excite, random_uniform, scale, with_bias};
use crate::model::model::TrainedModel;
use crate::train::report::{TrainingReport, WeightSnapshot};
use crate::train::train_config::TrainConfig;

/// Single-layer perceptron with a `tanh` output, trained one sample at a time.
///
/// Targets are rescaled to `[-1, 1]` at construction; the range is kept for
/// denormalizing predictions.
#[derive(Debug, Clone)]
pub struct NonLinearPerceptron {
    config: TrainConfig,
    normalizer: Normalizer,
    dimension: usize,
    /// Normalized samples with the bias sentinel already prepended.
    data_with_bias: Vec<Sample>,
    w_min: Option<Vec<f64>>,
}

impl NonLinearPerceptron {
    /// Validates `config`, fits the target normalizer and prepares the training data.
    ///
    /// Fails with `DegenerateRange` when every target is the same value.
    pub fn new(dataset: &Dataset, config: TrainConfig) -> Result<NonLinearPerceptron> {
        config.validate()?;
        let normalizer = Normalizer::fit(dataset.targets())?;

        let data_with_bias = normalizer.normalize_dataset(dataset)
            .into_iter()
            .map(|s| Sample::new(with_bias(&s.features), s.target))
            .collect();

        Ok(NonLinearPerceptron {
            config,
            normalizer,
            dimension: dataset.dimension(),
            data_with_bias,
            w_min: None,
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Best weights found so far, if any training step has improved.
    pub fn w_min(&self) -> Option<&[f64]> {
        self.w_min.as_deref()
    }

    /// Trains with the thread-local RNG.
    pub fn train(&mut self) -> TrainingReport {
        self.train_with_rng(&mut rand::thread_rng())
    }

    /// Runs online gradient descent for at most `config.limit` updates.
    ///
    /// Each update picks one sample uniformly at random (with replacement),
    /// moves the weights along the error gradient for that sample, then scores
    /// the new weights against the whole training set. Weights that strictly
    /// beat the best error so far become `w_min` and are appended to the trace.
    /// The loop also stops once the best error is exactly zero.
    pub fn train_with_rng<R: Rng>(&mut self, rng: &mut R) -> TrainingReport {
        let n = self.data_with_bias.len();
        let mut w = random_uniform(self.dimension + 1, rng);

        let mut trace = vec![WeightSnapshot { step: 0, error: None, weights: w.clone() }];
        let mut min_error = f64::INFINITY;
        let mut w_min: Option<Vec<f64>> = None;
        let mut i = 0;

        info!(
            "training on {} samples ({} features), learning_rate = {}, limit = {}",
            n, self.dimension, self.config.learning_rate, self.config.limit
        );

        while min_error > 0.0 && i < self.config.limit {
            let sample = &self.data_with_bias[rng.gen_range(0..n)];

            let h = excite(&sample.features, &w);
            let o = Tanh::function(h);

            let gradient = self.config.learning_rate * (sample.target - o) * Tanh::derivative(h);
            w = add(&w, &scale(&sample.features, gradient));

            let error = self.error_with_bias(&w);
            i += 1;
            trace!("iteration {}: error = {:.6}", i, error);

            if error < min_error {
                min_error = error;
                w_min = Some(w.clone());
                trace.push(WeightSnapshot { step: i, error: Some(error), weights: w.clone() });
                debug!("iteration {}: new best error {:.6}", i, error);
            }
        }

        info!(
            "training finished after {} iterations, best error = {:.6}, {} improving steps",
            i,
            min_error,
            trace.len() - 1
        );

        if let Some(ref best) = w_min {
            self.w_min = Some(best.clone());
        }

        TrainingReport {
            trace,
            min_error: w_min.as_ref().map(|_| min_error),
            w_min,
            iterations: i,
        }
    }

    /// Half-sum-of-squares error of `weights` over the normalized training set.
    ///
    /// # Panics
    /// Panics if `weights.len()` is not the feature dimension plus one.
    pub fn training_error(&self, weights: &[f64]) -> f64 {
        self.error_with_bias(weights)
    }

    /// Predicts the (denormalized) target for `features`.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        self.model()?.predict(features)
    }

    /// Snapshot of the trained state, suitable for saving.
    pub fn model(&self) -> Result<TrainedModel> {
        match self.w_min {
            Some(ref w) => Ok(TrainedModel::new(w.clone(), self.normalizer)),
            None => Err(PerceptronError::UntrainedModel),
        }
    }

    fn error_with_bias(&self, w: &[f64]) -> f64 {
        let (outputs, targets): (Vec<f64>, Vec<f64>) = self.data_with_bias.iter()
            .map(|s| (Tanh::function(excite(&s.features, w)), s.target))
            .unzip();
        HalfSseLoss::loss(&outputs, &targets)
    }
}
