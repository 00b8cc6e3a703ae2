pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod data;
pub mod model;
pub mod train;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::activation::Tanh;
pub use data::dataset::{Dataset, Sample};
pub use data::normalizer::Normalizer;
pub use model::model::TrainedModel;
pub use train::perceptron::NonLinearPerceptron;
pub use train::report::{TrainingReport, WeightSnapshot};
pub use train::train_config::TrainConfig;
