pub mod perceptron;
pub mod report;
pub mod train_config;

pub use perceptron::NonLinearPerceptron;
pub use report::{TrainingReport, WeightSnapshot};
pub use train_config::TrainConfig;
