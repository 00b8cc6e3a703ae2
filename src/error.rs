use thiserror::Error;

/// Everything that can go wrong while building, training or querying a perceptron.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// All training targets share one value, so min-max scaling would divide by zero.
    #[error("degenerate target range: every target equals {value}")]
    DegenerateRange { value: f64 },

    #[error("the perceptron has not been trained yet")]
    UntrainedModel,

    /// A persisted model carries no usable normalization range.
    #[error("model has no valid normalization range")]
    UninitializedModel,

    #[error("dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A feature or target is NaN or infinite. `row` is 1-based.
    #[error("row {row} contains a non-finite value")]
    NonFiniteValue { row: usize },

    #[error("data set contains no samples")]
    EmptyDataset,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV row {row}: {message}")]
    Csv { row: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
