pub mod csv;
pub mod dataset;
pub mod normalizer;

pub use csv::{load_csv, parse_csv};
pub use dataset::{Dataset, Sample};
pub use normalizer::Normalizer;
