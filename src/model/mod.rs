pub mod model;

pub use model::TrainedModel;
