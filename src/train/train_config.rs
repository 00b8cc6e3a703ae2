use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// Hyperparameters for a training run.
///
/// # Fields
/// - `learning_rate` — SGD step size, must be finite and `> 0`
/// - `limit`         — maximum number of single-sample updates, must be `> 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub limit: usize,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, limit: usize) -> Self {
        TrainConfig { learning_rate, limit }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.limit == 0 {
            return Err(PerceptronError::InvalidConfig("limit must be at least 1".into()));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Loads and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { learning_rate: 0.1, limit: 1000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TrainConfig::new(lr, 10).validate(),
                Err(PerceptronError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_limit() {
        assert!(matches!(
            TrainConfig::new(0.1, 0).validate(),
            Err(PerceptronError::InvalidConfig(_))
        ));
    }

    #[test]
    fn json_round_trip() {
        let path = std::env::temp_dir().join(format!("tanh_perceptron_cfg_{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let config = TrainConfig::new(0.05, 250);
        config.save_json(path).unwrap();
        let loaded = TrainConfig::load_json(path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(loaded, config);
    }
}
