use clap::Parser;
use log::{error, info};

use tanh_perceptron::data::load_csv;
use tanh_perceptron::{NonLinearPerceptron, Result, TrainConfig};

/// Trains a tanh perceptron on a CSV file (features..., target) and prints
/// a prediction for every training row.
///
/// Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=debug`.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// CSV data set; the last column is the target.
    data: String,
    /// JSON file with `learning_rate` and `limit`; flags below take precedence.
    #[clap(short, long)]
    config: Option<String>,
    #[clap(short = 'r', long)]
    learning_rate: Option<f64>,
    #[clap(short, long)]
    limit: Option<usize>,
    /// Where to write the trained model as JSON.
    #[clap(short, long)]
    save: Option<String>,
}

impl Args {
    fn exec(self) -> Result<()> {
        let mut config = match self.config {
            Some(ref path) => TrainConfig::load_json(path)?,
            None => TrainConfig::default(),
        };
        if let Some(lr) = self.learning_rate {
            config.learning_rate = lr;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }

        let dataset = load_csv(&self.data)?;
        info!("loaded {} samples with {} features from {}", dataset.len(), dataset.dimension(), self.data);

        let mut perceptron = NonLinearPerceptron::new(&dataset, config)?;
        let report = perceptron.train();

        println!(
            "iterations: {}  improving steps: {}  best error: {:.6}",
            report.iterations,
            report.trace.len() - 1,
            report.min_error.unwrap_or(f64::NAN)
        );

        for sample in dataset.samples() {
            let predicted = perceptron.predict(&sample.features)?;
            println!("{:?} -> expected {:.4}, predicted {:.4}", sample.features, sample.target, predicted);
        }

        if let Some(ref path) = self.save {
            perceptron.model()?.save_json(path)?;
            info!("model written to {}", path);
        }

        Ok(())
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = Args::parse().exec() {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
