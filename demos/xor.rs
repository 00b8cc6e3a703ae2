use tanh_perceptron::{Dataset, NonLinearPerceptron, TrainConfig};

fn main() {
    env_logger::init();

    let dataset = Dataset::from_pairs(vec![
        (vec![0.0, 0.0], -1.0),
        (vec![0.0, 1.0], 1.0),
        (vec![1.0, 0.0], 1.0),
        (vec![1.0, 1.0], -1.0),
    ])
    .expect("XOR data set is well formed");

    let mut perceptron = NonLinearPerceptron::new(&dataset, TrainConfig::new(0.1, 1000))
        .expect("XOR targets span a non-degenerate range");
    let report = perceptron.train();

    for snapshot in report.trace.iter().skip(1) {
        println!("step {:4}: error = {:.6}", snapshot.step, snapshot.error.unwrap_or(f64::NAN));
    }

    // A single layer cannot separate XOR; the error plateaus.
    for sample in dataset.samples() {
        let y = perceptron.predict(&sample.features).expect("trained");
        println!("Input: {:?} -> Output: {:.4}", sample.features, y);
    }
}
