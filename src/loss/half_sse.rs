pub struct HalfSseLoss;

impl HalfSseLoss {
    /// Scalar loss: 0.5 · sum((expected - predicted)²), not divided by the sample count.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2))
            .sum::<f64>() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_sum_of_squares() {
        let loss = HalfSseLoss::loss(&[0.0, 1.0, -1.0], &[1.0, 1.0, 1.0]);
        assert!((loss - 2.5).abs() < 1e-12);
    }

    #[test]
    fn zero_when_equal() {
        assert_eq!(HalfSseLoss::loss(&[0.3, -0.2], &[0.3, -0.2]), 0.0);
    }
}
