use rand::Rng;

/// Value prepended to every feature vector so that `w[0]` acts as the bias.
pub const BIAS_SENTINEL: f64 = 1.0;

/// Returns `[1, x_1, ..., x_d]`.
pub fn with_bias(features: &[f64]) -> Vec<f64> {
    let mut res = Vec::with_capacity(features.len() + 1);
    res.push(BIAS_SENTINEL);
    res.extend_from_slice(features);
    res
}

/// Excitation `h = w[0] + sum(x[i] * w[i])` for `i >= 1`.
///
/// `x_with_bias[0]` is ignored; the bias weight is added directly.
///
/// # Panics
/// Panics if the two slices differ in length.
pub fn excite(x_with_bias: &[f64], weights: &[f64]) -> f64 {
    if x_with_bias.len() != weights.len() {
        panic!(
            "Vectors are of incorrect sizes: input {} vs weights {}",
            x_with_bias.len(),
            weights.len()
        )
    }

    weights[0]
        + x_with_bias[1..].iter()
            .zip(weights[1..].iter())
            .map(|(x, w)| x * w)
            .sum::<f64>()
}

/// Elementwise `a + b`, producing a new vector.
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.len() != b.len() {
        panic!("Vectors are of incorrect sizes")
    }
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Elementwise `v * k`.
pub fn scale(v: &[f64], k: f64) -> Vec<f64> {
    v.iter().map(|x| x * k).collect()
}

/// `n` values drawn uniformly from `[0, 1)`.
pub fn random_uniform<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}
