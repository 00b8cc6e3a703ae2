/// Hyperbolic-tangent transfer function used by the perceptron.
pub struct Tanh;

impl Tanh {
    /// `tanh(h)`, output in `(-1, 1)`.
    pub fn function(h: f64) -> f64 {
        h.tanh()
    }

    /// Closed-form derivative: `1 - tanh(h)^2`.
    pub fn derivative(h: f64) -> f64 {
        let t = h.tanh();
        1.0 - t * t
    }
}
