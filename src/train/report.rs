use serde::{Serialize, Deserialize};

/// One entry of the intermediate-weights trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSnapshot {
    /// 1-based iteration that produced these weights; `0` for the initial random vector.
    pub step: usize,
    /// Training error of these weights. `None` for the initial vector, which is
    /// recorded before any error is computed.
    pub error: Option<f64>,
    pub weights: Vec<f64>,
}

/// Outcome of one call to `NonLinearPerceptron::train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Initial weights followed by every strictly improving weight vector, in order.
    pub trace: Vec<WeightSnapshot>,
    /// Best weights of this run; `None` if no step improved.
    pub w_min: Option<Vec<f64>>,
    /// Lowest error reached; `None` if no step improved.
    pub min_error: Option<f64>,
    /// Number of updates performed.
    pub iterations: usize,
}

impl TrainingReport {
    /// The raw weight vectors of the trace.
    pub fn intermediate_weights(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.trace.iter().map(|s| s.weights.as_slice())
    }

    /// The random vector the run started from; `None` only for a hand-built empty trace.
    pub fn initial_weights(&self) -> Option<&[f64]> {
        self.trace.first().map(|s| s.weights.as_slice())
    }

    /// Errors of the improving entries, in trace order.
    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.trace.iter().filter_map(|s| s.error)
    }
}
