use crate::activation::sigmoid::{dpsidx, psi};
use crate::math::weight_matrix::WeightMatrix;

/// Per-layer scratch buffers, reused across every classify/train call.
///
/// - `input` : pre-activation sums (unused on the input layer, stays 0)
/// - `output`: post-activation values (the raw input vector on layer 0)
/// - `error` : local gradient signal written during backprop
///
/// All three have length `dimension` for the lifetime of the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    dimension: usize,
    pub input: Vec<f64>,
    pub output: Vec<f64>,
    pub error: Vec<f64>,
}

impl Layer {
    pub fn new(dimension: usize) -> Layer {
        Layer {
            dimension,
            input: vec![0.0; dimension],
            output: vec![0.0; dimension],
            error: vec![0.0; dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Computes this layer's pre-activation sums from the previous layer's
    /// output, then activates them. No bias term.
    pub fn feed_from(&mut self, previous_output: &[f64], weights: &WeightMatrix) {
        for (i, z) in self.input.iter_mut().enumerate() {
            *z = weights.weighted_sum(i, previous_output);
        }
        for (a, &z) in self.output.iter_mut().zip(&self.input) {
            *a = psi(z);
        }
    }

    /// Sets the output-layer error to the raw residual `desired - actual`.
    ///
    /// The activation derivative is deliberately not applied here.
    pub fn set_residual(&mut self, desired: &[f64]) {
        for ((e, d), a) in self.error.iter_mut().zip(desired).zip(&self.output) {
            *e = d - a;
        }
    }

    /// Pulls the error back through `weights` (which connect this layer to the
    /// next): `error[i] = dpsidx(input[i]) * Σ_j w(j, i) * next_error[j]`.
    pub fn backpropagate_from(&mut self, next_error: &[f64], weights: &WeightMatrix) {
        for (i, e) in self.error.iter_mut().enumerate() {
            *e = dpsidx(self.input[i]) * weights.transposed_sum(i, next_error);
        }
    }
}
