use crate::math::weight_matrix::WeightMatrix;

/// Plain online gradient step; no momentum, decay or clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to the weights feeding a layer:
    /// `w(i, j) += eta * error[i] * inputs[j]`.
    ///
    /// `error` is the receiving layer's error, `inputs` the sending layer's
    /// output from the most recent forward pass.
    pub fn step(&self, weights: &mut WeightMatrix, error: &[f64], inputs: &[f64]) {
        for (i, &e) in error.iter().enumerate() {
            for (w, &x) in weights.row_mut(i).iter_mut().zip(inputs) {
                *w += self.learning_rate * (e * x);
            }
        }
    }
}
