use rand::Rng;
use std::ops::Index;

/// Scale of the uniform interval `[-scale, +scale]` used for fresh weights.
pub const INITIAL_WEIGHT_SCALE: f64 = 1.0;

/// Dense weights between two adjacent layers.
///
/// Storage is flat and row-major: entry `(i, j)` is the weight from input
/// neuron `j` to output neuron `i`, stored at `i * input_dimension + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    input_dimension: usize,
    output_dimension: usize,
    weights: Vec<f64>,
}

impl WeightMatrix {
    pub fn zeros(input_dimension: usize, output_dimension: usize) -> WeightMatrix {
        WeightMatrix {
            input_dimension,
            output_dimension,
            weights: vec![0.0; input_dimension * output_dimension],
        }
    }

    /// Draws every weight uniformly from `[-scale, +scale]`.
    pub fn random<R: Rng + ?Sized>(
        input_dimension: usize,
        output_dimension: usize,
        scale: f64,
        rng: &mut R,
    ) -> WeightMatrix {
        let weights = (0..input_dimension * output_dimension)
            .map(|_| 2.0 * scale * rng.gen::<f64>() - scale)
            .collect();

        WeightMatrix {
            input_dimension,
            output_dimension,
            weights,
        }
    }

    /// Wraps caller-supplied row-major weights.
    ///
    /// Returns `None` when `weights.len() != input_dimension * output_dimension`.
    pub fn from_weights(
        input_dimension: usize,
        output_dimension: usize,
        weights: Vec<f64>,
    ) -> Option<WeightMatrix> {
        if weights.len() != input_dimension * output_dimension {
            return None;
        }
        Some(WeightMatrix {
            input_dimension,
            output_dimension,
            weights,
        })
    }

    pub fn input_dimension(&self) -> usize {
        self.input_dimension
    }

    pub fn output_dimension(&self) -> usize {
        self.output_dimension
    }

    /// Flat row-major view of the weights.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Row `i`: every weight feeding output neuron `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.input_dimension;
        &self.weights[start..start + self.input_dimension]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = i * self.input_dimension;
        &mut self.weights[start..start + self.input_dimension]
    }

    /// `Σ_j row(i)[j] * inputs[j]`, the forward pre-activation of output neuron `i`.
    pub fn weighted_sum(&self, i: usize, inputs: &[f64]) -> f64 {
        self.row(i).iter().zip(inputs).map(|(w, x)| w * x).sum()
    }

    /// `Σ_i (i, j) * errors[i]`, i.e. column `j` of the matrix dotted with the
    /// downstream errors. This is the transpose product used by backprop.
    pub fn transposed_sum(&self, j: usize, errors: &[f64]) -> f64 {
        errors
            .iter()
            .enumerate()
            .map(|(i, e)| self[(i, j)] * e)
            .sum()
    }
}

impl Index<(usize, usize)> for WeightMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(
            i < self.output_dimension && j < self.input_dimension,
            "weight index ({i}, {j}) out of bounds for {}x{} matrix",
            self.output_dimension,
            self.input_dimension
        );
        &self.weights[i * self.input_dimension + j]
    }
}
