use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::data::training_set::TrainingElement;
use crate::layers::layer::Layer;
use crate::loss::stacked_squared::StackedSquaredError;
use crate::math::weight_matrix::{WeightMatrix, INITIAL_WEIGHT_SCALE};
use crate::network::error::{NetworkError, Result};
use crate::optim::sgd::Sgd;

/// Fully connected sigmoid network trained with online backpropagation.
///
/// `weights[k]` always connects `layers[k]` to `layers[k + 1]`. The usual
/// shape is input, hidden, output; the algorithms loop over any layer count.
///
/// Layer buffers are scratch state shared by `classify` and `train`, so a
/// network must have a single writer. Independent networks share nothing.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    weights: Vec<WeightMatrix>,
    training_set: Vec<TrainingElement>,
}

impl Network {
    /// Builds an input/hidden/output network with weights drawn from
    /// `rand::thread_rng()`.
    pub fn new(
        input_dimension: usize,
        output_dimension: usize,
        hidden_dimension: usize,
    ) -> Network {
        Network::with_rng(
            input_dimension,
            output_dimension,
            hidden_dimension,
            &mut rand::thread_rng(),
        )
    }

    /// Same as [`Network::new`] but with a reproducible ChaCha8 source.
    pub fn seeded(
        input_dimension: usize,
        output_dimension: usize,
        hidden_dimension: usize,
        seed: u64,
    ) -> Network {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Network::with_rng(input_dimension, output_dimension, hidden_dimension, &mut rng)
    }

    /// Same as [`Network::new`] with a caller-supplied random source.
    pub fn with_rng<R: Rng + ?Sized>(
        input_dimension: usize,
        output_dimension: usize,
        hidden_dimension: usize,
        rng: &mut R,
    ) -> Network {
        Network::build(&[input_dimension, hidden_dimension, output_dimension], rng)
    }

    /// Builds a network of arbitrary depth; `dimensions` lists layer widths
    /// from input to output.
    pub fn from_topology<R: Rng + ?Sized>(dimensions: &[usize], rng: &mut R) -> Result<Network> {
        if dimensions.len() < 2 {
            return Err(NetworkError::TooFewLayers(dimensions.len()));
        }
        Ok(Network::build(dimensions, rng))
    }

    /// Builds a network around fixed weights instead of random ones.
    ///
    /// `weights[k]` must be `dimensions[k]` inputs by `dimensions[k + 1]` outputs.
    pub fn from_weights(dimensions: &[usize], weights: Vec<WeightMatrix>) -> Result<Network> {
        if dimensions.len() < 2 {
            return Err(NetworkError::TooFewLayers(dimensions.len()));
        }
        if weights.len() != dimensions.len() - 1 {
            return Err(NetworkError::WeightCount {
                expected: dimensions.len() - 1,
                actual: weights.len(),
            });
        }
        for (index, (pair, w)) in dimensions.windows(2).zip(&weights).enumerate() {
            if w.input_dimension() != pair[0] || w.output_dimension() != pair[1] {
                return Err(NetworkError::WeightShape {
                    index,
                    expected_input: pair[0],
                    expected_output: pair[1],
                    actual_input: w.input_dimension(),
                    actual_output: w.output_dimension(),
                });
            }
        }

        Ok(Network {
            layers: dimensions.iter().map(|&d| Layer::new(d)).collect(),
            weights,
            training_set: Vec::new(),
        })
    }

    fn build<R: Rng + ?Sized>(dimensions: &[usize], rng: &mut R) -> Network {
        let layers = dimensions.iter().map(|&d| Layer::new(d)).collect();
        let weights = dimensions
            .windows(2)
            .map(|pair| WeightMatrix::random(pair[0], pair[1], INITIAL_WEIGHT_SCALE, &mut *rng))
            .collect();

        Network {
            layers,
            weights,
            training_set: Vec::new(),
        }
    }

    pub fn input_dimension(&self) -> usize {
        self.layers[0].dimension()
    }

    pub fn output_dimension(&self) -> usize {
        self.layers[self.layers.len() - 1].dimension()
    }

    /// Width of the first hidden layer, or 0 for a network without one.
    pub fn hidden_dimension(&self) -> usize {
        if self.layers.len() > 2 {
            self.layers[1].dimension()
        } else {
            0
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn weights(&self) -> &[WeightMatrix] {
        &self.weights
    }

    pub fn training_set(&self) -> &[TrainingElement] {
        &self.training_set
    }

    /// Replaces the owned training set.
    ///
    /// Every element must match the input and output dimensions; on error the
    /// previous set is kept.
    pub fn set_training_set(&mut self, training_set: Vec<TrainingElement>) -> Result<()> {
        let expected_input = self.input_dimension();
        let expected_output = self.output_dimension();
        let bad = training_set.iter().enumerate().find(|(_, te)| {
            te.input.len() != expected_input || te.output.len() != expected_output
        });
        if let Some((index, te)) = bad {
            return Err(NetworkError::ElementDimension {
                index,
                input: te.input.len(),
                output: te.output.len(),
                expected_input,
                expected_output,
            });
        }

        self.training_set = training_set;
        Ok(())
    }

    /// Forward pass.
    ///
    /// Returns the output layer's activations. When `x` does not have exactly
    /// `input_dimension()` elements nothing is computed and `x` is handed back
    /// unchanged, so the result may have the wrong length.
    pub fn classify(&mut self, x: &[f64]) -> Vec<f64> {
        if x.len() != self.input_dimension() {
            warn!(
                got = x.len(),
                expected = self.input_dimension(),
                "classify input has wrong dimension, returning it unchanged"
            );
            return x.to_vec();
        }

        self.layers[0].output.copy_from_slice(x);
        for h in 1..self.layers.len() {
            let (before, after) = self.layers.split_at_mut(h);
            after[0].feed_from(&before[h - 1].output, &self.weights[h - 1]);
        }

        self.layers[self.layers.len() - 1].output.clone()
    }

    /// One online pass over the training set with learning rate `eta`.
    ///
    /// For each example in order: forward pass, output residual, backprop down
    /// to layer 0, then weight updates from the first matrix to the last.
    /// Returns `sqrt(Σ_examples (Σ_i (desired_i - actual_i)^2)^2)`; an empty
    /// set returns 0 and touches nothing. `eta` is not range-checked.
    pub fn train(&mut self, eta: f64) -> f64 {
        let training_set = std::mem::take(&mut self.training_set);
        let optimizer = Sgd::new(eta);
        let mut total = StackedSquaredError::new();

        for te in &training_set {
            let y_actual = self.classify(&te.input);
            total.add(&te.output, &y_actual);

            if let Some(output_layer) = self.layers.last_mut() {
                output_layer.set_residual(&te.output);
            }
            self.backpropagate();
            self.update_weights(&optimizer);
        }

        self.training_set = training_set;
        let error = total.value();
        debug!(examples = self.training_set.len(), eta, error, "training pass complete");
        error
    }

    /// Fills `error` on every layer below the output, last to first.
    fn backpropagate(&mut self) {
        for h in (0..self.layers.len() - 1).rev() {
            let (before, after) = self.layers.split_at_mut(h + 1);
            before[h].backpropagate_from(&after[0].error, &self.weights[h]);
        }
    }

    fn update_weights(&mut self, optimizer: &Sgd) {
        for index in 1..self.layers.len() {
            let (before, after) = self.layers.split_at(index);
            optimizer.step(
                &mut self.weights[index - 1],
                &after[0].error,
                &before[index - 1].output,
            );
        }
    }
}
