//! A three-layer sigmoid perceptron trained by online backpropagation.
//!
//! Build a [`Network`], hand it a training set, then call
//! [`Network::train`] repeatedly and watch the returned error.
//!
//! ```
//! use sigmoid_mlp::{Network, TrainingSet};
//!
//! let mut network = Network::seeded(1, 1, 8, 7);
//! network
//!     .set_training_set(TrainingSet::quadratic(21).into_elements())
//!     .unwrap();
//! let first = network.train(0.2);
//! assert!(first.is_finite());
//! ```

pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;

// Convenience re-exports
pub use math::weight_matrix::WeightMatrix;
pub use activation::sigmoid::{dpsidx, psi};
pub use layers::layer::Layer;
pub use network::network::Network;
pub use network::error::NetworkError;
pub use loss::stacked_squared::StackedSquaredError;
pub use optim::sgd::Sgd;
pub use data::training_set::{TrainingElement, TrainingSet};
pub use train::{train_loop, EpochStats, TrainConfig};
