pub mod weight_matrix;

pub use weight_matrix::{WeightMatrix, INITIAL_WEIGHT_SCALE};
