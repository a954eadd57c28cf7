pub mod stacked_squared;

pub use stacked_squared::{squared_error, StackedSquaredError};
