pub mod training_set;

pub use training_set::{TrainingElement, TrainingSet};
