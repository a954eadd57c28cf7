use thiserror::Error;

/// Errors raised by network construction and training-set handling.
///
/// Wrongly-sized `classify` inputs, empty training sets and zero-width layers
/// are not errors; they degrade to no-ops.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A topology needs an input and an output layer at minimum.
    #[error("a network needs at least 2 layers, got {0}")]
    TooFewLayers(usize),

    /// A supplied weight matrix does not connect layer `index` to `index + 1`.
    #[error(
        "weight matrix {index} is {actual_input}x{actual_output}, \
         expected {expected_input}x{expected_output}"
    )]
    WeightShape {
        index: usize,
        expected_input: usize,
        expected_output: usize,
        actual_input: usize,
        actual_output: usize,
    },

    /// The number of supplied weight matrices is not `layers - 1`.
    #[error("expected {expected} weight matrices, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    /// A training element's vectors do not match the network's dimensions.
    #[error(
        "training element {index} has input/output lengths {input}/{output}, \
         network expects {expected_input}/{expected_output}"
    )]
    ElementDimension {
        index: usize,
        input: usize,
        output: usize,
        expected_input: usize,
        expected_output: usize,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
