use thiserror::Error;

/// Custom error type for the gradlab framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradLabError {
    /// Tensor dimensions are structurally incompatible for an operation.
    ///
    /// Covers batch-size mismatches, non-scalar `backward` targets, out-of-range labels
    /// and inputs whose trailing dimension does not match a model's input width.
    #[error("Invalid shape during {operation}: expected {expected}, got {actual}")]
    InvalidShape {
        expected: String,
        actual: String,
        operation: String,
    },

    #[error("Gradient read before any backward pass populated it (during {operation})")]
    UninitializedGradient { operation: String },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot stack an empty list of tensors")]
    EmptyTensorList,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GradLabError {
    /// Shorthand for building an `InvalidShape` error from anything printable.
    pub(crate) fn shape(
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
        operation: &str,
    ) -> Self {
        GradLabError::InvalidShape {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
            operation: operation.to_string(),
        }
    }
}
