//! Loss policies.
//!
//! Every policy turns a model output and a target into a 0-dimensional loss tensor
//! that [`Tensor::backward`](crate::Tensor::backward) can start from.

pub mod cross_entropy;
pub mod mse;
pub mod nll;

pub use cross_entropy::CrossEntropyLoss;
pub use mse::{MseLoss, Reduction};
pub use nll::NllLoss;

use crate::error::GradLabError;
use crate::tensor::Tensor;

/// A criterion comparing model output with targets.
pub trait Loss: std::fmt::Debug {
    /// Computes the loss as a 0-dimensional tensor.
    ///
    /// # Errors
    /// `InvalidShape` when `output` and `target` are structurally incompatible.
    fn calculate(&self, output: &Tensor, target: &Tensor) -> Result<Tensor, GradLabError>;

    /// Maps raw model output to class probabilities for prediction.
    ///
    /// The default treats the output as unnormalized scores.
    fn probabilities(&self, output: &Tensor) -> Result<Tensor, GradLabError> {
        output.softmax()
    }

    fn name(&self) -> &'static str;
}
