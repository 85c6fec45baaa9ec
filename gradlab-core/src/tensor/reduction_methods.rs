use crate::error::GradLabError;
use crate::ops::{loss, reduction};
use crate::tensor::Tensor;

impl Tensor {
    /// Sum of all elements as a 0-dimensional tensor.
    pub fn sum(&self) -> Result<Tensor, GradLabError> {
        reduction::sum_op(self)
    }

    pub fn sum_axis(&self, axis: usize, keep_dim: bool) -> Result<Tensor, GradLabError> {
        reduction::sum_axis_op(self, axis, keep_dim)
    }

    /// Mean of all elements as a 0-dimensional tensor.
    pub fn mean(&self) -> Result<Tensor, GradLabError> {
        reduction::mean_op(self)
    }

    pub fn mean_axis(&self, axis: usize, keep_dim: bool) -> Result<Tensor, GradLabError> {
        reduction::mean_axis_op(self, axis, keep_dim)
    }

    /// Indices of the maxima along `axis`. Never tracked.
    pub fn argmax_axis(&self, axis: usize) -> Result<Tensor, GradLabError> {
        reduction::argmax_axis_op(self, axis)
    }

    /// Mean negative log-likelihood of `self` (log-probabilities, `[N, C]`) against
    /// `targets` (`N` integral class labels).
    pub fn nll_loss(&self, targets: &Tensor) -> Result<Tensor, GradLabError> {
        loss::nll_loss_op(self, targets)
    }
}
