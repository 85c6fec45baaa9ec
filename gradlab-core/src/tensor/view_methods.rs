use crate::error::GradLabError;
use crate::ops::{stack, view};
use crate::tensor::Tensor;

impl Tensor {
    pub fn reshape(&self, new_shape: Vec<usize>) -> Result<Tensor, GradLabError> {
        view::reshape_op(self, new_shape)
    }

    /// Merges every axis from `start_dim` onwards.
    pub fn flatten_from(&self, start_dim: usize) -> Result<Tensor, GradLabError> {
        view::flatten_from_op(self, start_dim)
    }

    /// Stacks equally-shaped tensors along a new leading axis.
    pub fn stack(tensors: &[Tensor]) -> Result<Tensor, GradLabError> {
        stack::stack_op(tensors)
    }

    /// Copies out entry `index` along the leading axis.
    pub fn select(&self, index: usize) -> Result<Tensor, GradLabError> {
        stack::select_op(self, index)
    }
}
