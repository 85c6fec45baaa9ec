use crate::error::GradLabError;
use crate::ops::{activation, math_elem};
use crate::tensor::Tensor;

impl Tensor {
    pub fn relu(&self) -> Result<Tensor, GradLabError> {
        activation::relu_op(self)
    }

    pub fn sigmoid(&self) -> Result<Tensor, GradLabError> {
        activation::sigmoid_op(self)
    }

    pub fn tanh(&self) -> Result<Tensor, GradLabError> {
        activation::tanh_op(self)
    }

    pub fn exp(&self) -> Result<Tensor, GradLabError> {
        math_elem::exp_op(self)
    }

    pub fn ln(&self) -> Result<Tensor, GradLabError> {
        math_elem::ln_op(self)
    }

    /// Log-softmax over the last axis, computed with a max shift.
    pub fn log_softmax(&self) -> Result<Tensor, GradLabError> {
        activation::log_softmax_op(self)
    }

    /// Softmax over the last axis.
    pub fn softmax(&self) -> Result<Tensor, GradLabError> {
        activation::softmax_op(self)
    }
}
