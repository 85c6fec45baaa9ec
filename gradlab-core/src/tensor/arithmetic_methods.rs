use crate::error::GradLabError;
use crate::ops::arithmetic;
use crate::ops::linalg;
use crate::tensor::Tensor;

impl Tensor {
    /// Element-wise addition with broadcasting. See [`arithmetic::add_op`].
    pub fn add(&self, other: &Tensor) -> Result<Tensor, GradLabError> {
        arithmetic::add_op(self, other)
    }

    pub fn sub(&self, other: &Tensor) -> Result<Tensor, GradLabError> {
        arithmetic::sub_op(self, other)
    }

    pub fn mul(&self, other: &Tensor) -> Result<Tensor, GradLabError> {
        arithmetic::mul_op(self, other)
    }

    pub fn neg(&self) -> Result<Tensor, GradLabError> {
        arithmetic::neg_op(self)
    }

    pub fn add_scalar(&self, scalar: f32) -> Result<Tensor, GradLabError> {
        arithmetic::add_scalar_op(self, scalar)
    }

    pub fn mul_scalar(&self, scalar: f32) -> Result<Tensor, GradLabError> {
        arithmetic::mul_scalar_op(self, scalar)
    }

    pub fn div_scalar(&self, scalar: f32) -> Result<Tensor, GradLabError> {
        arithmetic::div_scalar_op(self, scalar)
    }

    pub fn pow_scalar(&self, exponent: f32) -> Result<Tensor, GradLabError> {
        arithmetic::pow_scalar_op(self, exponent)
    }

    /// 2-D matrix product. See [`linalg::matmul_op`].
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, GradLabError> {
        linalg::matmul_op(self, other)
    }

    /// Transpose of a 2-D tensor.
    pub fn transpose(&self) -> Result<Tensor, GradLabError> {
        linalg::transpose_op(self)
    }
}
