use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Adds `scalar` to every element.
pub fn add_scalar_op(a: &Tensor, scalar: f32) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, |x| x + scalar, |_, _| BackwardOp::AddScalar)
}

/// Multiplies every element by `scalar`.
pub fn mul_scalar_op(a: &Tensor, scalar: f32) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, |x| x * scalar, |_, _| BackwardOp::MulScalar(scalar))
}

/// Divides every element by `scalar`. Recorded as a multiplication by `1 / scalar`.
pub fn div_scalar_op(a: &Tensor, scalar: f32) -> Result<Tensor, GradLabError> {
    if scalar == 0.0 {
        return Err(GradLabError::InvalidArgument(
            "division of a tensor by zero".to_string(),
        ));
    }
    mul_scalar_op(a, 1.0 / scalar)
}
