use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;

/// Element-wise `a - b` with broadcasting.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, GradLabError> {
    apply_binary_op(a, b, |x, y| x - y, |_, _| BackwardOp::Sub, "sub")
}
