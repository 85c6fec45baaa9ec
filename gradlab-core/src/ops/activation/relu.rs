use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Rectified Linear Unit, `max(0, x)` element-wise.
///
/// The gradient at exactly zero is taken to be 0.
pub fn relu_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, |x| x.max(0.0), |input, _| BackwardOp::Relu {
        input: input.to_vec(),
    })
}
