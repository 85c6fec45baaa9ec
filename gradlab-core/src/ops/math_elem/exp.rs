use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Element-wise `e^x`. The output is cached since it is also the derivative.
pub fn exp_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, f32::exp, |_, output| BackwardOp::Exp {
        output: output.to_vec(),
    })
}
