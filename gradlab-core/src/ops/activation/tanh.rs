use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Hyperbolic tangent, element-wise.
pub fn tanh_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, f32::tanh, |_, output| BackwardOp::Tanh {
        output: output.to_vec(),
    })
}
