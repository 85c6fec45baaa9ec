use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Element-wise natural logarithm.
///
/// Non-positive inputs follow IEEE semantics (`-inf` at zero, `NaN` below).
pub fn ln_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, f32::ln, |input, _| BackwardOp::Ln {
        input: input.to_vec(),
    })
}
