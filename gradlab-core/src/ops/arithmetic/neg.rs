use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Element-wise negation.
pub fn neg_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, |x| -x, |_, _| BackwardOp::Neg)
}
