use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Raises every element to the scalar power `exponent`.
pub fn pow_scalar_op(a: &Tensor, exponent: f32) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, |x| x.powf(exponent), |input, _| BackwardOp::PowScalar {
        exponent,
        input: input.to_vec(),
    })
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
