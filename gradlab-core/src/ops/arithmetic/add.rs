use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;

/// Element-wise `a + b` with broadcasting.
///
/// The gradient flowing to each input is summed over the axes it was broadcast along.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, GradLabError> {
    apply_binary_op(a, b, |x, y| x + y, |_, _| BackwardOp::Add, "add")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
