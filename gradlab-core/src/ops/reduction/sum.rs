use super::utils::{axis_layout, sum_along};
use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Sums every element into a 0-dimensional tensor.
pub fn sum_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    let total: f32 = a.read_data().data.iter().sum();
    Ok(record(&[a], Tensor::scalar(total), || BackwardOp::Sum))
}

/// Sums along `axis`, dropping it unless `keep_dim` is set (then it has length 1).
///
/// # Errors
/// `IndexOutOfBounds` if `axis >= rank`.
pub fn sum_axis_op(a: &Tensor, axis: usize, keep_dim: bool) -> Result<Tensor, GradLabError> {
    let (outer, len, inner, output_shape) = axis_layout(&a.shape(), axis, keep_dim)?;
    let data = sum_along(&a.to_vec(), outer, len, inner);
    let output = Tensor::new(data, output_shape)?;
    Ok(record(&[a], output, || BackwardOp::SumAxis { axis }))
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
