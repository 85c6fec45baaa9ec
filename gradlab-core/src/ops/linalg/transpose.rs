use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::ops::linalg::transpose_kernel;
use crate::tensor::Tensor;

/// Swaps the two axes of a 2-D tensor, materializing a new contiguous buffer.
pub fn transpose_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    let shape = a.shape();
    if shape.len() != 2 {
        return Err(GradLabError::shape("a 2-D tensor", &shape, "transpose"));
    }
    let (rows, cols) = (shape[0], shape[1]);
    let data = transpose_kernel(&a.to_vec(), rows, cols);
    let output = Tensor::new(data, vec![cols, rows])?;
    Ok(record(&[a], output, || BackwardOp::Transpose))
}
