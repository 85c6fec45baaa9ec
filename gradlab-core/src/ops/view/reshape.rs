use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Reinterprets the row-major data under `new_shape`.
///
/// # Errors
/// `InvalidShape` if the element counts differ.
pub fn reshape_op(tensor: &Tensor, new_shape: Vec<usize>) -> Result<Tensor, GradLabError> {
    let shape = tensor.shape();
    let original_numel: usize = shape.iter().product();
    let new_numel: usize = new_shape.iter().product();
    if original_numel != new_numel {
        return Err(GradLabError::InvalidShape {
            expected: format!("a shape with {} elements", original_numel),
            actual: format!("{:?}", new_shape),
            operation: "reshape".to_string(),
        });
    }
    let output = Tensor::new(tensor.to_vec(), new_shape)?;
    Ok(record(&[tensor], output, || BackwardOp::Reshape))
}

/// Collapses every axis from `start_dim` onwards into one.
///
/// `flatten_from_op(t, 1)` turns `[batch, c, h, w]` into `[batch, c*h*w]`.
pub fn flatten_from_op(tensor: &Tensor, start_dim: usize) -> Result<Tensor, GradLabError> {
    let shape = tensor.shape();
    if start_dim >= shape.len() {
        return Err(GradLabError::IndexOutOfBounds {
            index: start_dim,
            len: shape.len(),
        });
    }
    let mut new_shape = shape[..start_dim].to_vec();
    new_shape.push(shape[start_dim..].iter().product());
    reshape_op(tensor, new_shape)
}
