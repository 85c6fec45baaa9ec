use super::utils::{axis_layout, sum_along};
use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Arithmetic mean of every element, as a 0-dimensional tensor.
///
/// # Errors
/// `InvalidArgument` for an empty tensor.
pub fn mean_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    let mean = {
        let guard = a.read_data();
        if guard.numel() == 0 {
            return Err(GradLabError::InvalidArgument(
                "mean of an empty tensor".to_string(),
            ));
        }
        guard.data.iter().sum::<f32>() / guard.numel() as f32
    };
    Ok(record(&[a], Tensor::scalar(mean), || BackwardOp::Mean))
}

/// Mean along `axis`, dropping it unless `keep_dim` is set.
pub fn mean_axis_op(a: &Tensor, axis: usize, keep_dim: bool) -> Result<Tensor, GradLabError> {
    let (outer, len, inner, output_shape) = axis_layout(&a.shape(), axis, keep_dim)?;
    if len == 0 {
        return Err(GradLabError::InvalidArgument(format!(
            "mean over empty axis {}",
            axis
        )));
    }
    let data: Vec<f32> = sum_along(&a.to_vec(), outer, len, inner)
        .into_iter()
        .map(|s| s / len as f32)
        .collect();
    let output = Tensor::new(data, output_shape)?;
    Ok(record(&[a], output, || BackwardOp::MeanAxis { axis }))
}
