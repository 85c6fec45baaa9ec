use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Stacks equally-shaped tensors along a new leading axis.
///
/// Used to assemble mini-batches from dataset samples, so the result is a fresh
/// untracked leaf.
///
/// # Errors
/// * `EmptyTensorList` if `tensors` is empty.
/// * `InvalidShape` if the shapes differ.
pub fn stack_op(tensors: &[Tensor]) -> Result<Tensor, GradLabError> {
    let first = tensors.first().ok_or(GradLabError::EmptyTensorList)?;
    let item_shape = first.shape();
    let mut data = Vec::with_capacity(first.numel() * tensors.len());
    for t in tensors {
        let guard = t.read_data();
        if guard.shape != item_shape {
            return Err(GradLabError::shape(&item_shape, &guard.shape, "stack"));
        }
        data.extend_from_slice(&guard.data);
    }
    let mut shape = Vec::with_capacity(item_shape.len() + 1);
    shape.push(tensors.len());
    shape.extend_from_slice(&item_shape);
    Tensor::new(data, shape)
}

/// Copies out entry `index` along the leading axis, dropping that axis.
///
/// The inverse of [`stack_op`] for a single item; the result is an untracked leaf.
///
/// # Errors
/// * `InvalidShape` for a 0-d tensor.
/// * `IndexOutOfBounds` if `index` is past the leading dimension.
pub fn select_op(tensor: &Tensor, index: usize) -> Result<Tensor, GradLabError> {
    let guard = tensor.read_data();
    let (&len, item_shape) = guard
        .shape
        .split_first()
        .ok_or_else(|| GradLabError::shape("at least one axis", &guard.shape, "select"))?;
    if index >= len {
        return Err(GradLabError::IndexOutOfBounds { index, len });
    }
    let item_len: usize = item_shape.iter().product();
    let start = index * item_len;
    let data = guard.data[start..start + item_len].to_vec();
    Tensor::new(data, item_shape.to_vec())
}
