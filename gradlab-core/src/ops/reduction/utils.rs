use crate::error::GradLabError;
use crate::tensor::utils::split_at_axis;

/// Validates `axis` against `shape` and returns `(outer, axis_len, inner, output_shape)`.
pub(crate) fn axis_layout(
    shape: &[usize],
    axis: usize,
    keep_dim: bool,
) -> Result<(usize, usize, usize, Vec<usize>), GradLabError> {
    if axis >= shape.len() {
        return Err(GradLabError::IndexOutOfBounds {
            index: axis,
            len: shape.len(),
        });
    }
    let (outer, len, inner) = split_at_axis(shape, axis);
    let mut output_shape = shape.to_vec();
    if keep_dim {
        output_shape[axis] = 1;
    } else {
        output_shape.remove(axis);
    }
    Ok((outer, len, inner, output_shape))
}

/// Sums a row-major buffer along the middle axis of an `[outer, len, inner]` layout.
pub(crate) fn sum_along(data: &[f32], outer: usize, len: usize, inner: usize) -> Vec<f32> {
    let mut out = vec![0.0; outer * inner];
    for o in 0..outer {
        for a in 0..len {
            let base = (o * len + a) * inner;
            for i in 0..inner {
                out[o * inner + i] += data[base + i];
            }
        }
    }
    out
}
