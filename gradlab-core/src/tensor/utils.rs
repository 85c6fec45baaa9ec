// src/tensor/utils.rs

use crate::error::GradLabError;

/// Calculates contiguous (row-major) strides for a given shape.
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    if shape.is_empty() {
        return strides;
    }
    let mut current_stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = current_stride;
        current_stride *= shape[i].max(1);
    }
    strides
}

/// Computes the broadcast shape of two shapes following NumPy rules.
///
/// Shapes are aligned on their trailing dimensions; two dimensions are compatible
/// when they are equal or one of them is 1.
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, GradLabError> {
    let rank = shape_a.len().max(shape_b.len());
    let mut result = vec![0; rank];
    for i in 0..rank {
        let dim_a = if i < rank - shape_a.len() { 1 } else { shape_a[i - (rank - shape_a.len())] };
        let dim_b = if i < rank - shape_b.len() { 1 } else { shape_b[i - (rank - shape_b.len())] };
        result[i] = if dim_a == dim_b || dim_b == 1 {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else {
            return Err(GradLabError::shape(shape_a, shape_b, "broadcast"));
        };
    }
    Ok(result)
}

/// Maps each flat index of `output_shape` to the flat index of an input of
/// `input_shape` broadcast to it.
pub fn broadcast_index_map(input_shape: &[usize], output_shape: &[usize]) -> Vec<usize> {
    let numel: usize = output_shape.iter().product();
    if input_shape == output_shape {
        return (0..numel).collect();
    }
    let out_strides = calculate_strides(output_shape);
    let in_strides = calculate_strides(input_shape);
    let rank_diff = output_shape.len() - input_shape.len();
    (0..numel)
        .map(|flat| {
            let mut in_index = 0;
            for (dim, &in_dim) in input_shape.iter().enumerate() {
                let out_dim = dim + rank_diff;
                let coord = (flat / out_strides[out_dim]) % output_shape[out_dim];
                if in_dim != 1 {
                    in_index += coord * in_strides[dim];
                }
            }
            in_index
        })
        .collect()
}

/// Sums a gradient computed for `output_shape` back down to `input_shape`,
/// undoing a broadcast.
pub fn reduce_to_shape(grad: &[f32], output_shape: &[usize], input_shape: &[usize]) -> Vec<f32> {
    if input_shape == output_shape {
        return grad.to_vec();
    }
    let in_numel: usize = input_shape.iter().product();
    let mut reduced = vec![0.0; in_numel];
    for (g, idx) in grad.iter().zip(broadcast_index_map(input_shape, output_shape)) {
        reduced[idx] += *g;
    }
    reduced
}

/// Splits a shape around `axis` into (outer, axis length, inner) element counts.
pub(crate) fn split_at_axis(shape: &[usize], axis: usize) -> (usize, usize, usize) {
    let outer = shape[..axis].iter().product();
    let inner = shape[axis + 1..].iter().product();
    (outer, shape[axis], inner)
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
