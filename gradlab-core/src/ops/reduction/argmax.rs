use super::utils::axis_layout;
use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Index of the largest value along `axis`, returned as an `f32` tensor of indices.
///
/// The result is never tracked. Ties resolve to the first index.
pub fn argmax_axis_op(a: &Tensor, axis: usize) -> Result<Tensor, GradLabError> {
    let (outer, len, inner, output_shape) = axis_layout(&a.shape(), axis, false)?;
    if len == 0 {
        return Err(GradLabError::InvalidArgument(format!(
            "argmax over empty axis {}",
            axis
        )));
    }
    let data = a.to_vec();
    let mut out = Vec::with_capacity(outer * inner);
    for o in 0..outer {
        for i in 0..inner {
            let mut best = 0;
            let mut best_val = data[o * len * inner + i];
            for k in 1..len {
                let v = data[(o * len + k) * inner + i];
                if v > best_val {
                    best = k;
                    best_val = v;
                }
            }
            out.push(best as f32);
        }
    }
    Tensor::new(out, output_shape)
}
