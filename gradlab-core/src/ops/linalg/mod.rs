//! Matrix products and transposition for rank-2 tensors.

pub mod matmul;
pub mod transpose;

pub use matmul::matmul_op;
pub use transpose::transpose_op;

/// Row-major `[rows, inner] x [inner, cols]` product.
pub(crate) fn matmul_kernel(a: &[f32], b: &[f32], rows: usize, inner: usize, cols: usize) -> Vec<f32> {
    let mut out = vec![0.0; rows * cols];
    for i in 0..rows {
        let a_row = &a[i * inner..(i + 1) * inner];
        let out_row = &mut out[i * cols..(i + 1) * cols];
        for (k, &a_ik) in a_row.iter().enumerate() {
            let b_row = &b[k * cols..(k + 1) * cols];
            for (o, &b_kj) in out_row.iter_mut().zip(b_row) {
                *o += a_ik * b_kj;
            }
        }
    }
    out
}

/// Transposes a row-major `[rows, cols]` buffer into `[cols, rows]`.
pub(crate) fn transpose_kernel(data: &[f32], rows: usize, cols: usize) -> Vec<f32> {
    let mut out = vec![0.0; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}
