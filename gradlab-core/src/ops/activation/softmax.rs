//! Softmax and log-softmax over the last axis.
//!
//! Both are computed from max-shifted logits, so very large or very negative inputs
//! never overflow `exp`.

use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Per-row `(log_softmax, softmax)` of a row-major buffer with `classes` columns.
fn row_log_softmax(data: &[f32], classes: usize) -> (Vec<f32>, Vec<f32>) {
    let mut log_probs = Vec::with_capacity(data.len());
    let mut probs = Vec::with_capacity(data.len());
    for row in data.chunks(classes) {
        let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let sum_exp: f32 = row.iter().map(|&x| (x - max).exp()).sum();
        let log_sum_exp = max + sum_exp.ln();
        for &x in row {
            let lp = x - log_sum_exp;
            log_probs.push(lp);
            probs.push(lp.exp());
        }
    }
    (log_probs, probs)
}

fn classes_of(a: &Tensor, operation: &str) -> Result<(Vec<usize>, usize), GradLabError> {
    let shape = a.shape();
    match shape.last() {
        Some(&classes) if classes > 0 => Ok((shape.clone(), classes)),
        _ => Err(GradLabError::shape(
            "a tensor with a non-empty last axis",
            &shape,
            operation,
        )),
    }
}

/// `x - logsumexp(x)` along the last axis.
pub fn log_softmax_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    let (shape, classes) = classes_of(a, "log_softmax")?;
    let (log_probs, probs) = row_log_softmax(&a.to_vec(), classes);
    let output = Tensor::new(log_probs, shape)?;
    Ok(record(&[a], output, || BackwardOp::LogSoftmax { softmax: probs }))
}

/// Normalized exponentials along the last axis; every row sums to 1.
pub fn softmax_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    let (shape, classes) = classes_of(a, "softmax")?;
    let (_, probs) = row_log_softmax(&a.to_vec(), classes);
    let output = Tensor::new(probs.clone(), shape)?;
    Ok(record(&[a], output, || BackwardOp::Softmax { output: probs }))
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
