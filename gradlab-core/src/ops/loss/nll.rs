use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Converts a tensor of integral class labels into indices, checking them against
/// `batch` and `classes`.
///
/// Labels are stored as `f32`; anything that is not a non-negative whole number
/// below `classes` is rejected, as is a label count different from `batch`.
pub fn targets_to_indices(
    targets: &Tensor,
    batch: usize,
    classes: usize,
    operation: &str,
) -> Result<Vec<usize>, GradLabError> {
    let shape = targets.shape();
    let labels = targets.to_vec();
    if shape.len() > 1 || labels.len() != batch {
        return Err(GradLabError::InvalidShape {
            expected: format!("{} class labels", batch),
            actual: format!("labels of shape {:?}", shape),
            operation: operation.to_string(),
        });
    }
    labels
        .iter()
        .map(|&label| {
            if label.fract() != 0.0 || label < 0.0 || label >= classes as f32 {
                Err(GradLabError::InvalidShape {
                    expected: format!("a class index in [0, {})", classes),
                    actual: format!("{}", label),
                    operation: operation.to_string(),
                })
            } else {
                Ok(label as usize)
            }
        })
        .collect()
}

/// Mean negative log-likelihood: `-(1/N) * sum_i log_probs[i, targets[i]]`.
///
/// `log_probs` must be `[N, C]` log-probabilities and `targets` hold `N` integral
/// labels. The result is a 0-dimensional tensor.
///
/// # Errors
/// `InvalidShape` for a non-2-D input, an empty batch, a label count other than `N`,
/// or a label outside `[0, C)`.
pub fn nll_loss_op(log_probs: &Tensor, targets: &Tensor) -> Result<Tensor, GradLabError> {
    let shape = log_probs.shape();
    if shape.len() != 2 || shape[0] == 0 {
        return Err(GradLabError::shape(
            "a non-empty [batch, classes] tensor",
            &shape,
            "nll_loss",
        ));
    }
    let (batch, classes) = (shape[0], shape[1]);
    let indices = targets_to_indices(targets, batch, classes, "nll_loss")?;

    let data = log_probs.to_vec();
    let total: f32 = indices
        .iter()
        .enumerate()
        .map(|(row, &target)| data[row * classes + target])
        .sum();
    let loss = Tensor::scalar(-total / batch as f32);
    Ok(record(&[log_probs], loss, || BackwardOp::NllLoss {
        targets: indices,
    }))
}

#[cfg(test)]
#[path = "nll_test.rs"]
mod tests;
