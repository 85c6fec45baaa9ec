use crate::error::GradLabError;
use crate::nn::losses::Loss;
use crate::tensor::Tensor;

/// Cross-entropy over raw class scores.
///
/// Equivalent to `LogSoftmax` followed by [`NllLoss`](crate::nn::NllLoss): the scores
/// are normalized with a max-shifted log-sum-exp, so large logits never overflow.
/// Expects `[batch, classes]` scores and `batch` integral labels; returns the mean
/// over the batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    pub fn new() -> Self {
        CrossEntropyLoss
    }
}

impl Loss for CrossEntropyLoss {
    fn calculate(&self, output: &Tensor, target: &Tensor) -> Result<Tensor, GradLabError> {
        if output.rank() != 2 {
            return Err(GradLabError::shape(
                "[batch, classes] scores",
                output.shape(),
                "cross_entropy",
            ));
        }
        output.log_softmax()?.nll_loss(target)
    }

    fn name(&self) -> &'static str {
        "CrossEntropyLoss"
    }
}
