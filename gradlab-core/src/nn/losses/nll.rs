use crate::error::GradLabError;
use crate::nn::losses::Loss;
use crate::tensor::Tensor;

/// Negative log-likelihood over log-probabilities (e.g. the output of `LogSoftmax`).
///
/// Selects, per example, the entry at that example's label, negates it and averages
/// over the batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct NllLoss;

impl NllLoss {
    pub fn new() -> Self {
        NllLoss
    }
}

impl Loss for NllLoss {
    fn calculate(&self, output: &Tensor, target: &Tensor) -> Result<Tensor, GradLabError> {
        output.nll_loss(target)
    }

    fn probabilities(&self, output: &Tensor) -> Result<Tensor, GradLabError> {
        output.exp()
    }

    fn name(&self) -> &'static str {
        "NllLoss"
    }
}
