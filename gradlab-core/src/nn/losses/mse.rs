use crate::error::GradLabError;
use crate::nn::losses::Loss;
use crate::tensor::Tensor;

/// How element-wise losses are combined into the final scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

/// Mean squared error between output and a target of the same shape.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }
}

impl Loss for MseLoss {
    fn calculate(&self, output: &Tensor, target: &Tensor) -> Result<Tensor, GradLabError> {
        if output.shape() != target.shape() {
            return Err(GradLabError::shape(
                target.shape(),
                output.shape(),
                "mse_loss",
            ));
        }
        let squared = output.sub(target)?.pow_scalar(2.0)?;
        match self.reduction {
            Reduction::Mean => squared.mean(),
            Reduction::Sum => squared.sum(),
        }
    }

    fn probabilities(&self, output: &Tensor) -> Result<Tensor, GradLabError> {
        Ok(output.clone())
    }

    fn name(&self) -> &'static str {
        "MseLoss"
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
