use crate::error::GradLabError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::{validate_learning_rate, Optimizer};

/// Plain stochastic gradient descent with a constant learning rate.
///
/// `step` applies `p -= lr * p.grad` to each parameter in place. Parameters whose
/// gradient accumulator is empty (not reached by the last backward pass) are left
/// untouched.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f32,
}

impl SgdOptimizer {
    /// Creates an optimizer over shared handles to `params`.
    ///
    /// Pass `model.parameters().into_iter().cloned()`: the handles share storage with
    /// the model, so updates are visible to it.
    ///
    /// # Errors
    /// `InvalidArgument` for a negative or non-finite `lr`.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f32) -> Result<Self, GradLabError> {
        validate_learning_rate(lr)?;
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        })
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), GradLabError> {
        for (index, param) in self.params.iter().enumerate() {
            match param.grad() {
                Ok(grad) => param.sub_scaled_(&grad, self.lr)?,
                Err(GradLabError::UninitializedGradient { .. }) => {
                    log::debug!(
                        "SGD step: skipping parameter {} ({}) with no gradient",
                        index,
                        param.name().unwrap_or("<unnamed>")
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f32 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f32) -> Result<(), GradLabError> {
        validate_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }

    fn parameters(&self) -> &[Parameter] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
