use crate::error::GradLabError;
use crate::nn::parameter::Parameter;

/// Common interface for optimizers.
///
/// An optimizer holds shared handles to the parameters it updates (never their only
/// owner) and mutates them in place on every [`Optimizer::step`].
pub trait Optimizer {
    /// Applies one update to every managed parameter using its accumulated gradient.
    fn step(&mut self) -> Result<(), GradLabError>;

    /// Clears the gradient accumulator of every managed parameter.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f32;

    /// # Errors
    /// `InvalidArgument` for a negative or non-finite rate.
    fn set_learning_rate(&mut self, lr: f32) -> Result<(), GradLabError>;

    /// The managed parameters, in registration order.
    fn parameters(&self) -> &[Parameter];
}

pub(crate) fn validate_learning_rate(lr: f32) -> Result<(), GradLabError> {
    if !lr.is_finite() || lr < 0.0 {
        return Err(GradLabError::InvalidArgument(format!(
            "learning rate must be finite and non-negative, got {}",
            lr
        )));
    }
    Ok(())
}
