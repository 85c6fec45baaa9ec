//! Training configuration.

use crate::error::GradLabError;

/// Configuration for [`Trainer`](crate::training::Trainer).
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    /// Number of passes over the data source in `fit`.
    pub epochs: usize,
    /// Constant learning rate handed to the optimizer.
    pub learning_rate: f32,
    /// Log the running batch loss every `log_interval` batches; 0 disables it.
    pub log_interval: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 5,
            learning_rate: 0.01,
            log_interval: 100,
        }
    }
}

impl TrainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Checks that the configuration describes a runnable training job.
    ///
    /// # Errors
    /// `InvalidArgument` for zero epochs or a negative/non-finite learning rate.
    pub fn validate(&self) -> Result<(), GradLabError> {
        if self.epochs == 0 {
            return Err(GradLabError::InvalidArgument(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(GradLabError::InvalidArgument(format!(
                "learning rate must be finite and non-negative, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
