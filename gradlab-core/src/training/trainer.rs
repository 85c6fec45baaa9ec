//! Training loop implementation.

use crate::autograd::no_grad;
use crate::error::GradLabError;
use crate::nn::{Loss, Module};
use crate::optim::{Optimizer, SgdOptimizer};
use crate::tensor::Tensor;
use crate::training::{DataSource, TrainerConfig};

/// Summary of one pass over a data source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochStats {
    /// Arithmetic mean of the per-batch (already batch-averaged) losses.
    pub mean_loss: f32,
    pub batches: usize,
}

/// Mean epoch losses recorded by [`Trainer::fit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    pub epoch_losses: Vec<f32>,
}

impl TrainingHistory {
    pub fn final_loss(&self) -> Option<f32> {
        self.epoch_losses.last().copied()
    }

    /// True when no epoch's loss exceeds the previous one by more than `tolerance`.
    pub fn is_non_increasing(&self, tolerance: f32) -> bool {
        self.epoch_losses.windows(2).all(|w| w[1] <= w[0] + tolerance)
    }
}

/// Result of [`Trainer::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalStats {
    pub mean_loss: f32,
    /// Fraction of examples whose arg-max class equals the label. `None` when the
    /// outputs are not `[batch, classes]` scores with one label per example.
    pub accuracy: Option<f32>,
    pub samples: usize,
}

/// Drives training of a model `M` with loss policy `L` and optimizer `O`.
#[derive(Debug)]
pub struct Trainer<M: Module, L: Loss, O: Optimizer> {
    model: M,
    loss: L,
    optimizer: O,
    config: TrainerConfig,
}

impl<M: Module, L: Loss> Trainer<M, L, SgdOptimizer> {
    /// Builds a trainer with plain SGD over every model parameter.
    pub fn with_sgd(model: M, loss: L, config: TrainerConfig) -> Result<Self, GradLabError> {
        config.validate()?;
        let params: Vec<_> = model.parameters().into_iter().cloned().collect();
        let optimizer = SgdOptimizer::new(params, config.learning_rate)?;
        Self::new(model, loss, optimizer, config)
    }
}

impl<M: Module, L: Loss, O: Optimizer> Trainer<M, L, O> {
    /// Creates a trainer. The optimizer's learning rate is set from `config`.
    ///
    /// # Errors
    /// `InvalidArgument` if `config` does not validate.
    pub fn new(model: M, loss: L, mut optimizer: O, config: TrainerConfig) -> Result<Self, GradLabError> {
        config.validate()?;
        optimizer.set_learning_rate(config.learning_rate)?;
        Ok(Trainer {
            model,
            loss,
            optimizer,
            config,
        })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// Runs one batch through `zero_grad -> forward -> compute_loss -> backward -> step`
    /// and returns the batch loss.
    pub fn train_step(&mut self, input: &Tensor, labels: &Tensor) -> Result<f32, GradLabError> {
        self.optimizer.zero_grad();
        let output = self.model.forward(input)?;
        let loss = self.loss.calculate(&output, labels)?;
        loss.backward()?;
        self.optimizer.step()?;
        loss.item()
    }

    /// One pass over `source`.
    ///
    /// # Errors
    /// `InvalidArgument` if `source` yields no batch; otherwise the first error raised
    /// by the source or by any training stage.
    pub fn train_epoch<S>(&mut self, source: &S) -> Result<EpochStats, GradLabError>
    where
        S: DataSource + ?Sized,
    {
        let mut total = 0.0;
        let mut batches = 0;
        for batch in source.batches() {
            let (input, labels) = batch?;
            let loss = self.train_step(&input, &labels)?;
            total += loss;
            batches += 1;
            if self.config.log_interval > 0 && batches % self.config.log_interval == 0 {
                log::debug!(
                    "batch {}: loss = {:.6}, running mean = {:.6}",
                    batches,
                    loss,
                    total / batches as f32
                );
            }
        }
        if batches == 0 {
            return Err(GradLabError::InvalidArgument(
                "data source yielded no batches".to_string(),
            ));
        }
        Ok(EpochStats {
            mean_loss: total / batches as f32,
            batches,
        })
    }

    /// Trains for `config.epochs` epochs and records each epoch's mean loss.
    pub fn fit<S>(&mut self, source: &S) -> Result<TrainingHistory, GradLabError>
    where
        S: DataSource + ?Sized,
    {
        let mut history = TrainingHistory::default();
        for epoch in 0..self.config.epochs {
            let stats = self.train_epoch(source)?;
            log::info!(
                "Epoch {}/{}: loss = {:.6} over {} batches",
                epoch + 1,
                self.config.epochs,
                stats.mean_loss,
                stats.batches
            );
            history.epoch_losses.push(stats.mean_loss);
        }
        Ok(history)
    }

    /// Mean loss and classification accuracy over `source`, without recording a graph
    /// or touching any parameter.
    pub fn evaluate<S>(&self, source: &S) -> Result<EvalStats, GradLabError>
    where
        S: DataSource + ?Sized,
    {
        no_grad(|| {
            let mut total = 0.0;
            let mut batches = 0;
            let mut samples = 0;
            let mut correct = 0;
            let mut classification = true;
            for batch in source.batches() {
                let (input, labels) = batch?;
                let output = self.model.forward(&input)?;
                total += self.loss.calculate(&output, &labels)?.item()?;
                batches += 1;

                let label_values = labels.to_vec();
                let shape = output.shape();
                if shape.len() == 2 && labels.rank() <= 1 && shape[0] == label_values.len() {
                    let predicted = output.argmax_axis(1)?.to_vec();
                    correct += predicted
                        .iter()
                        .zip(&label_values)
                        .filter(|(p, l)| p == l)
                        .count();
                    samples += label_values.len();
                } else {
                    classification = false;
                    samples += shape.first().copied().unwrap_or(1);
                }
            }
            if batches == 0 {
                return Err(GradLabError::InvalidArgument(
                    "data source yielded no batches".to_string(),
                ));
            }
            let accuracy = (classification && samples > 0).then(|| correct as f32 / samples as f32);
            Ok(EvalStats {
                mean_loss: total / batches as f32,
                accuracy,
                samples,
            })
        })
    }

    /// Class probabilities for `input`, computed under `no_grad`.
    pub fn predict_proba(&self, input: &Tensor) -> Result<Tensor, GradLabError> {
        no_grad(|| self.loss.probabilities(&self.model.forward(input)?))
    }

    /// Arg-max class per example.
    pub fn predict(&self, input: &Tensor) -> Result<Tensor, GradLabError> {
        let probs = self.predict_proba(input)?;
        probs.argmax_axis(probs.rank().saturating_sub(1))
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
