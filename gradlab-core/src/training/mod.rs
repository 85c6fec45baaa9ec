//! The training loop driver.
//!
//! Each batch runs `zero_grad -> forward -> compute_loss -> backward -> step`. Errors
//! from any stage abort the run and reach the caller unchanged.

pub mod config;
pub mod data_source;
pub mod trainer;

pub use config::TrainerConfig;
pub use data_source::{Batch, DataSource};
pub use trainer::{EpochStats, EvalStats, Trainer, TrainingHistory};
