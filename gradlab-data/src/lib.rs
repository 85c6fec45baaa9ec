//! Data side of gradlab: datasets, samplers and a restartable mini-batch loader.
//!
//! A [`DataLoader`] implements [`gradlab_core::training::DataSource`], so it can be
//! handed straight to a [`Trainer`](gradlab_core::training::Trainer).

pub mod dataloader;
pub mod datasets;
pub mod samplers;
pub mod synthetic;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, TensorDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
