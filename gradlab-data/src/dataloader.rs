//! # DataLoader
//!
//! Groups dataset samples into mini-batches in the order chosen by a [`Sampler`].
//! Each sample's features and labels are stacked along a new leading axis, so a
//! [`TensorDataset`](crate::datasets::TensorDataset) with `[N, d]` features and `[N]`
//! labels yields `([B, d], [B])` batches.
//!
//! ```rust
//! use gradlab_core::Tensor;
//! use gradlab_data::{DataLoader, SequentialSampler, TensorDataset};
//!
//! let features = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![3, 2]).unwrap();
//! let labels = Tensor::new(vec![0.0, 1.0, 0.0], vec![3]).unwrap();
//! let dataset = TensorDataset::new(features, labels).unwrap();
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! assert_eq!(loader.len(), 2);
//! for batch in loader.iter() {
//!     let (x, y) = batch.unwrap();
//!     assert_eq!(x.shape()[0], y.shape()[0]);
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use gradlab_core::training::{Batch, DataSource};
use gradlab_core::{GradLabError, Tensor};

/// Restartable mini-batch loader over a dataset of `(features, label)` samples.
#[derive(Debug)]
pub struct DataLoader<D, S> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D, S> DataLoader<D, S>
where
    D: Dataset<Item = (Tensor, Tensor)>,
    S: Sampler,
{
    /// # Errors
    /// `InvalidArgument` if `batch_size` is zero.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, GradLabError> {
        if batch_size == 0 {
            return Err(GradLabError::InvalidArgument(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one pass yields.
    pub fn len(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a new pass. The sampler is consulted again, so a random sampler produces a
    /// new order each time.
    pub fn iter(&self) -> BatchIter<'_, D> {
        BatchIter {
            dataset: &self.dataset,
            indices: self.sampler.iter(self.dataset.len()),
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

/// One pass over a [`DataLoader`].
pub struct BatchIter<'a, D> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
    batch_size: usize,
    drop_last: bool,
}

impl<D> Iterator for BatchIter<'_, D>
where
    D: Dataset<Item = (Tensor, Tensor)>,
{
    type Item = Result<Batch, GradLabError>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices: Vec<usize> = self.indices.by_ref().take(self.batch_size).collect();
        if indices.is_empty() || (self.drop_last && indices.len() < self.batch_size) {
            return None;
        }
        Some(collate(self.dataset, &indices))
    }
}

fn collate<D>(dataset: &D, indices: &[usize]) -> Result<Batch, GradLabError>
where
    D: Dataset<Item = (Tensor, Tensor)>,
{
    let mut features = Vec::with_capacity(indices.len());
    let mut labels = Vec::with_capacity(indices.len());
    for &idx in indices {
        let (x, y) = dataset.get(idx)?;
        features.push(x);
        labels.push(y);
    }
    log::trace!("collated batch of {} samples", indices.len());
    Ok((Tensor::stack(&features)?, Tensor::stack(&labels)?))
}

impl<D, S> DataSource for DataLoader<D, S>
where
    D: Dataset<Item = (Tensor, Tensor)>,
    S: Sampler,
{
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Batch, GradLabError>> + '_> {
        Box::new(self.iter())
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
