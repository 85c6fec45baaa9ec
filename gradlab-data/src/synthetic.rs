//! Synthetic datasets for smoke tests and examples.

use crate::datasets::TensorDataset;
use gradlab_core::{GradLabError, Tensor};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Draws `samples_per_class` points around each center from an isotropic Gaussian.
///
/// Class `k` is labelled `k` and samples are laid out class by class. With centers far
/// apart relative to `std_dev` the classes are linearly separable.
///
/// # Errors
/// `InvalidArgument` if `centers` is empty, the centers differ in dimension, or
/// `std_dev` is negative or not finite.
pub fn make_blobs(
    centers: &[Vec<f32>],
    samples_per_class: usize,
    std_dev: f32,
    seed: u64,
) -> Result<TensorDataset, GradLabError> {
    let dim = centers
        .first()
        .map(Vec::len)
        .ok_or_else(|| GradLabError::InvalidArgument("make_blobs needs at least one center".to_string()))?;
    if centers.iter().any(|c| c.len() != dim) {
        return Err(GradLabError::InvalidArgument(
            "make_blobs centers must share one dimension".to_string(),
        ));
    }
    if !std_dev.is_finite() {
        return Err(GradLabError::InvalidArgument(format!(
            "make_blobs std_dev must be finite, got {}",
            std_dev
        )));
    }
    let noise = Normal::new(0.0f32, std_dev)
        .map_err(|e| GradLabError::InvalidArgument(format!("make_blobs std_dev {}: {}", std_dev, e)))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let total = centers.len() * samples_per_class;
    let mut features = Vec::with_capacity(total * dim);
    let mut labels = Vec::with_capacity(total);
    for (class, center) in centers.iter().enumerate() {
        for _ in 0..samples_per_class {
            features.extend(center.iter().map(|&c| c + noise.sample(&mut rng)));
            labels.push(class as f32);
        }
    }
    log::debug!(
        "make_blobs: {} classes x {} samples in {} dimensions",
        centers.len(),
        samples_per_class,
        dim
    );
    TensorDataset::new(
        Tensor::new(features, vec![total, dim])?,
        Tensor::new(labels, vec![total])?,
    )
}
