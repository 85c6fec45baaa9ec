// src/tensor/create.rs

use crate::error::GradLabError;
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal, Uniform};

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor, GradLabError> {
    full(shape, 0.0)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor, GradLabError> {
    full(shape, 1.0)
}

/// Creates a new tensor filled with `value`.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor, GradLabError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a zero tensor with the same shape as `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, GradLabError> {
    zeros(&tensor.shape())
}

/// Creates a tensor of ones with the same shape as `tensor`.
pub fn ones_like(tensor: &Tensor) -> Result<Tensor, GradLabError> {
    ones(&tensor.shape())
}

fn sample_with<R: Rng, D: Distribution<f32>>(
    rng: &mut R,
    dist: D,
    shape: &[usize],
) -> Result<Tensor, GradLabError> {
    let numel: usize = shape.iter().product();
    let data: Vec<f32> = dist.sample_iter(rng).take(numel).collect();
    Tensor::new(data, shape.to_vec())
}

impl Tensor {
    /// Samples from the standard normal distribution.
    pub fn randn(shape: &[usize]) -> Result<Tensor, GradLabError> {
        sample_with(&mut rand::thread_rng(), StandardNormal, shape)
    }

    /// Samples from the standard normal distribution with a fixed seed.
    pub fn randn_seeded(shape: &[usize], seed: u64) -> Result<Tensor, GradLabError> {
        sample_with(&mut StdRng::seed_from_u64(seed), StandardNormal, shape)
    }

    /// Samples uniformly from `[low, high)`.
    pub fn rand_uniform(shape: &[usize], low: f32, high: f32) -> Result<Tensor, GradLabError> {
        Self::rand_uniform_with(&mut rand::thread_rng(), shape, low, high)
    }

    /// Samples uniformly from `[low, high)` using the provided generator.
    pub fn rand_uniform_with<R: Rng>(
        rng: &mut R,
        shape: &[usize],
        low: f32,
        high: f32,
    ) -> Result<Tensor, GradLabError> {
        if !(low < high) {
            return Err(GradLabError::InvalidArgument(format!(
                "rand_uniform requires low < high, got [{}, {})",
                low, high
            )));
        }
        sample_with(rng, Uniform::new(low, high), shape)
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
