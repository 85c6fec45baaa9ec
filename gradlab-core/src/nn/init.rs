//! Weight initialisation schemes.

use crate::error::GradLabError;
use crate::tensor::Tensor;
use rand::Rng;

/// Kaiming (He) uniform initialisation for layers followed by ReLU.
///
/// Samples from `U(-b, b)` with `b = sqrt(6 / fan_in)`.
pub fn kaiming_uniform<R: Rng>(
    rng: &mut R,
    shape: &[usize],
    fan_in: usize,
) -> Result<Tensor, GradLabError> {
    if fan_in == 0 {
        return Err(GradLabError::InvalidArgument(
            "kaiming_uniform requires fan_in > 0".to_string(),
        ));
    }
    let bound = (6.0 / fan_in as f32).sqrt();
    Tensor::rand_uniform_with(rng, shape, -bound, bound)
}

/// Bias initialisation matching a linear layer: `U(-1/sqrt(fan_in), 1/sqrt(fan_in))`.
pub fn bias_uniform<R: Rng>(
    rng: &mut R,
    shape: &[usize],
    fan_in: usize,
) -> Result<Tensor, GradLabError> {
    if fan_in == 0 {
        return Err(GradLabError::InvalidArgument(
            "bias_uniform requires fan_in > 0".to_string(),
        ));
    }
    let bound = 1.0 / (fan_in as f32).sqrt();
    Tensor::rand_uniform_with(rng, shape, -bound, bound)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
