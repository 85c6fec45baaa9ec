use crate::error::GradLabError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// Flattens every axis after the batch axis: `[batch, ...] -> [batch, features]`.
///
/// Used in front of `Linear` for image-shaped inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flatten;

impl Flatten {
    pub fn new() -> Self {
        Flatten
    }
}

impl Module for Flatten {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradLabError> {
        input.flatten_from(1)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "Flatten"
    }
}
