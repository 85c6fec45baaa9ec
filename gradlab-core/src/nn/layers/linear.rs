use crate::error::GradLabError;
use crate::nn::init::{bias_uniform, kaiming_uniform};
use crate::nn::module::{check_input_width, Module};
use crate::nn::parameter::Parameter;
use crate::tensor::{zeros, Tensor};
use rand::Rng;

/// Applies a linear transformation to the incoming data: `y = x W^T + b`.
///
/// `weight` has shape `[out_features, in_features]` and `bias` shape `[out_features]`.
/// Inputs are `[batch, in_features]`; a single `[in_features]` sample is accepted too
/// and yields `[out_features]`.
#[derive(Debug)]
pub struct Linear {
    pub(crate) weight: Parameter,
    pub(crate) bias: Option<Parameter>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a layer with Kaiming-uniform weights drawn from the thread-local RNG.
    pub fn new(in_features: usize, out_features: usize, has_bias: bool) -> Result<Self, GradLabError> {
        Self::with_rng(&mut rand::thread_rng(), in_features, out_features, has_bias)
    }

    /// Creates a layer with Kaiming-uniform weights drawn from `rng`.
    pub fn with_rng<R: Rng>(
        rng: &mut R,
        in_features: usize,
        out_features: usize,
        has_bias: bool,
    ) -> Result<Self, GradLabError> {
        let weight = kaiming_uniform(rng, &[out_features, in_features], in_features)?;
        let bias = if has_bias {
            Some(bias_uniform(rng, &[out_features], in_features)?)
        } else {
            None
        };
        Self::from_tensors(weight, bias)
    }

    /// Creates a layer whose weights and bias are all zero.
    pub fn zeros(in_features: usize, out_features: usize, has_bias: bool) -> Result<Self, GradLabError> {
        let weight = zeros(&[out_features, in_features])?;
        let bias = if has_bias {
            Some(zeros(&[out_features])?)
        } else {
            None
        };
        Self::from_tensors(weight, bias)
    }

    /// Creates a layer from explicit values.
    ///
    /// # Errors
    /// `InvalidShape` if `weight` is not 2-D or `bias` is not `[out_features]`.
    pub fn from_tensors(weight: Tensor, bias: Option<Tensor>) -> Result<Self, GradLabError> {
        let w_shape = weight.shape();
        if w_shape.len() != 2 {
            return Err(GradLabError::shape("[out_features, in_features]", &w_shape, "Linear::from_tensors"));
        }
        let (out_features, in_features) = (w_shape[0], w_shape[1]);
        if let Some(b) = &bias {
            if b.shape() != [out_features] {
                return Err(GradLabError::shape([out_features], b.shape(), "Linear::from_tensors"));
            }
        }
        Ok(Linear {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias: bias.map(|b| Parameter::new(b, Some("bias".to_string()))),
            in_features,
            out_features,
        })
    }

    pub fn weight(&self) -> &Parameter {
        &self.weight
    }

    pub fn bias(&self) -> Option<&Parameter> {
        self.bias.as_ref()
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradLabError> {
        check_input_width(input, self.in_features, "Linear::forward")?;
        let single = input.rank() == 1;
        let batched = if single {
            input.reshape(vec![1, self.in_features])?
        } else {
            input.clone()
        };

        let mut output = batched.matmul(&self.weight.transpose()?)?;
        if let Some(bias) = &self.bias {
            output = output.add(bias)?;
        }
        if single {
            output = output.reshape(vec![self.out_features])?;
        }
        Ok(output)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        let mut params = vec![&self.weight];
        if let Some(b) = &self.bias {
            params.push(b);
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = vec![("weight".to_string(), &self.weight)];
        if let Some(b) = &self.bias {
            params.push(("bias".to_string(), b));
        }
        params
    }

    fn input_width(&self) -> Option<usize> {
        Some(self.in_features)
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
