use crate::error::GradLabError;
use crate::tensor::Tensor;
use std::fmt;
use std::ops::Deref;

/// A learnable tensor owned by a [`Module`](crate::nn::Module).
///
/// Parameters are always gradient-tracked leaves. Cloning a parameter shares the
/// underlying tensor, which is how optimizers hold handles to the values they update.
#[derive(Clone)]
pub struct Parameter {
    tensor: Tensor,
    name: Option<String>,
}

impl Parameter {
    /// Wraps `tensor` as a named parameter.
    ///
    /// A tensor produced by a recorded op is detached first, so the parameter is
    /// always a leaf.
    pub fn new(tensor: Tensor, name: Option<String>) -> Self {
        let tensor = if tensor.is_leaf() {
            tensor
        } else {
            log::warn!("Parameter created from a non-leaf tensor; detaching it");
            tensor.detach()
        };
        tensor.write_data().requires_grad = true;
        Parameter { tensor, name }
    }

    pub fn new_unnamed(tensor: Tensor) -> Self {
        Self::new(tensor, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The underlying tensor handle.
    pub fn tensor(&self) -> &Tensor {
        &self.tensor
    }

    /// Reads the gradient accumulator.
    ///
    /// # Errors
    /// `UninitializedGradient` if no backward pass has populated it since creation or
    /// the last `zero_grad`.
    pub fn grad(&self) -> Result<Tensor, GradLabError> {
        self.tensor
            .grad()
            .ok_or_else(|| GradLabError::UninitializedGradient {
                operation: format!("grad of parameter {}", self.name().unwrap_or("<unnamed>")),
            })
    }
}

impl Deref for Parameter {
    type Target = Tensor;

    fn deref(&self) -> &Self::Target {
        &self.tensor
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("tensor", &self.tensor)
            .finish()
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
