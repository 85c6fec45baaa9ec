use crate::autograd::graph::topological_sort;
use crate::autograd::Node;
use crate::error::GradLabError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

impl Tensor {
    /// Checks if this tensor requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` flag **in-place**.
    ///
    /// Results of tracked ops already require grad; asking a non-leaf to stop tracking
    /// is an error (use [`Tensor::detach`] instead).
    pub fn requires_grad_(&self, requires_grad: bool) -> Result<(), GradLabError> {
        let mut guard = self.write_data();
        if guard.grad_fn.is_some() {
            if requires_grad {
                log::warn!("requires_grad_(true) on a non-leaf tensor has no effect");
                return Ok(());
            }
            return Err(GradLabError::InvalidArgument(
                "cannot stop tracking a non-leaf tensor, use detach() instead".to_string(),
            ));
        }
        guard.requires_grad = requires_grad;
        Ok(())
    }

    /// Marks the tensor as requiring gradients and hands it back.
    pub fn track(self) -> Result<Self, GradLabError> {
        self.requires_grad_(true)?;
        Ok(self)
    }

    /// A leaf was created by the user rather than produced by a recorded op.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns the node that produced this tensor, if it was recorded.
    pub fn grad_fn(&self) -> Option<Arc<Node>> {
        self.read_data().grad_fn.clone()
    }

    /// Name of the producing op, e.g. `"MulBackward"`.
    pub fn grad_fn_name(&self) -> Option<&'static str> {
        self.read_data().grad_fn.as_ref().map(|node| node.op.name())
    }

    /// Returns a handle to the gradient accumulator, if populated.
    pub fn grad(&self) -> Option<Tensor> {
        self.read_data().grad.clone()
    }

    /// Returns the gradient accumulator or `UninitializedGradient` if nothing has been
    /// accumulated since creation or the last [`Tensor::zero_grad`].
    pub fn try_grad(&self) -> Result<Tensor, GradLabError> {
        self.grad().ok_or_else(|| GradLabError::UninitializedGradient {
            operation: "try_grad".to_string(),
        })
    }

    /// Adds `grad_to_add` into the gradient accumulator.
    pub fn acc_grad(&self, grad_to_add: &Tensor) -> Result<(), GradLabError> {
        let shape = self.shape();
        if grad_to_add.shape() != shape {
            return Err(GradLabError::shape(shape, grad_to_add.shape(), "acc_grad"));
        }
        let values = grad_to_add.to_vec();
        accumulate_into(&self.data, values)
    }

    /// Clears the gradient accumulator.
    pub fn zero_grad(&self) {
        self.write_data().grad = None;
    }

    /// Creates a new leaf tensor with a copy of the data, detached from the graph.
    pub fn detach(&self) -> Tensor {
        let guard = self.read_data();
        Tensor {
            data: Arc::new(RwLock::new(TensorData {
                data: guard.data.clone(),
                shape: guard.shape.clone(),
                requires_grad: false,
                grad: None,
                grad_fn: None,
            })),
        }
    }

    /// Performs the backward pass starting from this single-element tensor.
    ///
    /// The seed gradient is 1.0. Gradients are propagated in reverse topological order,
    /// and the totals reaching each tracked leaf are **added** to its accumulator, so
    /// calling `backward` twice without clearing doubles the stored gradients.
    ///
    /// # Errors
    /// * `InvalidShape` if the tensor holds more than one element.
    /// * Any error raised by an op's gradient rule.
    ///
    /// A tensor that was not produced by a recorded op has nothing to propagate; the
    /// call is a no-op.
    pub fn backward(&self) -> Result<(), GradLabError> {
        let shape = self.shape();
        if self.numel() != 1 {
            return Err(GradLabError::InvalidShape {
                expected: "a single-element (scalar) tensor".to_string(),
                actual: format!("{:?}", shape),
                operation: "backward".to_string(),
            });
        }
        if self.is_leaf() {
            log::debug!("backward() called on a leaf tensor, nothing to propagate");
            return Ok(());
        }

        let sorted = topological_sort(self);
        log::trace!("backward: {} tracked tensors in graph", sorted.len());

        let mut pending: HashMap<usize, Vec<f32>> = HashMap::new();
        pending.insert(self.node_id(), vec![1.0]);

        for tensor in sorted.iter().rev() {
            let Some(grad_output) = pending.remove(&tensor.node_id()) else {
                continue;
            };
            let (grad_fn, output_shape) = {
                let guard = tensor.read_data();
                (guard.grad_fn.clone(), guard.shape.clone())
            };

            let node = match grad_fn {
                Some(node) => node,
                None => {
                    accumulate_into(&tensor.data, grad_output)?;
                    continue;
                }
            };

            let input_grads = node.op.backward(&node.inputs, &grad_output, &output_shape)?;
            if input_grads.len() != node.inputs.len() {
                return Err(GradLabError::InternalError(format!(
                    "{} returned {} gradients for {} inputs",
                    node.op.name(),
                    input_grads.len(),
                    node.inputs.len()
                )));
            }
            log::trace!("backward: {} -> {} input(s)", node.op.name(), node.inputs.len());

            for (input, grad) in node.inputs.iter().zip(input_grads) {
                if !input.requires_grad() {
                    continue;
                }
                if grad.len() != input.numel() {
                    return Err(GradLabError::InternalError(format!(
                        "{} produced a gradient of {} elements for an input of {}",
                        node.op.name(),
                        grad.len(),
                        input.numel()
                    )));
                }
                match pending.entry(input.node_id()) {
                    Entry::Occupied(mut slot) => {
                        for (acc, g) in slot.get_mut().iter_mut().zip(grad) {
                            *acc += g;
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(grad);
                    }
                }
            }
        }
        Ok(())
    }

    /// In-place `self -= scale * update`, outside the graph.
    ///
    /// Used by optimizers to move parameters; the tensor keeps its identity, its
    /// `requires_grad` flag and its gradient accumulator.
    pub fn sub_scaled_(&self, update: &Tensor, scale: f32) -> Result<(), GradLabError> {
        let update_shape = update.shape();
        let update_values = update.to_vec();
        let mut guard = self.write_data();
        if update_shape != guard.shape {
            return Err(GradLabError::shape(&guard.shape, update_shape, "sub_scaled_"));
        }
        for (value, u) in guard.data.iter_mut().zip(update_values) {
            *value -= scale * u;
        }
        Ok(())
    }
}

/// Adds `values` into the accumulator of the tensor stored behind `lock`.
fn accumulate_into(lock: &RwLock<TensorData>, values: Vec<f32>) -> Result<(), GradLabError> {
    let mut guard = lock.write().expect("RwLock poisoned");
    if values.len() != guard.numel() {
        return Err(GradLabError::InternalError(format!(
            "gradient of {} elements for a tensor of {}",
            values.len(),
            guard.numel()
        )));
    }
    // Clone & replace: handles returned by earlier `grad()` calls keep their values.
    let summed = match guard.grad.as_ref() {
        Some(existing) => existing
            .to_vec()
            .into_iter()
            .zip(values)
            .map(|(acc, v)| acc + v)
            .collect(),
        None => values,
    };
    let shape = guard.shape.clone();
    guard.grad = Some(Tensor::new(summed, shape)?);
    Ok(())
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
