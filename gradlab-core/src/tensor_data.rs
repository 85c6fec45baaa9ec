// src/tensor_data.rs
use std::fmt::Debug;
use std::sync::Arc;

use crate::autograd::Node;
use crate::error::GradLabError;
use crate::tensor::Tensor;

/// Internal storage and metadata for a Tensor.
///
/// Holds the contiguous row-major data, the shape and the autograd bookkeeping.
/// It is wrapped in `Arc<RwLock<TensorData>>` by the `Tensor` struct
/// to allow shared ownership and interior mutability.
#[derive(Debug)]
pub struct TensorData {
    /// Flat row-major element storage.
    pub(crate) data: Vec<f32>,
    /// The shape (dimensions) of the tensor. Empty for a 0-dimensional scalar.
    pub(crate) shape: Vec<usize>,

    // --- Autograd Metadata ---
    /// Flag indicating if the tensor requires gradient computation.
    /// If true, operations involving this tensor will be recorded in the computation graph.
    pub(crate) requires_grad: bool,
    /// Gradient accumulator, same shape as this tensor.
    /// Populated by `backward()` on leaves, cleared by `zero_grad()`.
    pub(crate) grad: Option<Tensor>,
    /// The operation node that produced this tensor.
    /// Leaf tensors (created directly by the user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<Node>>,
}

impl TensorData {
    /// Creates a new `TensorData` instance with the given data and shape.
    ///
    /// # Errors
    /// Returns `GradLabError::TensorCreationError` if the length of `data` does not match
    /// the total number of elements specified by `shape`.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self, GradLabError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(GradLabError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(TensorData {
            data,
            shape,
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    /// Returns the number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }
}
