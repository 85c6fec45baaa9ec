use crate::error::GradLabError;
use crate::tensor_data::TensorData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod activation_methods;
mod arithmetic_methods;
mod autograd_methods;
pub mod create;
mod reduction_methods;
mod traits;
pub mod utils;
mod view_methods;

pub use create::{full, ones, ones_like, zeros, zeros_like};

/// Represents a multi-dimensional array (tensor) of `f32` values.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** Multiple `Tensor` handles can point to the same
///     underlying data without copying it (cheap clones). Layers own their parameters,
///     optimizers hold further handles to the same parameters.
/// 2.  **Interior Mutability:** Autograd metadata (`requires_grad`, `grad`) and, for the
///     optimizer, the values themselves can be updated through a shared handle.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new Tensor from row-major data and a shape.
    ///
    /// The tensor does not require gradients. Use [`Tensor::requires_grad_`] to track it.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self, GradLabError> {
        let tensor_data = TensorData::new(data, shape)?;
        Ok(Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        })
    }

    /// Creates a 0-dimensional tensor holding a single value.
    pub fn scalar(value: f32) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(TensorData {
                data: vec![value],
                shape: Vec::new(),
                requires_grad: false,
                grad: None,
                grad_fn: None,
            })),
        }
    }

    /// Returns a clone of the tensor's shape.
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a copy of the tensor's elements in row-major order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.read_data().data.clone()
    }

    /// Returns the single value held by a one-element tensor.
    pub fn item(&self) -> Result<f32, GradLabError> {
        let guard = self.read_data();
        if guard.numel() != 1 {
            return Err(GradLabError::InvalidShape {
                expected: "a single-element tensor".to_string(),
                actual: format!("{:?}", guard.shape),
                operation: "item".to_string(),
            });
        }
        Ok(guard.data[0])
    }

    /// Acquires a read lock on the tensor's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Identity of the underlying allocation, stable across handle clones.
    pub(crate) fn node_id(&self) -> usize {
        Arc::as_ptr(&self.data) as *const () as usize
    }
}
