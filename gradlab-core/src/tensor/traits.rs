// src/tensor/traits.rs

use crate::tensor::Tensor;
use std::fmt::{self, Debug};
use std::sync::Arc;

impl Clone for Tensor {
    /// Shallow clone: increases the reference count of the shared data.
    /// Modifications through one clone are visible through the others.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => {
                write!(f, "Tensor(shape={:?}, data=", guard.shape)?;
                if guard.numel() <= 16 {
                    write!(f, "{:?}", guard.data)?;
                } else {
                    write!(f, "[... {} elements ...]", guard.numel())?;
                }
                write!(
                    f,
                    ", requires_grad={}, has_grad={}, grad_fn={})",
                    guard.requires_grad,
                    guard.grad.is_some(),
                    guard.grad_fn.as_ref().map_or("None", |node| node.op.name())
                )
            }
            Err(_) => write!(f, "Tensor(Error: RwLock poisoned)"),
        }
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal when they have the same shape and the same elements.
    /// Autograd metadata is ignored.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        let a = self.read_data();
        let b = other.read_data();
        a.shape == b.shape && a.data == b.data
    }
}
