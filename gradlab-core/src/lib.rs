//! # gradlab-core
//!
//! A small reverse-mode automatic differentiation engine over `f32` tensors, with the
//! pieces needed to train feed-forward classifiers on top of it:
//!
//! - [`tensor`]: the shared-handle [`Tensor`] type and its gradient API.
//! - [`autograd`]: operation nodes, the backward pass and the no-grad scope.
//! - [`ops`]: differentiable primitives (arithmetic, matmul, activations, reductions, NLL).
//! - [`nn`]: the `Module` trait, parameters, layers and loss policies.
//! - [`model`]: the `Sequential` container.
//! - [`optim`]: the `Optimizer` trait and plain SGD.
//! - [`training`]: the per-batch training loop driver.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod training;
pub mod utils;

pub use error::GradLabError;
pub use tensor::Tensor;
