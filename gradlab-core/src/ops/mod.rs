//! # Tensor Operations Module (`ops`)
//!
//! Operations are grouped into submodules by functionality. Each one has a core
//! `xxx_op` function that computes the forward result and, through
//! [`autograd::record`](crate::autograd), attaches the matching
//! [`BackwardOp`](crate::autograd::BackwardOp) variant when gradients are tracked.
//! The `Tensor` methods in `crate::tensor` are thin wrappers over these functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: element-wise arithmetic with broadcasting, scalar ops, powers.
//! - [`linalg`]: matrix multiplication and transpose.
//! - [`activation`]: ReLU, sigmoid, tanh, softmax and log-softmax.
//! - [`math_elem`]: element-wise `exp` and `ln`.
//! - [`reduction`]: sums, means and arg-max.
//! - [`view`]: reshape / flatten.
//! - [`loss`]: negative log-likelihood.
//! - [`stack`]: batching tensors along a new leading axis.

use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::tensor::utils::{broadcast_index_map, broadcast_shapes};
use crate::tensor::Tensor;

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod loss;
pub mod math_elem;
pub mod reduction;
pub mod stack;
pub mod view;

/// Applies a unary element-wise operation and records it.
///
/// `backward_builder` receives the input and the computed output so each op can
/// save whichever its derivative is expressed through. Later in-place updates of
/// the input do not reach the saved copy.
pub(crate) fn apply_unary_op<F, B>(
    a: &Tensor,
    op: F,
    backward_builder: B,
) -> Result<Tensor, GradLabError>
where
    F: Fn(f32) -> f32,
    B: FnOnce(&[f32], &[f32]) -> BackwardOp,
{
    let (output_data, shape) = {
        let guard = a.read_data();
        let data: Vec<f32> = guard.data.iter().map(|&v| op(v)).collect();
        (data, guard.shape.clone())
    };
    let output = Tensor::new(output_data, shape)?;
    let cached = output.clone();
    Ok(record(&[a], output, || {
        backward_builder(&a.read_data().data, &cached.read_data().data)
    }))
}

/// Applies a binary element-wise operation with NumPy-style broadcasting and records it.
///
/// `backward_builder` takes ownership of the forward values of `a` and `b`.
pub(crate) fn apply_binary_op<F, B>(
    a: &Tensor,
    b: &Tensor,
    op: F,
    backward_builder: B,
    op_name: &str,
) -> Result<Tensor, GradLabError>
where
    F: Fn(f32, f32) -> f32,
    B: FnOnce(Vec<f32>, Vec<f32>) -> BackwardOp,
{
    let a_shape = a.shape();
    let b_shape = b.shape();
    let output_shape = broadcast_shapes(&a_shape, &b_shape).map_err(|_| {
        GradLabError::shape(&a_shape, &b_shape, op_name)
    })?;
    let a_map = broadcast_index_map(&a_shape, &output_shape);
    let b_map = broadcast_index_map(&b_shape, &output_shape);

    let a_data = a.to_vec();
    let b_data = b.to_vec();
    let output_data: Vec<f32> = a_map
        .iter()
        .zip(&b_map)
        .map(|(&i, &j)| op(a_data[i], b_data[j]))
        .collect();

    let output = Tensor::new(output_data, output_shape)?;
    Ok(record(&[a, b], output, || backward_builder(a_data, b_data)))
}
