//! Reverse-mode automatic differentiation.
//!
//! Every primitive op that consumes at least one tracked tensor attaches a [`Node`]
//! to its output: a [`BackwardOp`] variant carrying the context saved at forward time,
//! plus handles to the op's inputs. The resulting DAG is walked in reverse topological
//! order by [`Tensor::backward`](crate::Tensor::backward).

pub mod backward_op;
pub mod grad_check;
pub mod grad_mode;
pub mod graph;

pub use backward_op::{BackwardOp, Node};
pub use grad_mode::{is_grad_enabled, no_grad, NoGradGuard};

use crate::tensor::Tensor;
use std::sync::Arc;

/// Attaches a graph node to `output` when gradient mode is on and any input is tracked.
///
/// `make_op` is only invoked when recording actually happens, so ops can defer
/// copying their saved context.
pub(crate) fn record<F>(inputs: &[&Tensor], output: Tensor, make_op: F) -> Tensor
where
    F: FnOnce() -> BackwardOp,
{
    if !is_grad_enabled() || !inputs.iter().any(|t| t.requires_grad()) {
        return output;
    }
    let node = Node {
        op: make_op(),
        inputs: inputs.iter().map(|t| (*t).clone()).collect(),
    };
    {
        let mut guard = output.write_data();
        guard.requires_grad = true;
        guard.grad_fn = Some(Arc::new(node));
    }
    output
}
