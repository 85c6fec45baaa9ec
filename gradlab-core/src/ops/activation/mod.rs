//! # Activation Functions
//!
//! Element-wise non-linearities plus the row-wise softmax family, which normalizes
//! over the last axis.

pub mod relu;
pub mod sigmoid;
pub mod softmax;
pub mod tanh;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use softmax::{log_softmax_op, softmax_op};
pub use tanh::tanh_op;
