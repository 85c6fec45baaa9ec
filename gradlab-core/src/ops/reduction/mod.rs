//! Reductions: full and per-axis sums and means, plus an untracked arg-max.

pub mod argmax;
pub mod mean;
pub mod sum;
mod utils;

pub use argmax::argmax_axis_op;
pub use mean::{mean_axis_op, mean_op};
pub use sum::{sum_axis_op, sum_op};
