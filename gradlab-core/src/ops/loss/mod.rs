pub mod nll;

pub use nll::{nll_loss_op, targets_to_indices};
