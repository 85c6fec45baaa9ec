pub mod reshape;

pub use reshape::{flatten_from_op, reshape_op};
