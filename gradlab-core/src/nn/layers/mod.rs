pub mod activation;
pub mod flatten;
pub mod linear;

pub use activation::{LogSoftmax, ReLU, Sigmoid, Softmax, Tanh};
pub use flatten::Flatten;
pub use linear::Linear;
