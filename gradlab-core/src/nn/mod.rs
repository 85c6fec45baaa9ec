//! Neural-network building blocks: the [`Module`] trait, [`Parameter`]s, layers,
//! weight initialisation and loss policies.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use layers::{Flatten, Linear, LogSoftmax, ReLU, Sigmoid, Softmax, Tanh};
pub use losses::{CrossEntropyLoss, Loss, MseLoss, NllLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
