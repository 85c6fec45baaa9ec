//! Parameter-free activation layers.

use crate::error::GradLabError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

macro_rules! activation_layer {
    ($(#[$doc:meta])* $layer:ident, $method:ident) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $layer;

        impl $layer {
            pub fn new() -> Self {
                $layer
            }
        }

        impl Module for $layer {
            fn forward(&self, input: &Tensor) -> Result<Tensor, GradLabError> {
                input.$method()
            }

            fn parameters(&self) -> Vec<&Parameter> {
                Vec::new()
            }

            fn named_parameters(&self) -> Vec<(String, &Parameter)> {
                Vec::new()
            }

            fn name(&self) -> &'static str {
                stringify!($layer)
            }
        }
    };
}

activation_layer!(
    /// `max(0, x)` element-wise.
    ReLU,
    relu
);
activation_layer!(Sigmoid, sigmoid);
activation_layer!(Tanh, tanh);
activation_layer!(
    /// Log-probabilities over the last axis; pair with [`NllLoss`](crate::nn::NllLoss).
    LogSoftmax,
    log_softmax
);
activation_layer!(
    /// Probabilities over the last axis.
    Softmax,
    softmax
);
