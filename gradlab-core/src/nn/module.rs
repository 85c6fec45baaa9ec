use crate::error::GradLabError;
use crate::nn::Parameter;
use crate::tensor::Tensor;

/// The base trait for all neural network modules (layers and containers).
///
/// A module is a function from an input tensor to an output tensor that may own
/// learnable [`Parameter`]s.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `InvalidShape` if the input is structurally incompatible with the module, in
    /// particular when its trailing dimension differs from [`Module::input_width`].
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradLabError>;

    /// All learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Parameters with hierarchical names such as `"0.weight"`.
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Number of features the module expects on the last axis of its input, when fixed.
    fn input_width(&self) -> Option<usize> {
        None
    }

    /// Short type name used in logs and `Sequential`'s debug output.
    fn name(&self) -> &'static str;
}

/// Rejects inputs whose trailing dimension is not `expected`.
pub(crate) fn check_input_width(
    input: &Tensor,
    expected: usize,
    operation: &str,
) -> Result<(), GradLabError> {
    let shape = input.shape();
    match shape.last() {
        Some(&width) if width == expected => Ok(()),
        _ => Err(GradLabError::InvalidShape {
            expected: format!("input with trailing dimension {}", expected),
            actual: format!("{:?}", shape),
            operation: operation.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockModule {
        param: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, input: &Tensor) -> Result<Tensor, GradLabError> {
            check_input_width(input, 1, "MockModule::forward")?;
            input.mul(&self.param)
        }

        fn parameters(&self) -> Vec<&Parameter> {
            vec![&self.param]
        }

        fn named_parameters(&self) -> Vec<(String, &Parameter)> {
            let name = self.param.name().unwrap_or("param").to_string();
            vec![(name, &self.param)]
        }

        fn input_width(&self) -> Option<usize> {
            Some(1)
        }

        fn name(&self) -> &'static str {
            "MockModule"
        }
    }

    fn mock() -> Result<MockModule, GradLabError> {
        let tensor = Tensor::new(vec![2.0], vec![1])?;
        Ok(MockModule {
            param: Parameter::new_unnamed(tensor),
        })
    }

    #[test]
    fn test_module_forward_and_parameters() -> Result<(), GradLabError> {
        let module = mock()?;
        let out = module.forward(&Tensor::new(vec![1.0, 3.0], vec![2, 1])?)?;
        assert_eq!(out.to_vec(), vec![2.0, 6.0]);
        assert!(out.requires_grad());
        assert_eq!(module.parameters().len(), 1);
        assert_eq!(module.named_parameters()[0].0, "param");
        Ok(())
    }

    #[test]
    fn test_check_input_width_rejects_mismatch() -> Result<(), GradLabError> {
        let module = mock()?;
        let bad = Tensor::new(vec![1.0, 2.0], vec![1, 2])?;
        match module.forward(&bad) {
            Err(GradLabError::InvalidShape { operation, .. }) => {
                assert_eq!(operation, "MockModule::forward")
            }
            other => panic!("Expected InvalidShape, got {:?}", other),
        }
        let scalar = Tensor::scalar(1.0);
        assert!(check_input_width(&scalar, 1, "test").is_err());
        Ok(())
    }
}
