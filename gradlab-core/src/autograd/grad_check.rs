use crate::autograd::no_grad;
use crate::error::GradLabError;
use crate::tensor::Tensor;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical} != numerical {numerical}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical: f32,
        numerical: f32,
    },

    #[error("Gradient check input {input_index} must be a leaf tensor")]
    InputNotLeaf { input_index: usize },

    #[error("Numerical gradient is not finite for input {input_index}, element {element_index}")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
    },

    #[error("Tensor error during gradient check: {0}")]
    TensorError(#[from] GradLabError),
}

/// Checks analytical gradients against central finite differences.
///
/// The scalar objective is `sum(func(inputs))`. For every input that requires grad,
/// each element is perturbed by `±epsilon` and the numerical slope compared with the
/// gradient produced by `backward()`, using a combined absolute/relative `tolerance`.
///
/// Existing gradients on `inputs` are cleared first.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    epsilon: f32,
    tolerance: f32,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, GradLabError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let objective = func(inputs)?.sum()?;
    objective.backward()?;

    for (i, input) in inputs.iter().enumerate() {
        if !input.requires_grad() {
            continue;
        }
        let analytical = input.try_grad()?.to_vec();
        let original = input.to_vec();

        for (elem, &analytical_elem) in analytical.iter().enumerate() {
            let loss_plus = perturbed_objective(&func, inputs, i, &original, elem, epsilon)?;
            let loss_minus = perturbed_objective(&func, inputs, i, &original, elem, -epsilon)?;
            let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index: i,
                    element_index: elem,
                });
            }
            if !approx::relative_eq!(
                analytical_elem,
                numerical,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem,
                    analytical: analytical_elem,
                    numerical,
                });
            }
        }
    }
    Ok(())
}

fn perturbed_objective<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    original: &[f32],
    element_index: usize,
    delta: f32,
) -> Result<f32, GradLabError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, GradLabError>,
{
    let mut data = original.to_vec();
    data[element_index] += delta;
    let perturbed = Tensor::new(data, inputs[input_index].shape())?;
    let shifted: Vec<Tensor> = inputs
        .iter()
        .enumerate()
        .map(|(j, t)| if j == input_index { perturbed.clone() } else { t.detach() })
        .collect();
    no_grad(|| func(&shifted)?.sum()?.item())
}
