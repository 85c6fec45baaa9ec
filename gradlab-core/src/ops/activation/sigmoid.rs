use crate::autograd::BackwardOp;
use crate::error::GradLabError;
use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Logistic sigmoid `1 / (1 + e^-x)`.
pub fn sigmoid_op(a: &Tensor) -> Result<Tensor, GradLabError> {
    apply_unary_op(a, sigmoid, |_, output| BackwardOp::Sigmoid {
        output: output.to_vec(),
    })
}

// Split on sign so neither branch exponentiates a large positive number.
fn sigmoid(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::check_grad;
    use approx::assert_relative_eq;

    #[test]
    fn test_sigmoid_forward() -> Result<(), GradLabError> {
        let a = Tensor::new(vec![0.0, 100.0, -100.0], vec![3])?;
        let s = sigmoid_op(&a)?.to_vec();
        assert_relative_eq!(s[0], 0.5);
        assert_relative_eq!(s[1], 1.0);
        assert_relative_eq!(s[2], 0.0);
        assert!(s.iter().all(|v| v.is_finite()));
        Ok(())
    }

    #[test]
    fn test_sigmoid_grad_check() -> Result<(), GradLabError> {
        let a = Tensor::new(vec![-2.0, -0.5, 0.0, 0.7, 3.0], vec![5])?.track()?;
        check_grad(|t| sigmoid_op(&t[0]), &[a], 1e-2, 1e-2)
            .expect("sigmoid gradient check failed");
        Ok(())
    }
}
