use super::*;
use crate::tensor::Tensor;
use approx::assert_relative_eq;

fn create_param(data: Vec<f32>, shape: Vec<usize>) -> Result<Parameter, GradLabError> {
    Ok(Parameter::new_unnamed(Tensor::new(data, shape)?))
}

#[test]
fn test_sgd_basic_step() -> Result<(), GradLabError> {
    let param_data = vec![1.0, 2.0, 3.0, 4.0];
    let grad_data = vec![0.1, 0.2, 0.3, 0.4];
    let lr = 0.1;

    let param = create_param(param_data.clone(), vec![2, 2])?;
    param.acc_grad(&Tensor::new(grad_data.clone(), vec![2, 2])?)?;

    let mut optimizer = SgdOptimizer::new(vec![param.clone()], lr)?;
    optimizer.step()?;

    for ((updated, p), g) in param.to_vec().iter().zip(&param_data).zip(&grad_data) {
        assert_relative_eq!(*updated, p - lr * g, epsilon = 1e-6);
    }
    // The gradient is left for the caller to clear.
    assert!(param.grad().is_ok());
    Ok(())
}

#[test]
fn test_sgd_skips_parameters_without_grad() -> Result<(), GradLabError> {
    let with_grad = create_param(vec![1.0], vec![1])?;
    let without_grad = create_param(vec![5.0], vec![1])?;
    with_grad.acc_grad(&Tensor::new(vec![2.0], vec![1])?)?;

    let mut optimizer = SgdOptimizer::new(vec![with_grad.clone(), without_grad.clone()], 0.5)?;
    optimizer.step()?;

    assert_eq!(with_grad.to_vec(), vec![0.0]);
    assert_eq!(without_grad.to_vec(), vec![5.0]);
    Ok(())
}

#[test]
fn test_sgd_zero_grad_clears_all() -> Result<(), GradLabError> {
    let a = create_param(vec![1.0, 2.0], vec![2])?;
    let b = create_param(vec![3.0], vec![1])?;
    a.mul(&a)?.sum()?.add(&b.sum()?)?.backward()?;

    let mut optimizer = SgdOptimizer::new(vec![a.clone(), b.clone()], 0.1)?;
    optimizer.zero_grad();
    assert!(optimizer.parameters().iter().all(|p| p.grad().is_err()));
    Ok(())
}

#[test]
fn test_sgd_learning_rate_validation() -> Result<(), GradLabError> {
    assert!(SgdOptimizer::new(Vec::new(), -0.1).is_err());
    assert!(SgdOptimizer::new(Vec::new(), f32::NAN).is_err());

    let mut optimizer = SgdOptimizer::new(Vec::new(), 0.1)?;
    optimizer.set_learning_rate(0.01)?;
    assert_relative_eq!(optimizer.learning_rate(), 0.01);
    assert!(optimizer.set_learning_rate(f32::INFINITY).is_err());
    assert_relative_eq!(optimizer.learning_rate(), 0.01);
    Ok(())
}

#[test]
fn test_sgd_step_is_minus_lr_times_grad_after_backward() -> Result<(), GradLabError> {
    // loss = sum(w * x): grad = x
    let w = create_param(vec![0.5, -0.5, 1.0], vec![3])?;
    let x = Tensor::new(vec![1.0, 2.0, -3.0], vec![3])?;
    w.mul(&x)?.sum()?.backward()?;

    let before = w.to_vec();
    let grad = w.grad()?.to_vec();
    let mut optimizer = SgdOptimizer::new(vec![w.clone()], 0.25)?;
    optimizer.step()?;

    for ((after, b), g) in w.to_vec().iter().zip(&before).zip(&grad) {
        assert_relative_eq!(after - b, -0.25 * g, epsilon = 1e-6);
    }
    Ok(())
}
