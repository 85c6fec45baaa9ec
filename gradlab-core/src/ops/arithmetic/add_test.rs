use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::check_tensor_near;

#[test]
fn test_add_same_shape() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    let b = Tensor::new(vec![10.0, 20.0, 30.0, 40.0], vec![2, 2])?;
    let c = add_op(&a, &b)?;
    check_tensor_near(&c, &[2, 2], &[11.0, 22.0, 33.0, 44.0], 1e-6);
    assert!(!c.requires_grad());
    Ok(())
}

#[test]
fn test_add_broadcast_row_vector() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let bias = Tensor::new(vec![0.5, 1.0, 1.5], vec![3])?;
    let c = add_op(&a, &bias)?;
    check_tensor_near(&c, &[2, 3], &[1.5, 3.0, 4.5, 4.5, 6.0, 7.5], 1e-6);
    Ok(())
}

#[test]
fn test_add_incompatible_shapes() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let b = Tensor::new(vec![1.0, 2.0], vec![2])?;
    match add_op(&a, &b) {
        Err(GradLabError::InvalidShape { operation, .. }) => assert_eq!(operation, "add"),
        other => panic!("Expected InvalidShape, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_add_backward_reduces_broadcast_dims() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?.track()?;
    let bias = Tensor::new(vec![0.0, 0.0, 0.0], vec![3])?.track()?;
    let c = add_op(&a, &bias)?;
    assert_eq!(c.grad_fn_name(), Some("AddBackward"));

    c.sum()?.backward()?;
    check_tensor_near(&a.try_grad()?, &[2, 3], &[1.0; 6], 1e-6);
    check_tensor_near(&bias.try_grad()?, &[3], &[2.0, 2.0, 2.0], 1e-6);
    Ok(())
}

#[test]
fn test_add_grad_check() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![0.3, -0.2, 0.7, 1.1], vec![4, 1])?.track()?;
    let b = Tensor::new(vec![0.5, -1.5, 2.0], vec![1, 3])?.track()?;
    check_grad(|t| add_op(&t[0], &t[1]), &[a, b], 1e-2, 1e-2)
        .expect("add gradient check failed");
    Ok(())
}
