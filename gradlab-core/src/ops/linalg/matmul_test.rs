use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::check_tensor_near;

#[test]
fn test_matmul_forward() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let b = Tensor::new(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], vec![3, 2])?;
    let c = matmul_op(&a, &b)?;
    check_tensor_near(&c, &[2, 2], &[58.0, 64.0, 139.0, 154.0], 1e-5);
    Ok(())
}

#[test]
fn test_matmul_inner_dim_mismatch() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![1.0; 6], vec![2, 3])?;
    let b = Tensor::new(vec![1.0; 4], vec![2, 2])?;
    assert!(matches!(
        matmul_op(&a, &b),
        Err(GradLabError::InvalidShape { .. })
    ));
    Ok(())
}

#[test]
fn test_matmul_rejects_non_2d() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![1.0; 3], vec![3])?;
    let b = Tensor::new(vec![1.0; 3], vec![3, 1])?;
    assert!(matmul_op(&a, &b).is_err());
    Ok(())
}

#[test]
fn test_matmul_backward_values() -> Result<(), GradLabError> {
    // sum(A @ B): dA = 1 @ B^T (row sums of B), dB = A^T @ 1 (column sums of A)
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?.track()?;
    let b = Tensor::new(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2])?.track()?;
    matmul_op(&a, &b)?.sum()?.backward()?;
    check_tensor_near(&a.try_grad()?, &[2, 2], &[11.0, 15.0, 11.0, 15.0], 1e-5);
    check_tensor_near(&b.try_grad()?, &[2, 2], &[4.0, 4.0, 6.0, 6.0], 1e-5);
    Ok(())
}

#[test]
fn test_matmul_grad_check_rectangular() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![0.1, -0.4, 0.9, 1.2, 0.3, -0.8], vec![2, 3])?.track()?;
    let b = Tensor::new(vec![0.5, -0.2, 0.7, 1.1, -0.6, 0.25], vec![3, 2])?.track()?;
    check_grad(|t| matmul_op(&t[0], &t[1]), &[a, b], 1e-2, 1e-2)
        .expect("matmul gradient check failed");
    Ok(())
}

#[test]
fn test_matmul_propagates_nan_through_zero_entries() -> Result<(), GradLabError> {
    let a = Tensor::new(vec![0.0, 1.0], vec![1, 2])?;
    let b = Tensor::new(vec![f32::NAN, 1.0], vec![2, 1])?;
    assert!(matmul_op(&a, &b)?.to_vec()[0].is_nan());

    let inf = Tensor::new(vec![f32::INFINITY, 1.0], vec![2, 1])?;
    assert!(matmul_op(&a, &inf)?.to_vec()[0].is_nan());
    Ok(())
}

#[test]
fn test_matmul_backward_propagates_nan_through_zero_entries() -> Result<(), GradLabError> {
    // Upstream gradient G = [NaN]; dB = A^T @ G is NaN in every entry, including
    // the one paired with the zero in A.
    let a = Tensor::new(vec![0.0, 1.0], vec![1, 2])?;
    let b = Tensor::new(vec![3.0, 1.0], vec![2, 1])?.track()?;
    let scale = Tensor::new(vec![f32::NAN], vec![1, 1])?;
    matmul_op(&a, &b)?.mul(&scale)?.sum()?.backward()?;
    assert!(b.try_grad()?.to_vec().iter().all(|g| g.is_nan()));
    Ok(())
}
