use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

fn labels(values: &[f32]) -> Tensor {
    Tensor::new(values.to_vec(), vec![values.len()]).expect("labels")
}

#[test]
fn test_nll_picks_target_log_probs() -> Result<(), GradLabError> {
    let lp = Tensor::new(vec![-0.1, -2.0, -3.0, -1.5, -0.5, -2.5], vec![2, 3])?;
    let loss = nll_loss_op(&lp, &labels(&[0.0, 1.0]))?;
    assert_eq!(loss.rank(), 0);
    assert_relative_eq!(loss.item()?, (0.1 + 0.5) / 2.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_nll_gradient() -> Result<(), GradLabError> {
    let lp = Tensor::new(vec![-0.1, -2.0, -3.0, -1.5, -0.5, -2.5], vec![2, 3])?.track()?;
    nll_loss_op(&lp, &labels(&[2.0, 0.0]))?.backward()?;
    assert_eq!(
        lp.try_grad()?.to_vec(),
        vec![0.0, 0.0, -0.5, -0.5, 0.0, 0.0]
    );
    Ok(())
}

#[test]
fn test_nll_grad_check() -> Result<(), GradLabError> {
    let lp = Tensor::new(vec![-0.3, -1.2, -2.2, -0.9], vec![2, 2])?.track()?;
    let targets = labels(&[1.0, 0.0]);
    check_grad(|t| nll_loss_op(&t[0], &targets), &[lp], 1e-2, 1e-2)
        .expect("nll gradient check failed");
    Ok(())
}

#[test]
fn test_nll_rejects_bad_labels() -> Result<(), GradLabError> {
    let lp = Tensor::new(vec![-1.0; 6], vec![2, 3])?;
    for bad in [
        labels(&[0.0]),
        labels(&[0.0, 3.0]),
        labels(&[0.0, -1.0]),
        labels(&[0.5, 1.0]),
    ] {
        match nll_loss_op(&lp, &bad) {
            Err(GradLabError::InvalidShape { operation, .. }) => assert_eq!(operation, "nll_loss"),
            other => panic!("Expected InvalidShape, got {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn test_nll_rejects_non_2d_input() -> Result<(), GradLabError> {
    let lp = Tensor::new(vec![-1.0; 3], vec![3])?;
    assert!(nll_loss_op(&lp, &labels(&[0.0, 1.0, 2.0])).is_err());
    Ok(())
}
