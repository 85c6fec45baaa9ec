use approx::assert_relative_eq;
use gradlab_core::model::Sequential;
use gradlab_core::nn::{Linear, LogSoftmax, Module, MseLoss, NllLoss};
use gradlab_core::training::{Trainer, TrainerConfig};
use gradlab_core::{GradLabError, Tensor};

mod common;
use common::{create_test_tensor, labels};

#[test]
fn test_zero_init_linear_mse_closed_form_update() -> Result<(), GradLabError> {
    // y = x W^T + b with W = 0, b = 0, so y = 0 and dL/dy = 2 (y - t) / k = -2 t / k.
    // dW = (dL/dy)^T x, db = dL/dy; one step moves each by -lr * grad.
    let lr = 0.1;
    let model = Sequential::new().add(Linear::zeros(3, 2, true)?);
    let mut trainer = Trainer::with_sgd(model, MseLoss::default(), TrainerConfig::new().learning_rate(lr))?;

    let x = create_test_tensor(vec![1.0, 2.0, -1.0], vec![1, 3]);
    let t = create_test_tensor(vec![1.0, 0.0], vec![1, 2]);
    let loss = trainer.train_step(&x, &t)?;
    assert_relative_eq!(loss, 0.5);

    let dy = [-1.0f32, 0.0];
    let xs = [1.0f32, 2.0, -1.0];
    let params = trainer.model().named_parameters();
    let weight = params[0].1.to_vec();
    for j in 0..2 {
        for i in 0..3 {
            assert_relative_eq!(weight[j * 3 + i], -lr * dy[j] * xs[i], epsilon = 1e-6);
        }
    }
    let bias = params[1].1.to_vec();
    assert_relative_eq!(bias[0], -lr * dy[0], epsilon = 1e-6);
    assert_relative_eq!(bias[1], 0.0);
    Ok(())
}

#[test]
fn test_zero_init_linear_nll_closed_form_update() -> Result<(), GradLabError> {
    // Zero scores give uniform probabilities p = 1/C. The gradient of the NLL of
    // log_softmax w.r.t. the scores is p - onehot(label).
    let lr = 0.1;
    let model = Sequential::new()
        .add(Linear::zeros(2, 3, true)?)
        .add(LogSoftmax::new());
    let mut trainer = Trainer::with_sgd(model, NllLoss, TrainerConfig::new().learning_rate(lr))?;

    let x = create_test_tensor(vec![0.5, -2.0], vec![1, 2]);
    let loss = trainer.train_step(&x, &labels(&[2]))?;
    assert_relative_eq!(loss, 3.0f32.ln(), epsilon = 1e-6);

    let ds = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0 - 1.0];
    let xs = [0.5f32, -2.0];
    let params = trainer.model().parameters();
    let weight = params[0].to_vec();
    let bias = params[1].to_vec();
    for c in 0..3 {
        assert_relative_eq!(bias[c], -lr * ds[c], epsilon = 1e-6);
        for i in 0..2 {
            assert_relative_eq!(weight[c * 2 + i], -lr * ds[c] * xs[i], epsilon = 1e-6);
        }
    }
    Ok(())
}

#[test]
fn test_wrong_input_width_aborts_training() -> Result<(), GradLabError> {
    let model = Sequential::new().add(Linear::zeros(4, 2, true)?);
    let mut trainer = Trainer::with_sgd(model, MseLoss::default(), TrainerConfig::new())?;
    let x = Tensor::new(vec![0.0; 3], vec![1, 3])?;
    let t = Tensor::new(vec![0.0; 2], vec![1, 2])?;
    assert!(matches!(
        trainer.train_step(&x, &t),
        Err(GradLabError::InvalidShape { .. })
    ));
    Ok(())
}
