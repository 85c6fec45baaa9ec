use gradlab_core::autograd::no_grad;
use gradlab_core::nn::{CrossEntropyLoss, Loss};
use gradlab_core::{GradLabError, Tensor};

fn main() -> Result<(), GradLabError> {
    println!("--- y = x^2, z = mean(y) ---");
    let x = Tensor::new(vec![1.0, -2.0, 3.0, 0.5], vec![2, 2])?.track()?;
    let y = x.pow_scalar(2.0)?;
    let z = y.mean()?;
    println!("x = {:?}", x.to_vec());
    println!("z = {} (grad_fn: {:?})", z.item()?, z.grad_fn_name());

    z.backward()?;
    println!("dz/dx = {:?} (expected 2x/n)", x.try_grad()?.to_vec());

    z.backward()?;
    println!("after a second backward: {:?}", x.try_grad()?.to_vec());

    x.zero_grad();
    println!("after zero_grad: {:?}", x.grad().map(|g| g.to_vec()));

    println!("\n--- no_grad scope ---");
    let untracked = no_grad(|| x.mul_scalar(10.0))?;
    println!(
        "inside no_grad: requires_grad = {}, is_leaf = {}",
        untracked.requires_grad(),
        untracked.is_leaf()
    );

    println!("\n--- cross-entropy on large scores ---");
    let scores = Tensor::new(vec![1000.0, 0.0, -1000.0, 500.0, 499.0, 0.0], vec![2, 3])?.track()?;
    let labels = Tensor::new(vec![0.0, 1.0], vec![2])?;
    let loss = CrossEntropyLoss.calculate(&scores, &labels)?;
    loss.backward()?;
    println!("loss = {}", loss.item()?);
    println!("dloss/dscores = {:?}", scores.try_grad()?.to_vec());

    Ok(())
}
