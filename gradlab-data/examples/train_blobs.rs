use gradlab_core::model::Sequential;
use gradlab_core::nn::{CrossEntropyLoss, Linear, ReLU};
use gradlab_core::training::{Trainer, TrainerConfig};
use gradlab_core::GradLabError;
use gradlab_data::synthetic::make_blobs;
use gradlab_data::{DataLoader, RandomSampler, SequentialSampler};

fn main() -> Result<(), GradLabError> {
    let centers = vec![vec![3.0, 0.0], vec![-3.0, 0.0], vec![0.0, 3.0], vec![0.0, -3.0]];
    let train = make_blobs(&centers, 100, 0.8, 42)?;
    let test = make_blobs(&centers, 25, 0.8, 43)?;
    println!("train samples: {}, test samples: {}", train.features().shape()[0], test.features().shape()[0]);

    let train_loader = DataLoader::new(train, 32, RandomSampler::with_seed(0), false)?;
    let test_loader = DataLoader::new(test, 50, SequentialSampler::new(), false)?;

    let model = Sequential::new()
        .add(Linear::new(2, 16, true)?)
        .add(ReLU::new())
        .add(Linear::new(16, 4, true)?);
    let config = TrainerConfig::new().epochs(20).learning_rate(0.05).log_interval(5);
    let mut trainer = Trainer::with_sgd(model, CrossEntropyLoss, config)?;

    let history = trainer.fit(&train_loader)?;
    for (epoch, loss) in history.epoch_losses.iter().enumerate() {
        println!("epoch {:>2}: mean loss {:.4}", epoch + 1, loss);
    }

    let stats = trainer.evaluate(&test_loader)?;
    println!("test loss: {:.4}", stats.mean_loss);
    if let Some(accuracy) = stats.accuracy {
        println!("test accuracy: {:.1}%", accuracy * 100.0);
    }
    Ok(())
}
