use super::*;
use crate::datasets::TensorDataset;
use crate::samplers::{RandomSampler, SequentialSampler};

fn dataset(n: usize) -> TensorDataset {
    let features = Tensor::new((0..n * 2).map(|v| v as f32).collect(), vec![n, 2])
        .expect("features");
    let labels = Tensor::new((0..n).map(|v| (v % 2) as f32).collect(), vec![n]).expect("labels");
    TensorDataset::new(features, labels).expect("dataset")
}

#[test]
fn test_dataloader_sequential_batches() -> Result<(), GradLabError> {
    let loader = DataLoader::new(dataset(5), 2, SequentialSampler::new(), false)?;
    assert_eq!(loader.len(), 3);
    let batches: Vec<Batch> = loader.iter().collect::<Result<_, _>>()?;
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].0.shape(), vec![2, 2]);
    assert_eq!(batches[0].0.to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(batches[0].1.to_vec(), vec![0.0, 1.0]);
    assert_eq!(batches[2].0.shape(), vec![1, 2]);
    assert_eq!(batches[2].1.shape(), vec![1]);
    Ok(())
}

#[test]
fn test_dataloader_drop_last() -> Result<(), GradLabError> {
    let loader = DataLoader::new(dataset(5), 2, SequentialSampler::new(), true)?;
    assert_eq!(loader.len(), 2);
    assert_eq!(loader.iter().count(), 2);
    Ok(())
}

#[test]
fn test_dataloader_is_restartable() -> Result<(), GradLabError> {
    let loader = DataLoader::new(dataset(4), 3, SequentialSampler::new(), false)?;
    let first: Vec<Vec<f32>> = loader.batches().map(|b| b.map(|(x, _)| x.to_vec())).collect::<Result<_, _>>()?;
    let second: Vec<Vec<f32>> = loader.batches().map(|b| b.map(|(x, _)| x.to_vec())).collect::<Result<_, _>>()?;
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_random_loader_covers_every_sample_once() -> Result<(), GradLabError> {
    let loader = DataLoader::new(dataset(7), 3, RandomSampler::with_seed(3), false)?;
    let mut firsts: Vec<f32> = Vec::new();
    for batch in loader.iter() {
        let (x, _) = batch?;
        firsts.extend(x.to_vec().chunks(2).map(|row| row[0]));
    }
    firsts.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(firsts, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    Ok(())
}

#[test]
fn test_zero_batch_size_is_rejected() {
    assert!(matches!(
        DataLoader::new(dataset(2), 0, SequentialSampler::new(), false),
        Err(GradLabError::InvalidArgument(_))
    ));
}

#[test]
fn test_empty_dataset_yields_no_batches() -> Result<(), GradLabError> {
    let features = Tensor::new(vec![], vec![0, 2])?;
    let labels = Tensor::new(vec![], vec![0])?;
    let loader = DataLoader::new(TensorDataset::new(features, labels)?, 4, SequentialSampler::new(), false)?;
    assert!(loader.is_empty());
    assert_eq!(loader.iter().count(), 0);
    Ok(())
}
