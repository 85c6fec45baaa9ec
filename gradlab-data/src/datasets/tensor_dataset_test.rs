use super::*;

fn create_test_tensor(data: Vec<f32>, shape: &[usize]) -> Tensor {
    Tensor::new(data, shape.to_vec()).expect("Test tensor creation failed")
}

fn sample_dataset() -> TensorDataset {
    let features = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2]);
    let labels = create_test_tensor(vec![0.0, 1.0, 0.0], &[3]);
    TensorDataset::new(features, labels).expect("valid dataset")
}

#[test]
fn test_tensor_dataset_len() {
    let dataset = sample_dataset();
    assert_eq!(dataset.len(), 3);
    assert!(!dataset.is_empty());
}

#[test]
fn test_tensor_dataset_get() -> Result<(), GradLabError> {
    let dataset = sample_dataset();
    let (x, y) = dataset.get(1)?;
    assert_eq!(x.shape(), vec![2]);
    assert_eq!(x.to_vec(), vec![3.0, 4.0]);
    assert_eq!(y.rank(), 0);
    assert_eq!(y.item()?, 1.0);
    Ok(())
}

#[test]
fn test_tensor_dataset_get_out_of_bounds() {
    let dataset = sample_dataset();
    assert_eq!(
        dataset.get(3).unwrap_err(),
        GradLabError::IndexOutOfBounds { index: 3, len: 3 }
    );
}

#[test]
fn test_tensor_dataset_first_dim_mismatch() {
    let features = create_test_tensor(vec![0.0; 6], &[3, 2]);
    let labels = create_test_tensor(vec![0.0, 1.0], &[2]);
    match TensorDataset::new(features, labels) {
        Err(GradLabError::InvalidShape { operation, .. }) => {
            assert_eq!(operation, "TensorDataset::new")
        }
        other => panic!("Expected InvalidShape, got {:?}", other),
    }
}

#[test]
fn test_tensor_dataset_rejects_scalars() {
    let result = TensorDataset::new(Tensor::scalar(1.0), Tensor::scalar(0.0));
    assert!(matches!(result, Err(GradLabError::InvalidShape { .. })));
}

#[test]
fn test_tensor_dataset_samples_are_untracked_copies() -> Result<(), GradLabError> {
    let features = create_test_tensor(vec![1.0, 2.0], &[2, 1]).track()?;
    let labels = create_test_tensor(vec![0.0, 1.0], &[2]);
    let dataset = TensorDataset::new(features, labels)?;
    let (x, _) = dataset.get(0)?;
    assert!(!x.requires_grad());
    assert!(x.is_leaf());
    Ok(())
}
