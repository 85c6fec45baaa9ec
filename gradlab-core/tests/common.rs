use gradlab_core::Tensor;

#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn create_tracked_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    create_test_tensor(data, shape)
        .track()
        .expect("Failed to track test tensor")
}

/// Integral class labels stored as an `f32` tensor.
#[allow(dead_code)]
pub fn labels(values: &[usize]) -> Tensor {
    let data = values.iter().map(|&v| v as f32).collect();
    create_test_tensor(data, vec![values.len()])
}
