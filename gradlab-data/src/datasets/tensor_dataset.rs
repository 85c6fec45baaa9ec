use super::traits::Dataset;
use gradlab_core::{GradLabError, Tensor};

/// Features and labels held as two tensors sharing their first dimension.
///
/// Sample `i` is `(features[i], labels[i])`: for `[N, d]` features and `[N]` labels that
/// is a `[d]` feature row and a 0-d label.
#[derive(Debug, Clone)]
pub struct TensorDataset {
    features: Tensor,
    labels: Tensor,
    length: usize,
}

impl TensorDataset {
    /// # Errors
    /// `InvalidShape` if either tensor is 0-d or the first dimensions differ.
    pub fn new(features: Tensor, labels: Tensor) -> Result<Self, GradLabError> {
        let feature_shape = features.shape();
        let label_shape = labels.shape();
        let (Some(&length), Some(&label_len)) = (feature_shape.first(), label_shape.first()) else {
            return Err(GradLabError::InvalidShape {
                expected: "tensors with a leading sample axis".to_string(),
                actual: format!("features {:?}, labels {:?}", feature_shape, label_shape),
                operation: "TensorDataset::new".to_string(),
            });
        };
        if length != label_len {
            return Err(GradLabError::InvalidShape {
                expected: format!("{} labels", length),
                actual: format!("{} labels", label_len),
                operation: "TensorDataset::new".to_string(),
            });
        }
        Ok(Self {
            features,
            labels,
            length,
        })
    }

    pub fn features(&self) -> &Tensor {
        &self.features
    }

    pub fn labels(&self) -> &Tensor {
        &self.labels
    }
}

impl Dataset for TensorDataset {
    type Item = (Tensor, Tensor);

    fn get(&self, index: usize) -> Result<Self::Item, GradLabError> {
        if index >= self.length {
            return Err(GradLabError::IndexOutOfBounds {
                index,
                len: self.length,
            });
        }
        Ok((self.features.select(index)?, self.labels.select(index)?))
    }

    fn len(&self) -> usize {
        self.length
    }
}

#[cfg(test)]
#[path = "tensor_dataset_test.rs"]
mod tests;
