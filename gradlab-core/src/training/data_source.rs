use crate::error::GradLabError;
use crate::tensor::Tensor;

/// An `(input, labels)` mini-batch.
pub type Batch = (Tensor, Tensor);

/// A finite, restartable sequence of batches.
///
/// Every call to [`DataSource::batches`] starts a fresh pass; exhausting the iterator
/// marks the end of an epoch.
pub trait DataSource {
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Batch, GradLabError>> + '_>;
}

impl DataSource for [Batch] {
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Batch, GradLabError>> + '_> {
        Box::new(self.iter().map(|(x, y)| Ok((x.clone(), y.clone()))))
    }
}

impl DataSource for Vec<Batch> {
    fn batches(&self) -> Box<dyn Iterator<Item = Result<Batch, GradLabError>> + '_> {
        self.as_slice().batches()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_source_is_restartable() -> Result<(), GradLabError> {
        let source: Vec<Batch> = vec![
            (Tensor::new(vec![1.0], vec![1, 1])?, Tensor::new(vec![0.0], vec![1])?),
            (Tensor::new(vec![2.0], vec![1, 1])?, Tensor::new(vec![1.0], vec![1])?),
        ];
        assert_eq!(source.batches().count(), 2);
        let firsts: Vec<f32> = source
            .batches()
            .map(|b| b.map(|(x, _)| x.to_vec()[0]))
            .collect::<Result<_, _>>()?;
        assert_eq!(firsts, vec![1.0, 2.0]);
        Ok(())
    }
}
