use gradlab_core::GradLabError;

/// Indexed access to individual samples.
///
/// `Item` is the type of a single sample, typically a `(features, label)` pair of
/// tensors.
pub trait Dataset {
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, GradLabError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
