use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset indices.
///
/// `iter` is called once per epoch; each call starts a fresh ordering.
pub trait Sampler: Debug + Send + Sync {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices `iter(dataset_len)` yields.
    fn len(&self, dataset_len: usize) -> usize;
}
