use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Visits a fresh random permutation of the indices every epoch.
///
/// An unseeded sampler draws from the thread RNG. A seeded one owns a `StdRng`, so a
/// run is reproducible while successive epochs still see different orders.
#[derive(Debug)]
pub struct RandomSampler {
    rng: Option<Mutex<StdRng>>,
}

impl RandomSampler {
    pub fn new() -> Self {
        RandomSampler { rng: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomSampler {
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn shuffle(&self, indices: &mut [usize]) {
        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| {
                    log::warn!("RandomSampler RNG mutex poisoned, recovering");
                    poisoned.into_inner()
                });
                indices.shuffle(&mut *rng);
            }
            None => indices.shuffle(&mut rand::thread_rng()),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        self.shuffle(&mut indices);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
