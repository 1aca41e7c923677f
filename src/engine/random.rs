use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices for random-mode playback.
pub trait IndexSource {
    /// Returns an index in `[0, len)`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`IndexSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngIndexSource<R: Rng = StdRng> {
    rng: R,
}

impl RngIndexSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> IndexSource for RngIndexSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
