use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snake::RandomSource;

/// Seeded generator; the seed is kept so a session can be reproduced.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn uniform_int(&mut self, max_inclusive: u32) -> u32 {
        self.rng.random_range(0..=max_inclusive)
    }
}
