//! Uniform random scalars for lane generation

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Small wrapper around a seeded PCG stream
#[derive(Debug, Clone)]
pub struct UnitRng {
    seed: u64,
    rng: Pcg32,
}

impl UnitRng {
    /// Reproducible stream (tests, replays)
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the wall clock, once per process
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        log::debug!("Seeding lane RNG with {seed}");
        Self::seeded(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform scalar in [0, 1)
    pub fn uniform_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}
