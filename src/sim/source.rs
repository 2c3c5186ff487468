//! Injected sources of non-determinism
//!
//! The simulation never reads ambient randomness or clocks. Every call that
//! needs a random number or a fresh id receives a source explicitly, so a
//! tick is reproducible from its inputs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::FIRST_SPAWNED_ID;

/// Uniform random numbers in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Collision-free integer ids
pub trait IdSource {
    fn next_id(&mut self) -> u64;

    /// Reserve `count` consecutive ids and return the first one
    ///
    /// The source never hands out any id in `base..base + count` again.
    fn reserve(&mut self, count: u64) -> u64 {
        let base = self.next_id();
        for _ in 1..count {
            self.next_id();
        }
        base
    }
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

impl<F: FnMut() -> u64> IdSource for F {
    fn next_id(&mut self) -> u64 {
        self()
    }
}

/// Seeded PCG random source for reproducible runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Strictly increasing ids starting at a given value
///
/// The default start sits past every starting enemy name (`Jason0` up to
/// `Jason{MAX_INITIAL_ENEMIES - 1}`), so spawned names never repeat them.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(FIRST_SPAWNED_ID)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }

    fn reserve(&mut self, count: u64) -> u64 {
        let base = self.next;
        self.next = self.next.wrapping_add(count.max(1));
        base
    }
}
