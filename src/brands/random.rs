//! Injectable randomness for brand rotation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of candidate indices.
pub trait RandomSource {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Operating-system entropy via `getrandom`.
///
/// Falls back to index 0 if the entropy source is unavailable; rotation is
/// cosmetic, so this is not worth surfacing as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn pick(&mut self, len: usize) -> usize {
        let mut bytes = [0u8; 8];
        match getrandom::fill(&mut bytes) {
            Ok(()) => (u64::from_le_bytes(bytes) % len as u64) as usize,
            Err(e) => {
                tracing::debug!(error = %e, "entropy source unavailable, using first candidate");
                0
            }
        }
    }
}

/// Deterministic generator for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always picks the same index (modulo the candidate count).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPick(pub usize);

impl RandomSource for FixedPick {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}
