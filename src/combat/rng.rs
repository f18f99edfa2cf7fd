//! Injectable randomness for combat resolution.
//!
//! Randomness is a capability the caller supplies, never a global: the
//! production source wraps a small fast PRNG, and a scripted source replays
//! a fixed sequence for deterministic tests and replays.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A supplier of uniform samples in `[0, 1)`: the sole non-determinism in
/// the core.
pub trait RollSource {
    fn roll(&mut self) -> f64;
}

/// Production roll source backed by `SmallRng`.
pub struct EntropyRolls(SmallRng);

impl EntropyRolls {
    /// Seeds from system entropy.
    pub fn from_entropy() -> Self {
        EntropyRolls(SmallRng::from_entropy())
    }

    /// Seeds deterministically, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        EntropyRolls(SmallRng::seed_from_u64(seed))
    }
}

impl RollSource for EntropyRolls {
    fn roll(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted.
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedRolls {
    /// Panics if `rolls` is empty.
    pub fn new(rolls: &[f64]) -> Self {
        assert!(!rolls.is_empty(), "scripted roll sequence must not be empty");
        ScriptedRolls { rolls: rolls.to_vec(), next: 0 }
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> f64 {
        let sample = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        sample
    }
}
