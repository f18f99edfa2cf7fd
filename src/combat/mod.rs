//! Combat resolution.
//!
//! Resolves a task force against an encounter difficulty with a single
//! randomized comparison, using an injected roll source for full
//! reproducibility.

pub mod resolver;
pub mod rng;

pub use resolver::{
    encounter_difficulty, resolve_combat, LOSER_LOSS_MAX, LOSER_LOSS_MIN, VARIANCE_MAX,
    VARIANCE_MIN, WINNER_LOSS_MAX, WINNER_LOSS_MIN,
};
pub use rng::{EntropyRolls, RollSource, ScriptedRolls};
