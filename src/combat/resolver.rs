//! Combat resolution.
//!
//! A single randomized comparison decides the whole encounter, then each
//! ship independently samples a condition-loss fraction. There are no
//! per-round exchanges, targeting, or retreat.

use super::rng::RollSource;
use crate::state::{
    CombatOutcome, CombatResult, ExperienceTier, MissionKind, Ship, ShipOutcome,
};

/// Outcome-roll variance bounds applied to the effective fight score.
pub const VARIANCE_MIN: f64 = 0.85;
pub const VARIANCE_MAX: f64 = 1.15;

/// Condition-loss fraction bounds for the winning side.
pub const WINNER_LOSS_MIN: f64 = 0.05;
pub const WINNER_LOSS_MAX: f64 = 0.20;

/// Condition-loss fraction bounds for the losing side.
pub const LOSER_LOSS_MIN: f64 = 0.30;
pub const LOSER_LOSS_MAX: f64 = 0.60;

/// Difficulty of an encounter: mission-kind base scaled by sector threat.
pub fn encounter_difficulty(kind: MissionKind, threat: f64) -> f64 {
    kind.base_difficulty() * threat
}

fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + (hi - lo) * t
}

/// Resolves one encounter between a task force and a difficulty value.
///
/// Victory iff `floor(sum(fight) * tier modifier) * variance > difficulty`,
/// with variance drawn once from `[0.85, 1.15]`. Each ship then draws its
/// own loss fraction (`[0.05, 0.20]` for winners, `[0.30, 0.60]` for
/// losers) and its new condition is `round(c - c * f)`, clamped at zero.
/// A ship at condition zero is flagged destroyed.
pub fn resolve_combat(
    ships: &[&Ship],
    tier: ExperienceTier,
    difficulty: f64,
    rolls: &mut dyn RollSource,
    turn: u32,
) -> CombatResult {
    let raw: i64 = ships.iter().map(|s| s.fight_score).sum();
    let effective = (raw as f64 * tier.fight_modifier()).floor();
    let variance = lerp(VARIANCE_MIN, VARIANCE_MAX, rolls.roll());

    let outcome = if effective * variance > difficulty {
        CombatOutcome::Victory
    } else {
        CombatOutcome::Defeat
    };

    let (loss_min, loss_max) = match outcome {
        CombatOutcome::Victory => (WINNER_LOSS_MIN, WINNER_LOSS_MAX),
        CombatOutcome::Defeat => (LOSER_LOSS_MIN, LOSER_LOSS_MAX),
    };

    let mut ship_outcomes = Vec::with_capacity(ships.len());
    for ship in ships {
        let fraction = lerp(loss_min, loss_max, rolls.roll());
        let before = ship.condition;
        let after = (before as f64 - before as f64 * fraction).round() as i32;
        let after = after.max(0);
        ship_outcomes.push(ShipOutcome {
            ship: ship.id,
            condition_before: before,
            condition_after: after,
            destroyed: after == 0,
        });
    }

    let narrative = narrate(outcome, &ship_outcomes);
    CombatResult { outcome, ship_outcomes, narrative, turn }
}

fn narrate(outcome: CombatOutcome, ship_outcomes: &[ShipOutcome]) -> String {
    let lost = ship_outcomes.iter().filter(|o| o.destroyed).count();
    let total = ship_outcomes.len();
    let fate = match outcome {
        CombatOutcome::Victory => "won the engagement",
        CombatOutcome::Defeat => "was driven off",
    };
    match lost {
        0 => format!("The task force of {} ships {} without losses.", total, fate),
        _ => format!(
            "The task force of {} ships {}; {} of {} ships were lost.",
            total, fate, lost, total
        ),
    }
}
