//! Turn sequencing.
//!
//! Runs the two resolution phases this core owns (market, then missions)
//! over one snapshot, and exposes a serializable per-turn record for replay
//! logs. Callers own persistence of both the state and the records.

use serde::Serialize;

use crate::combat::RollSource;
use crate::market::{run_market_phase, ExportGrant, FlowProvider, Shortage};
use crate::missions::run_mission_phase;
use crate::state::{Notification, SimState};

/// The result of advancing the simulation by one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub state: SimState,
    pub notifications: Vec<Notification>,
    pub shortages: Vec<Shortage>,
    pub exports: Vec<ExportGrant>,
}

/// One JSON-serializable line per resolved turn.
#[derive(Serialize)]
struct TurnRecord<'a> {
    turn: u32,
    shortages: &'a [Shortage],
    exports: &'a [ExportGrant],
    notifications: &'a [Notification],
}

impl TurnResult {
    /// Serializes this turn's record as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&TurnRecord {
            turn: self.state.turn,
            shortages: &self.shortages,
            exports: &self.exports,
            notifications: &self.notifications,
        })
    }
}

/// Advances the turn counter, runs the market phase, then the mission
/// phase. The input snapshot is never mutated.
pub fn run_turn(
    state: &SimState,
    provider: &dyn FlowProvider,
    rolls: &mut dyn RollSource,
) -> TurnResult {
    let mut next = state.clone();
    next.turn += 1;

    let market = run_market_phase(&next, provider);
    let missions = run_mission_phase(&market.state, rolls);

    let mut notifications = market.notifications;
    notifications.extend(missions.notifications);

    TurnResult {
        state: missions.state,
        notifications,
        shortages: market.shortages,
        exports: market.exports,
    }
}
