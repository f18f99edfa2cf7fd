//! Mission phase sequencing.
//!
//! Advances each in-flight mission by one turn through its
//! Travel -> Execution -> Return -> Completed lifecycle. Each mission is
//! stepped by a tagged transition function invoked in a loop until it
//! reports no further same-turn transition, which keeps the
//! Travel->Execution arrival fallthrough and the Execution->Completed
//! all-lost path explicit and testable.

use crate::combat::{encounter_difficulty, resolve_combat, RollSource};
use crate::state::{
    EntityRef, ExperienceTier, Mission, MissionId, MissionOutcome, MissionPhase, MissionReport,
    Notification, Severity, ShipId, ShipStatus, SimState,
};

/// The result of one mission phase: the new state plus notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionPhaseOutcome {
    pub state: SimState,
    pub notifications: Vec<Notification>,
}

/// Whether a mission step ended the mission's turn or fell through into the
/// next stage within the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Done for this turn.
    Hold,
    /// A same-turn transition occurred; step again.
    Again,
}

/// Advances every non-completed mission by one turn.
pub fn run_mission_phase(state: &SimState, rolls: &mut dyn RollSource) -> MissionPhaseOutcome {
    let mut next = state.clone();
    let mut notifications = Vec::new();
    let turn = next.turn;

    let ids: Vec<MissionId> = next.missions.keys().copied().collect();
    for id in ids {
        // Completed missions are terminal: no state change, no notifications.
        if next.missions[&id].phase == MissionPhase::Completed {
            continue;
        }
        let mut mission = match next.missions.remove(&id) {
            Some(m) => m,
            None => continue,
        };
        while step_mission(&mut mission, &mut next, rolls, &mut notifications, turn)
            == Step::Again
        {}
        next.missions.insert(id, mission);
    }

    MissionPhaseOutcome { state: next, notifications }
}

/// Applies one transition to a mission and reports whether another
/// same-turn transition follows.
fn step_mission(
    mission: &mut Mission,
    state: &mut SimState,
    rolls: &mut dyn RollSource,
    notifications: &mut Vec<Notification>,
    turn: u32,
) -> Step {
    match mission.phase {
        MissionPhase::Travel => {
            if mission.travel_turns > 1 {
                mission.travel_turns -= 1;
                Step::Hold
            } else {
                // Arrival costs no turn: execution begins immediately.
                mission.travel_turns = 0;
                mission.phase = MissionPhase::Execution;
                Step::Again
            }
        }
        MissionPhase::Execution => {
            if mission.execution_turns > 1 {
                mission.execution_turns -= 1;
                Step::Hold
            } else {
                mission.execution_turns = 0;
                resolve_execution(mission, state, rolls, notifications, turn)
            }
        }
        MissionPhase::Return => {
            if mission.return_turns > 1 {
                mission.return_turns -= 1;
                Step::Hold
            } else {
                mission.return_turns = 0;
                finalize_return(mission, state, notifications, turn);
                Step::Hold
            }
        }
        MissionPhase::Completed => Step::Hold,
    }
}

/// Resolves the final execution turn: combat for combat-capable kinds,
/// ship losses, task-force recomputation, and the mission report.
fn resolve_execution(
    mission: &mut Mission,
    state: &mut SimState,
    rolls: &mut dyn RollSource,
    notifications: &mut Vec<Notification>,
    turn: u32,
) -> Step {
    let live: Vec<ShipId> = mission
        .task_force
        .ships
        .iter()
        .copied()
        .filter(|id| state.ships.contains_key(id))
        .collect();

    // A target that cannot be found degrades to a non-combat, always
    // successful execution.
    let threat = state.sectors.get(&mission.target).map(|s| s.threat);

    let combat = match threat {
        Some(threat) if mission.kind.is_combat_capable() && !live.is_empty() => {
            let tier = state
                .captains
                .get(&mission.task_force.captain)
                .map(|c| c.tier)
                .unwrap_or(ExperienceTier::Seasoned);
            let ships: Vec<&crate::state::Ship> =
                live.iter().map(|id| &state.ships[id]).collect();
            let difficulty = encounter_difficulty(mission.kind, threat);
            Some(resolve_combat(&ships, tier, difficulty, rolls, turn))
        }
        _ => None,
    };

    let mut destroyed = 0;
    if let Some(result) = &combat {
        for outcome in &result.ship_outcomes {
            if outcome.destroyed {
                destroyed += 1;
                if let Some(ship) = state.ships.remove(&outcome.ship) {
                    notifications.push(Notification {
                        turn,
                        severity: Severity::Critical,
                        title: format!("{} destroyed", ship.name),
                        description: format!(
                            "{} was lost during the {} mission.",
                            ship.name,
                            mission.kind.label()
                        ),
                        related: vec![
                            EntityRef::Ship(outcome.ship),
                            EntityRef::Mission(mission.id),
                        ],
                    });
                }
            } else if let Some(ship) = state.ships.get_mut(&outcome.ship) {
                ship.set_condition(outcome.condition_after);
            }
        }
    }

    let survivors: Vec<ShipId> = live
        .iter()
        .copied()
        .filter(|id| state.ships.contains_key(id))
        .collect();
    mission.task_force.ships = survivors.clone();

    let outcome = if survivors.is_empty() {
        MissionOutcome::Missing
    } else if destroyed > 0 {
        MissionOutcome::PartialSuccess
    } else {
        MissionOutcome::Success
    };
    mission.report = Some(MissionReport { outcome, combat });

    if survivors.is_empty() {
        // The whole force is gone: complete immediately, skipping Return.
        mission.phase = MissionPhase::Completed;
        mission.completed_turn = Some(turn);
        notifications.push(Notification {
            turn,
            severity: Severity::Critical,
            title: "Task force lost".to_string(),
            description: format!(
                "The entire {} task force was lost. No ships will return.",
                mission.kind.label()
            ),
            related: vec![EntityRef::Mission(mission.id)],
        });
        Step::Hold
    } else {
        mission.phase = MissionPhase::Return;
        Step::Hold
    }
}

/// Finishes the final return turn: stations survivors, credits ship and
/// captain mission counters, recomputes the captain's tier, and completes
/// the mission.
fn finalize_return(
    mission: &mut Mission,
    state: &mut SimState,
    notifications: &mut Vec<Notification>,
    turn: u32,
) {
    for ship_id in &mission.task_force.ships {
        if let Some(ship) = state.ships.get_mut(ship_id) {
            ship.status = ShipStatus::Stationed;
            ship.missions_completed += 1;
        }
    }
    if let Some(captain) = state.captains.get_mut(&mission.task_force.captain) {
        captain.record_completed_mission();
    }

    mission.phase = MissionPhase::Completed;
    mission.completed_turn = Some(turn);

    let succeeded = matches!(
        mission.report.as_ref().map(|r| r.outcome),
        Some(MissionOutcome::Success)
    );
    notifications.push(Notification {
        turn,
        severity: if succeeded { Severity::Positive } else { Severity::Warning },
        title: "Mission complete".to_string(),
        description: format!(
            "The {} task force has returned and stood down.",
            mission.kind.label()
        ),
        related: vec![EntityRef::Mission(mission.id)],
    });
}
