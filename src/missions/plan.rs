//! Validated mission creation.
//!
//! Missions are created by external actions; this boundary checks the
//! action against the snapshot before the state machine ever sees it.

use crate::state::{
    CaptainId, Mission, MissionId, MissionKind, MissionPhase, SectorId, ShipId, ShipStatus,
    SimState, TaskForce,
};

/// Why a mission plan was rejected.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("unknown target sector {0:?}")]
    UnknownSector(SectorId),

    #[error("unknown captain {0:?}")]
    UnknownCaptain(CaptainId),

    #[error("unknown ship {0:?}")]
    UnknownShip(ShipId),

    #[error("ship {0:?} is not stationed and cannot be assigned")]
    ShipUnavailable(ShipId),

    #[error("a mission needs at least one ship")]
    EmptyTaskForce,
}

/// An external request to launch a mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionPlan {
    pub kind: MissionKind,
    pub target: SectorId,
    pub ships: Vec<ShipId>,
    pub captain: CaptainId,
    pub travel_turns: u32,
    pub execution_turns: u32,
    pub return_turns: u32,
}

/// Validates a plan and adds the mission to the state.
///
/// Every ship must exist and be stationed; the captain and target sector
/// must exist. On success the ships flip to `OnMission` and the mission
/// starts in Travel at the current turn.
pub fn plan_mission(state: &mut SimState, plan: MissionPlan) -> Result<MissionId, PlanError> {
    if plan.ships.is_empty() {
        return Err(PlanError::EmptyTaskForce);
    }
    if !state.sectors.contains_key(&plan.target) {
        return Err(PlanError::UnknownSector(plan.target));
    }
    if !state.captains.contains_key(&plan.captain) {
        return Err(PlanError::UnknownCaptain(plan.captain));
    }
    for ship_id in &plan.ships {
        match state.ships.get(ship_id) {
            None => return Err(PlanError::UnknownShip(*ship_id)),
            Some(ship) if ship.status != ShipStatus::Stationed => {
                return Err(PlanError::ShipUnavailable(*ship_id))
            }
            Some(_) => {}
        }
    }

    let id = MissionId(state.missions.keys().map(|m| m.0).max().unwrap_or(0) + 1);
    for ship_id in &plan.ships {
        if let Some(ship) = state.ships.get_mut(ship_id) {
            ship.status = ShipStatus::OnMission;
        }
    }
    state.missions.insert(
        id,
        Mission {
            id,
            kind: plan.kind,
            phase: MissionPhase::Travel,
            target: plan.target,
            task_force: TaskForce { ships: plan.ships, captain: plan.captain },
            travel_turns: plan.travel_turns,
            execution_turns: plan.execution_turns,
            return_turns: plan.return_turns,
            start_turn: state.turn,
            completed_turn: None,
            report: None,
        },
    );
    Ok(id)
}
