//! Missions, task forces, and combat/mission reports.
//!
//! A mission is created by an external action, advanced turn-by-turn by the
//! mission phase state machine, and becomes immutable once completed.

use serde::{Deserialize, Serialize};

use super::fleet::{CaptainId, ShipId};
use super::sector::SectorId;

/// Unique identifier for a mission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MissionId(pub u32);

/// What a mission sets out to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    /// Chart a sector. Never contested.
    Survey,
    /// Recover derelict material. Never contested.
    Salvage,
    /// Attack hostile installations.
    Strike,
    /// Sweep a sector for raiders.
    Patrol,
}

impl MissionKind {
    /// Returns true if execution ends in a combat encounter.
    pub const fn is_combat_capable(self) -> bool {
        matches!(self, MissionKind::Strike | MissionKind::Patrol)
    }

    /// Base encounter difficulty, before the sector threat multiplier.
    pub const fn base_difficulty(self) -> f64 {
        match self {
            MissionKind::Strike => 40.0,
            MissionKind::Patrol => 25.0,
            MissionKind::Survey | MissionKind::Salvage => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MissionKind::Survey => "survey",
            MissionKind::Salvage => "salvage",
            MissionKind::Strike => "strike",
            MissionKind::Patrol => "patrol",
        }
    }
}

/// The lifecycle stage a mission is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionPhase {
    Travel,
    Execution,
    Return,
    Completed,
}

/// The ships on a mission and the captain commanding them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForce {
    pub ships: Vec<ShipId>,
    pub captain: CaptainId,
}

/// How a mission's execution stage resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionOutcome {
    /// Every ship came through.
    Success,
    /// Some ships were destroyed, but the force survived.
    PartialSuccess,
    /// No ship survived execution.
    Missing,
}

/// Victory or defeat in a single combat encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// One ship's condition change from a combat encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipOutcome {
    pub ship: ShipId,
    pub condition_before: i32,
    pub condition_after: i32,
    pub destroyed: bool,
}

/// The resolved result of one combat encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub outcome: CombatOutcome,
    pub ship_outcomes: Vec<ShipOutcome>,
    /// Human-readable summary. Not load-bearing for logic.
    pub narrative: String,
    pub turn: u32,
}

/// The report stamped onto a mission when its execution stage resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    pub outcome: MissionOutcome,
    /// Present only for combat-capable mission kinds that fought.
    pub combat: Option<CombatResult>,
}

/// A multi-turn mission in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub kind: MissionKind,
    pub phase: MissionPhase,
    pub target: SectorId,
    pub task_force: TaskForce,
    pub travel_turns: u32,
    pub execution_turns: u32,
    pub return_turns: u32,
    pub start_turn: u32,
    /// Set when the mission reaches `Completed`; null while active.
    pub completed_turn: Option<u32>,
    /// Set when the execution stage resolves; null until then.
    pub report: Option<MissionReport>,
}
