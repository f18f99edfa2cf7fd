//! Ships and their captains.
//!
//! Condition is an integer in 0..=100; a ship whose condition reaches 0 is
//! destroyed and removed from the live ship map by the resolver that zeroed
//! it. Captains gain experience tiers at fixed completed-mission thresholds.

use serde::{Deserialize, Serialize};

/// Unique identifier for a ship.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShipId(pub u32);

/// Unique identifier for a captain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CaptainId(pub u32);

/// Where a ship currently is, from the mission system's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipStatus {
    Stationed,
    OnMission,
}

/// Maximum ship condition.
pub const MAX_CONDITION: i32 = 100;

/// A ship that can be assigned to mission task forces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub name: String,
    /// Health-like state in 0..=100. Zero means destroyed.
    pub condition: i32,
    pub fight_score: i64,
    pub status: ShipStatus,
    pub missions_completed: u32,
}

impl Ship {
    /// Creates a stationed ship at full condition.
    pub fn new(id: ShipId, name: &str, fight_score: i64) -> Self {
        Ship {
            id,
            name: name.to_string(),
            condition: MAX_CONDITION,
            fight_score,
            status: ShipStatus::Stationed,
            missions_completed: 0,
        }
    }

    /// Sets condition, clamped into 0..=100.
    pub fn set_condition(&mut self, condition: i32) {
        self.condition = condition.clamp(0, MAX_CONDITION);
    }
}

/// A captain's experience tier. Multiplies the task force's effective fight
/// score; advances at 2, 5 and 10 completed missions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceTier {
    Rookie,
    Seasoned,
    Veteran,
    Elite,
}

impl ExperienceTier {
    /// Fight-score multiplier for this tier.
    pub const fn fight_modifier(self) -> f64 {
        match self {
            ExperienceTier::Rookie => 0.8,
            ExperienceTier::Seasoned => 1.0,
            ExperienceTier::Veteran => 1.1,
            ExperienceTier::Elite => 1.2,
        }
    }

    /// Tier for a given completed-mission count.
    pub const fn from_missions(completed: u32) -> Self {
        match completed {
            0..=1 => ExperienceTier::Rookie,
            2..=4 => ExperienceTier::Seasoned,
            5..=9 => ExperienceTier::Veteran,
            _ => ExperienceTier::Elite,
        }
    }
}

/// A captain commanding mission task forces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Captain {
    pub id: CaptainId,
    pub name: String,
    pub tier: ExperienceTier,
    pub missions_completed: u32,
}

impl Captain {
    /// Creates a rookie captain with no completed missions.
    pub fn new(id: CaptainId, name: &str) -> Self {
        Captain {
            id,
            name: name.to_string(),
            tier: ExperienceTier::Rookie,
            missions_completed: 0,
        }
    }

    /// Records one more completed mission and recomputes the tier.
    pub fn record_completed_mission(&mut self) {
        self.missions_completed += 1;
        self.tier = ExperienceTier::from_missions(self.missions_completed);
    }
}
