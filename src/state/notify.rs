//! Notification records returned to the consuming layer.
//!
//! The core never formats or stores notifications beyond these records; the
//! UI/log layer owns presentation.

use serde::{Deserialize, Serialize};

use super::colony::ColonyId;
use super::fleet::{CaptainId, ShipId};
use super::mission::MissionId;
use super::sector::SectorId;

/// How urgently the consuming layer should surface a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Positive,
    Warning,
    Critical,
}

/// A typed reference to the entity a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRef {
    Colony(ColonyId),
    Sector(SectorId),
    Ship(ShipId),
    Captain(CaptainId),
    Mission(MissionId),
}

/// One notification emitted by a turn phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub turn: u32,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub related: Vec<EntityRef>,
}
