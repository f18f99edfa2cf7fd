//! Simulation data model.
//!
//! Contains the core data structures for resources, colonies, sectors,
//! ships, captains, missions, notifications, and the whole-state snapshot.

pub mod colony;
pub mod fleet;
pub mod mission;
pub mod notify;
pub mod resource;
pub mod sector;
pub mod snapshot;

pub use colony::{
    Attribute, AttributeModifier, AttributeSet, Colony, ColonyId, Deposit, ModifierSource,
    ALL_ATTRIBUTES, ATTRIBUTE_COUNT,
};
pub use fleet::{Captain, CaptainId, ExperienceTier, Ship, ShipId, ShipStatus, MAX_CONDITION};
pub use mission::{
    CombatOutcome, CombatResult, Mission, MissionId, MissionKind, MissionOutcome, MissionPhase,
    MissionReport, ShipOutcome, TaskForce,
};
pub use notify::{EntityRef, Notification, Severity};
pub use resource::{ColonySummary, Resource, ResourceFlow, ALL_RESOURCES, RESOURCE_COUNT};
pub use sector::{
    ResourceTotals, Sector, SectorId, SectorSummary, TradeFlow, TradeLink,
};
pub use snapshot::SimState;
