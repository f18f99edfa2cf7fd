//! Mission lifecycle.
//!
//! Validated mission creation plus the per-turn phase state machine that
//! carries missions through travel, execution, combat, and return.

pub mod advance;
pub mod plan;

pub use advance::{run_mission_phase, MissionPhaseOutcome};
pub use plan::{plan_mission, MissionPlan, PlanError};
