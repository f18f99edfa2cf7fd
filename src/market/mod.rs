//! Market resolution.
//!
//! Allocates scarce resources among colonies under priority rules: an
//! intra-sector resolver pools and distributes surpluses, a cross-sector
//! engine shares residual surplus over trade links, and the phase
//! orchestrator ties both together once per turn.

pub mod effects;
pub mod phase;
pub mod resolver;
pub mod trade;

use crate::state::{Colony, ColonySummary};

/// External contract computing a colony's raw per-resource flows from its
/// deposits.
///
/// Implementations must be total and deterministic, and must return
/// pre-market defaults: nothing imported, nothing in shortage. The
/// orchestrator enforces the defaults defensively either way.
pub trait FlowProvider {
    fn compute_flow(&self, colony: &Colony) -> ColonySummary;
}

pub use phase::{run_market_phase, MarketPhaseOutcome};
pub use resolver::{resolve_sector, ExportGrant, MarketEntry, SectorMarket, Shortage};
pub use trade::{trade_between, SectorFlows, TradePass, TRADE_EFFICIENCY_PERCENT};
