//! Market phase orchestration.
//!
//! Runs once per turn: clears last turn's transient effects, resolves each
//! sector's market, evaluates cross-sector trade over all active links from
//! one pre-trade snapshot, re-derives final shortages from post-trade flows,
//! applies attribute modifiers, and emits notifications.

use std::collections::BTreeMap;

use super::effects;
use super::resolver::{resolve_sector, ExportGrant, MarketEntry, Shortage};
use super::trade::{trade_between, SectorFlows};
use super::FlowProvider;
use crate::state::{
    AttributeModifier, ColonyId, ColonySummary, EntityRef, ModifierSource, Notification,
    Resource, SectorId, SectorSummary, Severity, SimState, TradeFlow, ALL_RESOURCES,
};

/// The result of one market phase: the new state plus the turn's first-class
/// market records and notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketPhaseOutcome {
    pub state: SimState,
    /// Final shortages, derived from post-trade flows.
    pub shortages: Vec<Shortage>,
    /// Export grants from intra-sector resolution.
    pub exports: Vec<ExportGrant>,
    pub notifications: Vec<Notification>,
}

/// Runs the market phase over an immutable snapshot.
pub fn run_market_phase(state: &SimState, provider: &dyn FlowProvider) -> MarketPhaseOutcome {
    let mut next = state.clone();
    let turn = next.turn;

    // Last turn's transient effects never accumulate.
    for colony in next.colonies.values_mut() {
        colony.market_modifiers.clear();
    }

    // Raw flows per colony, grouped by sector in ascending colony-id order.
    let mut by_sector: BTreeMap<SectorId, Vec<MarketEntry>> = BTreeMap::new();
    for colony in next.colonies.values() {
        let mut summary = provider.compute_flow(colony);
        // Providers must hand over pre-market defaults; enforce them.
        summary.reset_allocation();
        by_sector.entry(colony.sector).or_default().push(MarketEntry {
            colony: colony.id,
            dynamism: colony.dynamism(),
            summary,
        });
    }

    // Intra-sector resolution.
    let mut exports: Vec<ExportGrant> = Vec::new();
    let mut summaries: BTreeMap<SectorId, SectorSummary> = BTreeMap::new();
    let mut snapshot: BTreeMap<SectorId, SectorFlows> = BTreeMap::new();
    for (&sector, entries) in &by_sector {
        let market = resolve_sector(entries);
        exports.extend(market.exports);
        summaries.insert(sector, market.summary);
        let resolved = entries
            .iter()
            .map(|e| MarketEntry {
                colony: e.colony,
                dynamism: e.dynamism,
                summary: market.flows[&e.colony].clone(),
            })
            .collect();
        snapshot.insert(sector, SectorFlows { sector, entries: resolved });
    }

    // Pre-trade flows per colony; final flows start from them.
    let pre_trade: BTreeMap<ColonyId, ColonySummary> = snapshot
        .values()
        .flat_map(|s| s.entries.iter().map(|e| (e.colony, e.summary.clone())))
        .collect();
    let mut final_flows = pre_trade.clone();

    // Both directions of every active link, all from the same pre-trade
    // snapshot. A sector importing over several links accumulates each
    // pass's imported delta.
    let mut sector_trade: BTreeMap<SectorId, Vec<TradeFlow>> = BTreeMap::new();
    for link in &next.trade_links {
        let (a, b) = match (snapshot.get(&link.a), snapshot.get(&link.b)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        for pass in [trade_between(a, b), trade_between(b, a)] {
            for (&colony, passed) in &pass.importer_flows {
                let snap = &pre_trade[&colony];
                if let Some(merged) = final_flows.get_mut(&colony) {
                    for resource in ALL_RESOURCES {
                        let delta =
                            passed.get(resource).imported - snap.get(resource).imported;
                        merged.get_mut(resource).imported += delta;
                    }
                }
            }
            for flow in pass.trade_flows {
                sector_trade.entry(flow.from).or_default().push(flow);
                sector_trade.entry(flow.to).or_default().push(flow);
            }
        }
    }

    // Final shortages come from post-trade flows: a link can clear what
    // intra-sector allocation could not.
    let mut shortages = Vec::new();
    for (&colony, summary) in final_flows.iter_mut() {
        for resource in ALL_RESOURCES {
            let flow = summary.get_mut(resource);
            let deficit = flow.unmet();
            flow.in_shortage = deficit > 0;
            if deficit > 0 {
                shortages.push(Shortage { colony, resource, deficit });
            }
        }
    }

    // Apply the fixed effect tables as fresh transient modifiers.
    for shortage in &shortages {
        if let Some(colony) = next.colonies.get_mut(&shortage.colony) {
            colony.market_modifiers.push(effects::shortage_malus(shortage.resource));
        }
    }
    for grant in &exports {
        if let Some(colony) = next.colonies.get_mut(&grant.colony) {
            colony.market_modifiers.push(AttributeModifier {
                attribute: grant.attribute,
                amount: grant.amount,
                source: ModifierSource::Export(grant.resource),
            });
        }
    }

    // Persist the turn's summaries and trade records.
    for (colony_id, summary) in &final_flows {
        if let Some(colony) = next.colonies.get_mut(colony_id) {
            colony.market = summary.clone();
        }
    }
    for (sector_id, sector) in next.sectors.iter_mut() {
        sector.summary = summaries.remove(sector_id).unwrap_or_default();
        sector.trade_flows = sector_trade.remove(sector_id).unwrap_or_default();
    }

    let notifications = shortage_notifications(&next, turn, &shortages);

    MarketPhaseOutcome { state: next, shortages, exports, notifications }
}

/// One notification per colony that ended the turn short of anything, not
/// one per resource. Food elevates the severity.
fn shortage_notifications(
    state: &SimState,
    turn: u32,
    shortages: &[Shortage],
) -> Vec<Notification> {
    let mut by_colony: BTreeMap<ColonyId, Vec<&Shortage>> = BTreeMap::new();
    for shortage in shortages {
        by_colony.entry(shortage.colony).or_default().push(shortage);
    }

    let mut notifications = Vec::new();
    for (colony_id, entries) in by_colony {
        let colony = match state.colonies.get(&colony_id) {
            Some(c) => c,
            None => continue,
        };
        let severity = if entries.iter().any(|s| s.resource == Resource::Food) {
            Severity::Critical
        } else {
            Severity::Warning
        };
        let listing: Vec<String> = entries
            .iter()
            .map(|s| format!("{} ({})", s.resource.label(), s.deficit))
            .collect();
        notifications.push(Notification {
            turn,
            severity,
            title: format!("Shortages on {}", colony.name),
            description: format!("Unmet demand for {}.", listing.join(", ")),
            related: vec![EntityRef::Colony(colony_id), EntityRef::Sector(colony.sector)],
        });
    }
    notifications
}
