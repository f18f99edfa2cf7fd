//! Intra-sector market resolution.
//!
//! Pools each tradeable resource's positive surpluses and distributes the
//! pool to deficit colonies in priority order, then detects residual
//! shortages and successful exports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::effects;
use crate::state::{
    Attribute, ColonyId, ColonySummary, Resource, SectorSummary, ALL_RESOURCES,
};

/// One colony's unmet resource need after all allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortage {
    pub colony: ColonyId,
    pub resource: Resource,
    pub deficit: i64,
}

/// A reward for a colony whose contributed surplus was actually drawn down
/// by another colony's allocation. Producing surplus nobody draws earns
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportGrant {
    pub colony: ColonyId,
    pub resource: Resource,
    pub attribute: Attribute,
    pub amount: i64,
}

/// Resolver input: one colony's priority and raw flows.
///
/// Callers enumerate colonies in ascending id order; equal-dynamism ties
/// keep that order through the stable priority sort.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketEntry {
    pub colony: ColonyId,
    pub dynamism: i64,
    pub summary: ColonySummary,
}

/// The outcome of resolving one sector's market.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorMarket {
    /// Post-allocation flows per colony.
    pub flows: BTreeMap<ColonyId, ColonySummary>,
    /// Unmet needs after intra-sector allocation.
    pub shortages: Vec<Shortage>,
    /// Colonies whose surplus was actually consumed from the pool.
    pub exports: Vec<ExportGrant>,
    /// Aggregate totals, independent of allocation.
    pub summary: SectorSummary,
}

/// Indices of `entries` in allocation order: descending dynamism, ties
/// keeping entry order. Shared with the cross-sector engine so both apply
/// the identical priority rule.
pub(crate) fn priority_order(dynamism: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..dynamism.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(dynamism[i]));
    order
}

/// Resolves one sector's market from its colonies' raw flows.
///
/// Per tradeable resource: positive surpluses form a shared pool, deficit
/// colonies draw `min(deficit, remaining)` in priority order, and what they
/// draw is recorded as `imported`. Transport capacity never pools; a deficit
/// in it is an immediate shortage. Zero colonies yield empty outputs and
/// zero totals.
pub fn resolve_sector(entries: &[MarketEntry]) -> SectorMarket {
    let mut flows: Vec<ColonySummary> = entries.iter().map(|e| e.summary.clone()).collect();
    let dynamism: Vec<i64> = entries.iter().map(|e| e.dynamism).collect();
    let order = priority_order(&dynamism);

    let mut exports = Vec::new();
    for resource in ALL_RESOURCES {
        if !resource.is_tradeable() {
            continue;
        }

        let mut pool: i64 = flows
            .iter()
            .map(|f| f.get(resource).surplus().max(0))
            .sum();
        let pool_start = pool;

        for &i in &order {
            if pool == 0 {
                break;
            }
            let flow = flows[i].get_mut(resource);
            let deficit = -flow.surplus();
            if deficit > 0 {
                let draw = deficit.min(pool);
                flow.imported += draw;
                pool -= draw;
            }
        }

        // Exports are earned only when somebody actually drew from the pool.
        if pool < pool_start {
            for (i, entry) in entries.iter().enumerate() {
                if flows[i].get(resource).surplus() > 0 {
                    let bonus = effects::export_bonus(resource);
                    exports.push(ExportGrant {
                        colony: entry.colony,
                        resource,
                        attribute: bonus.attribute,
                        amount: bonus.amount,
                    });
                }
            }
        }
    }

    let shortages = mark_shortages(entries, &mut flows);
    let summary = summarize(&flows);

    SectorMarket {
        flows: entries
            .iter()
            .zip(flows)
            .map(|(e, f)| (e.colony, f))
            .collect(),
        shortages,
        exports,
        summary,
    }
}

/// Sets `in_shortage` on every flow and collects the shortage records.
/// Applies to all resources, transport capacity included.
pub(crate) fn mark_shortages(
    entries: &[MarketEntry],
    flows: &mut [ColonySummary],
) -> Vec<Shortage> {
    let mut shortages = Vec::new();
    for (entry, summary) in entries.iter().zip(flows.iter_mut()) {
        for resource in ALL_RESOURCES {
            let flow = summary.get_mut(resource);
            let deficit = flow.unmet();
            flow.in_shortage = deficit > 0;
            if deficit > 0 {
                shortages.push(Shortage {
                    colony: entry.colony,
                    resource,
                    deficit,
                });
            }
        }
    }
    shortages
}

/// Aggregate totals across the sector. Pure sums, independent of allocation.
pub(crate) fn summarize(flows: &[ColonySummary]) -> SectorSummary {
    let mut summary = SectorSummary::new();
    for colony in flows {
        for (resource, flow) in colony.iter() {
            let totals = summary.get_mut(resource);
            totals.produced += flow.produced;
            totals.consumed += flow.consumed;
            totals.net += flow.surplus();
        }
    }
    summary
}
