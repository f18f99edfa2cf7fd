//! Cross-sector trade over active trade links.
//!
//! Each link is evaluated as two independent directional passes from one
//! shared pre-trade snapshot of both sectors' post-intra-sector flows, so
//! neither direction sees the other's output. The exporting sector's flows
//! are never mutated: a capped fraction of its residual surplus is made
//! available, not deducted.

use std::collections::BTreeMap;

use super::resolver::{priority_order, MarketEntry};
use crate::state::{ColonyId, ColonySummary, SectorId, TradeFlow, ALL_RESOURCES};

/// Fraction of residual surplus that survives inter-sector transfer.
pub const TRADE_EFFICIENCY_PERCENT: i64 = 50;

/// A pre-trade snapshot of one sector's post-allocation flows.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorFlows {
    pub sector: SectorId,
    /// Colonies in ascending id order, as for intra-sector resolution.
    pub entries: Vec<MarketEntry>,
}

/// The importer-side result of one directional pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TradePass {
    /// Importer flows with cross-sector imports added.
    pub importer_flows: BTreeMap<ColonyId, ColonySummary>,
    /// One record per resource actually transferred; empty otherwise.
    pub trade_flows: Vec<TradeFlow>,
}

/// Evaluates one direction of a trade link: exporter's residual surplus,
/// cut to the fixed efficiency, drawn by importer colonies in priority
/// order.
///
/// Per tradeable resource: the exporter's residual net surplus is
/// the sum of `max(0, produced - consumed + imported)` over its colonies;
/// the amount offered is `floor(residual * 0.5)`; importers draw against
/// their own residual deficits `max(0, consumed - produced - imported)`.
/// A `TradeFlow` is recorded only when something was actually received.
pub fn trade_between(exporter: &SectorFlows, importer: &SectorFlows) -> TradePass {
    let mut flows: Vec<ColonySummary> =
        importer.entries.iter().map(|e| e.summary.clone()).collect();
    let dynamism: Vec<i64> = importer.entries.iter().map(|e| e.dynamism).collect();
    let order = priority_order(&dynamism);

    let mut trade_flows = Vec::new();
    for resource in ALL_RESOURCES {
        if !resource.is_tradeable() {
            continue;
        }

        let residual: i64 = exporter
            .entries
            .iter()
            .map(|e| {
                let flow = e.summary.get(resource);
                (flow.produced - flow.consumed + flow.imported).max(0)
            })
            .sum();
        if residual <= 0 {
            continue;
        }

        let available = residual * TRADE_EFFICIENCY_PERCENT / 100;
        if available == 0 {
            continue;
        }

        let mut remaining = available;
        let mut received = 0;
        for &i in &order {
            if remaining == 0 {
                break;
            }
            let flow = flows[i].get_mut(resource);
            let deficit = flow.unmet();
            if deficit > 0 {
                let take = deficit.min(remaining);
                flow.imported += take;
                remaining -= take;
                received += take;
            }
        }

        if received > 0 {
            trade_flows.push(TradeFlow {
                from: exporter.sector,
                to: importer.sector,
                resource,
                surplus_available: residual,
                transferred: available,
                received,
            });
        }
    }

    TradePass {
        importer_flows: importer
            .entries
            .iter()
            .zip(flows)
            .map(|(e, f)| (e.colony, f))
            .collect(),
        trade_flows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Resource;

    fn entry(id: u32, dynamism: i64, summary: ColonySummary) -> MarketEntry {
        MarketEntry { colony: ColonyId(id), dynamism, summary }
    }

    fn sector(id: u32, entries: Vec<MarketEntry>) -> SectorFlows {
        SectorFlows { sector: SectorId(id), entries }
    }

    #[test]
    fn surplus_ten_deficit_four_clears_shortage() {
        // Spec worked example 1.
        let exporter = sector(1, vec![entry(1, 5, ColonySummary::new().with(Resource::Food, 12, 2))]);
        let importer = sector(2, vec![entry(2, 5, ColonySummary::new().with(Resource::Food, 0, 4))]);

        let pass = trade_between(&exporter, &importer);
        assert_eq!(pass.trade_flows.len(), 1);
        let flow = pass.trade_flows[0];
        assert_eq!(flow.surplus_available, 10);
        assert_eq!(flow.transferred, 5);
        assert_eq!(flow.received, 4);
        let got = &pass.importer_flows[&ColonyId(2)];
        assert_eq!(got.get(Resource::Food).imported, 4);
        assert_eq!(got.get(Resource::Food).unmet(), 0);
    }

    #[test]
    fn surplus_four_deficit_six_leaves_residual_shortage() {
        // Spec worked example 2.
        let exporter = sector(1, vec![entry(1, 5, ColonySummary::new().with(Resource::Food, 4, 0))]);
        let importer = sector(2, vec![entry(2, 5, ColonySummary::new().with(Resource::Food, 0, 6))]);

        let pass = trade_between(&exporter, &importer);
        let flow = pass.trade_flows[0];
        assert_eq!(flow.surplus_available, 4);
        assert_eq!(flow.transferred, 2);
        assert_eq!(flow.received, 2);
        let got = &pass.importer_flows[&ColonyId(2)];
        assert_eq!(got.get(Resource::Food).unmet(), 4);
    }

    #[test]
    fn efficiency_floor_on_odd_residual() {
        let exporter = sector(1, vec![entry(1, 5, ColonySummary::new().with(Resource::Energy, 5, 0))]);
        let importer = sector(2, vec![entry(2, 5, ColonySummary::new().with(Resource::Energy, 0, 9))]);

        let pass = trade_between(&exporter, &importer);
        assert_eq!(pass.trade_flows[0].transferred, 2);
    }

    #[test]
    fn residual_includes_prior_intra_sector_imports() {
        // The exporter colony already received 3 units intra-sector; its
        // residual is produced - consumed + imported.
        let mut summary = ColonySummary::new().with(Resource::Food, 5, 4);
        summary.get_mut(Resource::Food).imported = 3;
        let exporter = sector(1, vec![entry(1, 5, summary)]);
        let importer = sector(2, vec![entry(2, 5, ColonySummary::new().with(Resource::Food, 0, 9))]);

        let pass = trade_between(&exporter, &importer);
        let flow = pass.trade_flows[0];
        assert_eq!(flow.surplus_available, 4);
        assert_eq!(flow.transferred, 2);
    }

    #[test]
    fn no_record_when_nothing_received() {
        // Exporter has surplus but the importer has no deficit.
        let exporter = sector(1, vec![entry(1, 5, ColonySummary::new().with(Resource::Food, 9, 1))]);
        let importer = sector(2, vec![entry(2, 5, ColonySummary::new().with(Resource::Food, 4, 2))]);
        let pass = trade_between(&exporter, &importer);
        assert!(pass.trade_flows.is_empty());

        // No exporter surplus at all.
        let exporter = sector(1, vec![entry(1, 5, ColonySummary::new().with(Resource::Food, 1, 5))]);
        let importer = sector(2, vec![entry(2, 5, ColonySummary::new().with(Resource::Food, 0, 4))]);
        let pass = trade_between(&exporter, &importer);
        assert!(pass.trade_flows.is_empty());
    }

    #[test]
    fn tiny_residual_rounds_to_nothing() {
        let exporter = sector(1, vec![entry(1, 5, ColonySummary::new().with(Resource::Food, 1, 0))]);
        let importer = sector(2, vec![entry(2, 5, ColonySummary::new().with(Resource::Food, 0, 4))]);
        let pass = trade_between(&exporter, &importer);
        assert!(pass.trade_flows.is_empty());
        assert_eq!(pass.importer_flows[&ColonyId(2)].get(Resource::Food).imported, 0);
    }

    #[test]
    fn importers_draw_in_priority_order() {
        let exporter = sector(1, vec![entry(1, 5, ColonySummary::new().with(Resource::Food, 6, 0))]);
        let importer = sector(
            2,
            vec![
                entry(2, 2, ColonySummary::new().with(Resource::Food, 0, 3)),
                entry(3, 7, ColonySummary::new().with(Resource::Food, 0, 3)),
            ],
        );

        let pass = trade_between(&exporter, &importer);
        // 3 units offered; priority 7 colony is satisfied first.
        assert_eq!(pass.importer_flows[&ColonyId(3)].get(Resource::Food).imported, 3);
        assert_eq!(pass.importer_flows[&ColonyId(2)].get(Resource::Food).imported, 0);
    }

    #[test]
    fn transport_capacity_never_crosses_sectors() {
        let exporter = sector(
            1,
            vec![entry(1, 5, ColonySummary::new().with(Resource::TransportCapacity, 10, 0))],
        );
        let importer = sector(
            2,
            vec![entry(2, 5, ColonySummary::new().with(Resource::TransportCapacity, 0, 4))],
        );
        let pass = trade_between(&exporter, &importer);
        assert!(pass.trade_flows.is_empty());
    }

    #[test]
    fn both_directions_see_the_same_snapshot() {
        // A needs energy, B needs food; each exports to the other. The two
        // passes are evaluated from identical snapshots, so evaluation order
        // cannot change either result.
        let a = sector(
            1,
            vec![entry(1, 5, ColonySummary::new()
                .with(Resource::Food, 10, 2)
                .with(Resource::Energy, 0, 4))],
        );
        let b = sector(
            2,
            vec![entry(2, 5, ColonySummary::new()
                .with(Resource::Food, 0, 4)
                .with(Resource::Energy, 8, 2))],
        );

        let a_to_b = trade_between(&a, &b);
        let b_to_a = trade_between(&b, &a);

        assert_eq!(a_to_b.trade_flows[0].resource, Resource::Food);
        assert_eq!(a_to_b.trade_flows[0].received, 4);
        assert_eq!(b_to_a.trade_flows[0].resource, Resource::Energy);
        assert_eq!(b_to_a.trade_flows[0].received, 3);
    }
}
