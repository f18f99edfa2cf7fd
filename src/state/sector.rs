//! Sectors, trade links, and per-turn trade records.
//!
//! A sector groups the colonies that share one allocation pool. Sectors also
//! carry the turn's aggregate totals and trade-flow records, replaced whole
//! every market phase.

use serde::{Deserialize, Serialize};

use super::resource::{Resource, ALL_RESOURCES, RESOURCE_COUNT};

/// Unique identifier for a sector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SectorId(pub u32);

/// Aggregate production/consumption totals for one resource across a sector.
/// Pure sums, independent of allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTotals {
    pub produced: i64,
    pub consumed: i64,
    pub net: i64,
}

/// Per-resource totals for a whole sector, indexed by `Resource as usize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSummary {
    totals: [ResourceTotals; RESOURCE_COUNT],
}

impl SectorSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, resource: Resource) -> &ResourceTotals {
        &self.totals[resource as usize]
    }

    pub fn get_mut(&mut self, resource: Resource) -> &mut ResourceTotals {
        &mut self.totals[resource as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Resource, &ResourceTotals)> {
        self.totals.iter().enumerate().map(|(i, t)| (ALL_RESOURCES[i], t))
    }
}

/// One resource actually transferred between two sectors in one direction.
///
/// Absent (not a zero record) when nothing moved. `surplus_available` is the
/// exporter's residual net surplus before the efficiency cut, `transferred`
/// the post-efficiency amount offered, `received` the amount importers
/// actually claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFlow {
    pub from: SectorId,
    pub to: SectorId,
    pub resource: Resource,
    pub surplus_available: i64,
    pub transferred: i64,
    pub received: i64,
}

/// An active bidirectional trade link between two sectors.
///
/// Inactive or cancelled links are simply absent from the snapshot's link
/// set; nothing downstream special-cases them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLink {
    pub a: SectorId,
    pub b: SectorId,
}

/// A sector: a region of space holding colonies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
    /// Multiplies mission base difficulty for encounters in this sector.
    pub threat: f64,
    /// Totals from the most recent market phase.
    pub summary: SectorSummary,
    /// Trade flows touching this sector (either direction) from the most
    /// recent market phase.
    pub trade_flows: Vec<TradeFlow>,
}

impl Sector {
    pub fn new(id: SectorId, name: &str, threat: f64) -> Self {
        Sector {
            id,
            name: name.to_string(),
            threat,
            summary: SectorSummary::new(),
            trade_flows: Vec::new(),
        }
    }
}
