//! The whole-state snapshot passed into and out of every resolver.
//!
//! The core holds no ambient mutable state: each phase consumes a snapshot
//! and returns a new one. `BTreeMap`s give deterministic ascending-id
//! iteration, which is what pins priority-tie ordering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::colony::{Colony, ColonyId};
use super::fleet::{Captain, CaptainId, Ship, ShipId};
use super::mission::{Mission, MissionId};
use super::sector::{Sector, SectorId, TradeLink};

/// Complete simulation state at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub turn: u32,
    pub sectors: BTreeMap<SectorId, Sector>,
    pub colonies: BTreeMap<ColonyId, Colony>,
    pub ships: BTreeMap<ShipId, Ship>,
    pub captains: BTreeMap<CaptainId, Captain>,
    pub missions: BTreeMap<MissionId, Mission>,
    /// Currently active trade links, supplied by the surrounding layer.
    pub trade_links: Vec<TradeLink>,
}

impl SimState {
    /// Creates an empty state at turn zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sector, keyed by its id.
    pub fn add_sector(&mut self, sector: Sector) {
        self.sectors.insert(sector.id, sector);
    }

    /// Adds a colony, keyed by its id.
    pub fn add_colony(&mut self, colony: Colony) {
        self.colonies.insert(colony.id, colony);
    }

    /// Adds a ship, keyed by its id.
    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.insert(ship.id, ship);
    }

    /// Adds a captain, keyed by its id.
    pub fn add_captain(&mut self, captain: Captain) {
        self.captains.insert(captain.id, captain);
    }

    /// Colonies belonging to a sector, in ascending id order.
    pub fn colonies_in_sector(&self, sector: SectorId) -> Vec<&Colony> {
        self.colonies
            .values()
            .filter(|c| c.sector == sector)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::colony::AttributeSet;

    #[test]
    fn empty_state() {
        let state = SimState::new();
        assert_eq!(state.turn, 0);
        assert!(state.sectors.is_empty());
        assert!(state.colonies.is_empty());
        assert!(state.trade_links.is_empty());
    }

    #[test]
    fn colonies_in_sector_filters_and_orders() {
        let mut state = SimState::new();
        state.add_sector(Sector::new(SectorId(1), "Core", 1.0));
        state.add_sector(Sector::new(SectorId(2), "Rim", 1.0));
        state.add_colony(Colony::new(ColonyId(3), "C", SectorId(1), AttributeSet::new()));
        state.add_colony(Colony::new(ColonyId(1), "A", SectorId(1), AttributeSet::new()));
        state.add_colony(Colony::new(ColonyId(2), "B", SectorId(2), AttributeSet::new()));

        let in_core: Vec<u32> = state
            .colonies_in_sector(SectorId(1))
            .iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(in_core, vec![1, 3]);
    }
}
