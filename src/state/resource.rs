//! Resource kinds and per-resource flow accounting.
//!
//! Every colony carries one `ResourceFlow` per resource kind per turn. Flows
//! are recomputed from scratch each market phase; nothing here persists
//! across turns.

use serde::{Deserialize, Serialize};

/// A kind of resource produced and consumed by colonies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Food,
    Energy,
    Minerals,
    ConsumerGoods,
    TransportCapacity,
}

/// Number of resource kinds.
pub const RESOURCE_COUNT: usize = 5;

/// All resource kinds, in canonical index order.
pub const ALL_RESOURCES: [Resource; RESOURCE_COUNT] = [
    Resource::Food,
    Resource::Energy,
    Resource::Minerals,
    Resource::ConsumerGoods,
    Resource::TransportCapacity,
];

impl Resource {
    /// Returns true if this resource can be pooled and traded between
    /// colonies. Transport capacity is strictly local: a deficit in it is an
    /// immediate shortage.
    pub const fn is_tradeable(self) -> bool {
        !matches!(self, Resource::TransportCapacity)
    }

    /// Human-readable label used in notifications and narratives.
    pub const fn label(self) -> &'static str {
        match self {
            Resource::Food => "food",
            Resource::Energy => "energy",
            Resource::Minerals => "minerals",
            Resource::ConsumerGoods => "consumer goods",
            Resource::TransportCapacity => "transport capacity",
        }
    }
}

/// One turn's flow of a single resource at a single colony.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFlow {
    pub produced: i64,
    pub consumed: i64,
    /// Units received from pooled allocation (intra- plus inter-sector).
    pub imported: i64,
    /// True iff unmet need remains after all allocation.
    pub in_shortage: bool,
}

impl ResourceFlow {
    /// Produced minus consumed, before any allocation. Negative is a deficit.
    pub const fn surplus(&self) -> i64 {
        self.produced - self.consumed
    }

    /// Unmet need after allocation, floored at zero.
    pub const fn unmet(&self) -> i64 {
        let need = self.consumed - self.produced - self.imported;
        if need > 0 {
            need
        } else {
            0
        }
    }
}

/// A colony's flows for every resource kind.
///
/// Indexed by `Resource as usize`; every kind is always present, zero-valued
/// if unused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColonySummary {
    flows: [ResourceFlow; RESOURCE_COUNT],
}

impl ColonySummary {
    /// Creates a summary with all flows zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used to assemble production/consumption figures.
    pub fn with(mut self, resource: Resource, produced: i64, consumed: i64) -> Self {
        let flow = &mut self.flows[resource as usize];
        flow.produced = produced;
        flow.consumed = consumed;
        self
    }

    pub fn get(&self, resource: Resource) -> &ResourceFlow {
        &self.flows[resource as usize]
    }

    pub fn get_mut(&mut self, resource: Resource) -> &mut ResourceFlow {
        &mut self.flows[resource as usize]
    }

    /// Resets allocation state to pre-market defaults: nothing imported,
    /// nothing in shortage. Production and consumption are kept.
    pub fn reset_allocation(&mut self) {
        for flow in &mut self.flows {
            flow.imported = 0;
            flow.in_shortage = false;
        }
    }

    /// Iterates flows paired with their resource kind.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, &ResourceFlow)> {
        self.flows.iter().enumerate().map(|(i, f)| (ALL_RESOURCES[i], f))
    }
}
