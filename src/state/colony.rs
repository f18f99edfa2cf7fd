//! Colonies, their attributes, and transient market modifiers.
//!
//! A colony's attributes carry base values; the market phase layers
//! transient modifiers on top of them each turn. `Dynamism` is the priority
//! attribute that orders access to shared allocation pools.

use serde::{Deserialize, Serialize};

use super::resource::{ColonySummary, Resource};
use super::sector::SectorId;

/// Unique identifier for a colony.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ColonyId(pub u32);

/// A colony attribute affected by market outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Morale,
    Industry,
    Accessibility,
    Dynamism,
}

/// Number of colony attributes.
pub const ATTRIBUTE_COUNT: usize = 4;

/// All attributes, in canonical index order.
pub const ALL_ATTRIBUTES: [Attribute; ATTRIBUTE_COUNT] = [
    Attribute::Morale,
    Attribute::Industry,
    Attribute::Accessibility,
    Attribute::Dynamism,
];

/// Base attribute values, indexed by `Attribute as usize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    values: [i64; ATTRIBUTE_COUNT],
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: Attribute, value: i64) -> Self {
        self.values[attribute as usize] = value;
        self
    }

    pub fn get(&self, attribute: Attribute) -> i64 {
        self.values[attribute as usize]
    }

    pub fn set(&mut self, attribute: Attribute, value: i64) {
        self.values[attribute as usize] = value;
    }
}

/// Why a market modifier was applied. Typed so callers never reconstruct
/// market outcomes by matching on text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierSource {
    Shortage(Resource),
    Export(Resource),
}

/// A transient attribute modifier applied by the market phase.
///
/// Modifiers never accumulate: the orchestrator clears every colony's list
/// before recomputing the turn's market outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeModifier {
    pub attribute: Attribute,
    pub amount: i64,
    pub source: ModifierSource,
}

/// A resource deposit a colony draws on. Consumed by the external
/// `FlowProvider`; opaque to the resolvers in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub resource: Resource,
    pub abundance: i64,
}

/// A colony: the entity competing for resources within a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colony {
    pub id: ColonyId,
    pub name: String,
    pub sector: SectorId,
    pub deposits: Vec<Deposit>,
    pub attributes: AttributeSet,
    /// Transient modifiers from the most recent market phase.
    pub market_modifiers: Vec<AttributeModifier>,
    /// Final resolved flows from the most recent market phase.
    pub market: ColonySummary,
}

impl Colony {
    /// Creates a colony with zeroed market state and no modifiers.
    pub fn new(id: ColonyId, name: &str, sector: SectorId, attributes: AttributeSet) -> Self {
        Colony {
            id,
            name: name.to_string(),
            sector,
            deposits: Vec::new(),
            attributes,
            market_modifiers: Vec::new(),
            market: ColonySummary::new(),
        }
    }

    /// Effective attribute value: base plus all current market modifiers.
    pub fn effective(&self, attribute: Attribute) -> i64 {
        let base = self.attributes.get(attribute);
        let delta: i64 = self
            .market_modifiers
            .iter()
            .filter(|m| m.attribute == attribute)
            .map(|m| m.amount)
            .sum();
        base + delta
    }

    /// The priority attribute used to order pool access.
    pub fn dynamism(&self) -> i64 {
        self.effective(Attribute::Dynamism)
    }
}
