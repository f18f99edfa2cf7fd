//! Fixed attribute-effect tables for market outcomes.
//!
//! Shortages and successful exports are exposed as typed records; applying
//! their attribute effects is this separate, explicit step.

use crate::state::{Attribute, AttributeModifier, ModifierSource, Resource};

/// Attribute raised by a successful export, regardless of resource.
pub const EXPORT_BONUS_ATTRIBUTE: Attribute = Attribute::Dynamism;

/// Flat increment per resource successfully exported.
pub const EXPORT_BONUS_AMOUNT: i64 = 2;

/// The transient malus a shortage of the given resource applies.
pub fn shortage_malus(resource: Resource) -> AttributeModifier {
    let (attribute, amount) = match resource {
        Resource::Food => (Attribute::Morale, -8),
        Resource::ConsumerGoods => (Attribute::Morale, -4),
        Resource::Energy => (Attribute::Industry, -6),
        Resource::Minerals => (Attribute::Industry, -6),
        Resource::TransportCapacity => (Attribute::Accessibility, -10),
    };
    AttributeModifier {
        attribute,
        amount,
        source: ModifierSource::Shortage(resource),
    }
}

/// The transient bonus a successful export of the given resource applies.
pub fn export_bonus(resource: Resource) -> AttributeModifier {
    AttributeModifier {
        attribute: EXPORT_BONUS_ATTRIBUTE,
        amount: EXPORT_BONUS_AMOUNT,
        source: ModifierSource::Export(resource),
    }
}
