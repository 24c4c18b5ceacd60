//! Data structures for ships and defenses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::levelable_data::Requirements;
use crate::config::CharacterClass;
use crate::ids::EntityId;
use crate::resources::Resources;

/// Base combat values of a unit, before research.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Hull points.
    pub structural_integrity: i64,

    /// Shield points per round.
    pub shield_power: i64,

    /// Damage per shot.
    pub weapon_power: i64,

    /// Shots this unit gets against a given target type.
    #[serde(default)]
    pub rapidfire_against: BTreeMap<EntityId, u32>,

    /// Shots a given attacker type gets against this unit.
    #[serde(default)]
    pub rapidfire_from: BTreeMap<EntityId, u32>,
}

impl CombatStats {
    /// Create combat stats without rapid fire.
    #[must_use]
    pub fn new(structural_integrity: i64, shield_power: i64, weapon_power: i64) -> Self {
        Self {
            structural_integrity,
            shield_power,
            weapon_power,
            rapidfire_against: BTreeMap::new(),
            rapidfire_from: BTreeMap::new(),
        }
    }

    /// Rapid fire of this unit against `target`, 0 if none.
    #[must_use]
    pub fn rapidfire_against(&self, target: EntityId) -> u32 {
        self.rapidfire_against.get(&target).copied().unwrap_or(0)
    }

    /// Rapid fire `attacker` has against this unit, 0 if none.
    #[must_use]
    pub fn rapidfire_from(&self, attacker: EntityId) -> u32 {
        self.rapidfire_from.get(&attacker).copied().unwrap_or(0)
    }
}

/// Movement constants of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mobility {
    /// Speed with no drive research.
    pub base_speed: i64,

    /// Cargo with no hyperspace technology.
    pub cargo_capacity: i64,

    /// Deuterium per flight unit.
    pub fuel_consumption: i64,

    /// Deuterium the ship can carry for its own flight.
    pub fuel_capacity: i64,
}

/// Data-driven ship definition.
///
/// # Example RON
///
/// ```ron
/// ShipData(
///     id: 202,
///     name: "Small Cargo",
///     price: (metal: 2000, crystal: 2000),
///     combat: CombatStats(structural_integrity: 4000, shield_power: 10, weapon_power: 5),
///     mobility: Mobility(
///         base_speed: 5000,
///         cargo_capacity: 5000,
///         fuel_consumption: 10,
///         fuel_capacity: 5000,
///     ),
///     requirements: { 21: 2, 115: 2 },
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipData {
    /// Unique identifier.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Price of one unit.
    pub price: Resources,

    /// Combat values.
    pub combat: CombatStats,

    /// Movement constants.
    pub mobility: Mobility,

    /// Minimum levels of other entities.
    #[serde(default)]
    pub requirements: Requirements,

    /// Class the player must have to build this ship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_class: Option<CharacterClass>,
}

/// Data-driven defense definition.
///
/// # Example RON
///
/// ```ron
/// DefenseData(
///     id: 401,
///     name: "Rocket Launcher",
///     price: (metal: 2000),
///     combat: CombatStats(structural_integrity: 2000, shield_power: 20, weapon_power: 80),
///     requirements: { 21: 1 },
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseData {
    /// Unique identifier.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Price of one unit.
    pub price: Resources,

    /// Combat values.
    pub combat: CombatStats,

    /// Minimum levels of other entities.
    #[serde(default)]
    pub requirements: Requirements,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_stats() -> CombatStats {
        let mut stats = CombatStats::new(27_000, 50, 400);
        stats.rapidfire_against.insert(EntityId::LIGHT_FIGHTER, 6);
        stats.rapidfire_from.insert(EntityId::BATTLECRUISER, 7);
        stats
    }

    #[test]
    fn test_rapidfire_lookup() {
        let stats = create_test_stats();
        assert_eq!(stats.rapidfire_against(EntityId::LIGHT_FIGHTER), 6);
        assert_eq!(stats.rapidfire_against(EntityId::SMALL_CARGO), 0);
        assert_eq!(stats.rapidfire_from(EntityId::BATTLECRUISER), 7);
        assert_eq!(stats.rapidfire_from(EntityId::DEATHSTAR), 0);
    }

    #[test]
    fn test_ship_from_ron() {
        let text = r#"ShipData(
            id: 202,
            name: "Small Cargo",
            price: (metal: 2000, crystal: 2000),
            combat: CombatStats(structural_integrity: 4000, shield_power: 10, weapon_power: 5),
            mobility: Mobility(
                base_speed: 5000,
                cargo_capacity: 5000,
                fuel_consumption: 10,
                fuel_capacity: 5000,
            ),
            requirements: { 21: 2, 115: 2 },
        )"#;
        let ship: ShipData = ron::from_str(text).unwrap();
        assert_eq!(ship.id, EntityId::SMALL_CARGO);
        assert_eq!(ship.mobility.base_speed, 5000);
        assert_eq!(ship.requirements.len(), 2);
        assert!(ship.required_class.is_none());
        assert!(ship.combat.rapidfire_against.is_empty());
    }
}
