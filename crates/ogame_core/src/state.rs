//! Caller-owned state snapshots.
//!
//! The engine never mutates these during a computation. Callers refresh
//! them from wherever they track game state and hand them in by reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coordinate::CelestialType;
use crate::ids::{Category, EntityId};

/// Level per entity. Entities that were never built read as level 0.
///
/// # Example RON
///
/// ```ron
/// { 115: 6, 117: 4, 118: 0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Levels(BTreeMap<EntityId, u32>);

impl Levels {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Current level of `id`, 0 if absent.
    #[must_use]
    pub fn level(&self, id: EntityId) -> u32 {
        self.0.get(&id).copied().unwrap_or(0)
    }

    /// Set the level of `id`.
    pub fn set(&mut self, id: EntityId, level: u32) {
        if level == 0 {
            self.0.remove(&id);
        } else {
            self.0.insert(id, level);
        }
    }

    /// Builder form of [`Levels::set`].
    #[must_use]
    pub fn with(mut self, id: EntityId, level: u32) -> Self {
        self.set(id, level);
        self
    }

    /// Complete one construction of `id`.
    pub fn raise(&mut self, id: EntityId) {
        let level = self.level(id).saturating_add(1);
        self.set(id, level);
    }

    /// Tear down one level of `id`. Stays at 0.
    pub fn lower(&mut self, id: EntityId) {
        let level = self.level(id).saturating_sub(1);
        self.set(id, level);
    }

    /// Iterate non-zero levels in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, u32)> + '_ {
        self.0.iter().map(|(id, level)| (*id, *level))
    }

    /// Check if nothing has been built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(EntityId, u32)> for Levels {
    fn from_iter<I: IntoIterator<Item = (EntityId, u32)>>(iter: I) -> Self {
        let mut levels = Self::new();
        for (id, level) in iter {
            levels.set(id, level);
        }
        levels
    }
}

/// Everything availability checks read about one celestial body and its
/// owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Body the construction would happen on.
    #[serde(default)]
    pub celestial: CelestialType,
    /// Resource building levels on this body.
    #[serde(default)]
    pub resource_buildings: Levels,
    /// Facility levels on this body.
    #[serde(default)]
    pub facilities: Levels,
    /// Research levels of the owner.
    #[serde(default)]
    pub researches: Levels,
    /// Energy production of the body, for energy-gated research.
    #[serde(default)]
    pub energy_production: i64,
}

impl StateSnapshot {
    /// Create an empty snapshot for a body of the given type.
    #[must_use]
    pub fn new(celestial: CelestialType) -> Self {
        Self {
            celestial,
            ..Self::default()
        }
    }

    /// Level of `id` in the snapshot matching its category.
    ///
    /// Units have no level and return `None`, as do unknown identifiers.
    #[must_use]
    pub fn level_of(&self, id: EntityId) -> Option<u32> {
        match id.category()? {
            Category::ResourceBuilding => Some(self.resource_buildings.level(id)),
            Category::Facility => Some(self.facilities.level(id)),
            Category::Technology => Some(self.researches.level(id)),
            Category::Ship | Category::Defense => None,
        }
    }

    /// Set the level of `id` in the snapshot matching its category.
    ///
    /// Units and unknown identifiers are ignored.
    pub fn set_level(&mut self, id: EntityId, level: u32) {
        match id.category() {
            Some(Category::ResourceBuilding) => self.resource_buildings.set(id, level),
            Some(Category::Facility) => self.facilities.set(id, level),
            Some(Category::Technology) => self.researches.set(id, level),
            _ => {}
        }
    }

    /// Builder form of [`StateSnapshot::set_level`].
    #[must_use]
    pub fn with_level(mut self, id: EntityId, level: u32) -> Self {
        self.set_level(id, level);
        self
    }

    /// Set the energy production.
    #[must_use]
    pub fn with_energy_production(mut self, energy: i64) -> Self {
        self.energy_production = energy;
        self
    }
}
