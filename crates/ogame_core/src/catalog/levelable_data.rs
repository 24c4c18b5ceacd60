//! Data structures for buildings and technologies.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::coordinate::CelestialType;
use crate::ids::{Category, EntityId};
use crate::resources::Resources;

/// Prerequisite entity mapped to its minimum level.
pub type Requirements = BTreeMap<EntityId, u32>;

/// Bodies an entity can be built on. Debris fields host nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Placement {
    /// Planets and moons.
    #[default]
    Anywhere,
    /// Planets only.
    PlanetOnly,
    /// Moons only.
    MoonOnly,
}

impl Placement {
    /// Check if a body of type `celestial` can host the entity.
    #[must_use]
    pub const fn allows(self, celestial: CelestialType) -> bool {
        match (self, celestial) {
            (_, CelestialType::Debris) => false,
            (Self::Anywhere, _) => true,
            (Self::PlanetOnly, CelestialType::Planet) => true,
            (Self::MoonOnly, CelestialType::Moon) => true,
            _ => false,
        }
    }
}

/// Data-driven definition of a building or technology.
///
/// The price of level `n` is `base_cost * increase_factor^(n-1)`, floored
/// per component.
///
/// # Example RON
///
/// ```ron
/// LevelableData(
///     id: 12,
///     name: "Fusion Reactor",
///     category: ResourceBuilding,
///     base_cost: (metal: 900, crystal: 360, deuterium: 180),
///     increase_factor: 1.8,
///     requirements: { 3: 5, 113: 3 },
///     placement: PlanetOnly,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelableData {
    /// Unique identifier.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Resource building, facility or technology.
    pub category: Category,

    /// Price of level 1.
    pub base_cost: Resources,

    /// Growth per level, at least 1.
    pub increase_factor: f64,

    /// Growth per level of the energy component, when it differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_increase_factor: Option<f64>,

    /// Minimum levels of other entities.
    #[serde(default)]
    pub requirements: Requirements,

    /// Bodies this can be built on.
    #[serde(default)]
    pub placement: Placement,

    /// Minimum energy production needed on the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_gate: Option<i64>,
}

impl LevelableData {
    /// Create a definition with no requirements that can be built anywhere.
    #[must_use]
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        category: Category,
        base_cost: Resources,
        increase_factor: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            base_cost,
            increase_factor,
            energy_increase_factor: None,
            requirements: Requirements::new(),
            placement: Placement::Anywhere,
            energy_gate: None,
        }
    }

    /// Add a requirement.
    #[must_use]
    pub fn requires(mut self, id: EntityId, level: u32) -> Self {
        self.requirements.insert(id, level);
        self
    }

    /// Restrict placement.
    #[must_use]
    pub fn placed(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Use a distinct growth factor for energy.
    #[must_use]
    pub fn with_energy_factor(mut self, factor: f64) -> Self {
        self.energy_increase_factor = Some(factor);
        self
    }

    /// Require a minimum energy production.
    #[must_use]
    pub fn with_energy_gate(mut self, energy: i64) -> Self {
        self.energy_gate = Some(energy);
        self
    }

    /// Price of `level`.
    #[must_use]
    pub fn price(&self, level: NonZeroU32) -> Resources {
        let mut price = crate::cost::price_at_level(self.base_cost, self.increase_factor, level);
        if let Some(factor) = self.energy_increase_factor {
            price.energy = crate::cost::price_at_level(
                Resources::ZERO.with_energy(self.base_cost.energy),
                factor,
                level,
            )
            .energy;
        }
        price
    }
}
