//! Requirement resolution.
//!
//! An entity is available when the body type allows it, the owner's class
//! and energy production pass its gates, and every entry of its
//! requirement set is met by the matching level snapshot. Technologies
//! also need the prerequisites of their prerequisites.

use std::collections::{BTreeSet, VecDeque};

use crate::catalog::{Buildable, Catalog};
use crate::config::Traits;
use crate::ids::EntityId;
use crate::state::StateSnapshot;

/// Why an entity cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// The identifier is not in the catalog.
    Unknown,
    /// The body type does not host this entity.
    Placement,
    /// Energy production is below the gate.
    Energy {
        /// Required production.
        needed: i64,
    },
    /// The owner lacks the required class.
    Class,
    /// A requirement is below its minimum level, or cannot be evaluated.
    Requirement {
        /// Prerequisite entity.
        id: EntityId,
        /// Minimum level.
        level: u32,
    },
}

impl Catalog {
    /// Check if `id` can be built on the body described by `state`.
    ///
    /// Unknown identifiers, and requirements that cannot be evaluated,
    /// count as unavailable.
    #[must_use]
    pub fn is_available(&self, id: EntityId, state: &StateSnapshot, traits: &Traits) -> bool {
        match self.unavailability(id, state, traits) {
            None => true,
            Some(reason) => {
                tracing::debug!(entity = %id, ?reason, "not available");
                false
            }
        }
    }

    /// First reason `id` cannot be built, or `None` if it can.
    #[must_use]
    pub fn unavailability(
        &self,
        id: EntityId,
        state: &StateSnapshot,
        traits: &Traits,
    ) -> Option<Unavailable> {
        let Some(entity) = self.get(id) else {
            return Some(Unavailable::Unknown);
        };

        if !entity.placement().allows(state.celestial) {
            return Some(Unavailable::Placement);
        }
        if let Some(needed) = entity.energy_gate() {
            if state.energy_production < needed {
                return Some(Unavailable::Energy { needed });
            }
        }
        if let Some(class) = entity.required_class() {
            if traits.class != class {
                return Some(Unavailable::Class);
            }
        }

        self.unmet_requirement(entity, state)
            .map(|(id, level)| Unavailable::Requirement { id, level })
    }

    /// Walk the requirement set of `entity`, technologies transitively.
    fn unmet_requirement(
        &self,
        entity: &dyn Buildable,
        state: &StateSnapshot,
    ) -> Option<(EntityId, u32)> {
        let transitive = entity.id().is_technology();
        let mut queue: VecDeque<(EntityId, u32)> =
            entity.requirements().iter().map(|(id, lvl)| (*id, *lvl)).collect();
        let mut seen = BTreeSet::new();

        while let Some((id, needed)) = queue.pop_front() {
            if !seen.insert((id, needed)) {
                continue;
            }
            if !self.contains(id) {
                return Some((id, needed));
            }
            match state.level_of(id) {
                Some(level) if level >= needed => {}
                _ => return Some((id, needed)),
            }
            if transitive {
                if let Some(required) = self.get(id) {
                    queue.extend(required.requirements().iter().map(|(id, lvl)| (*id, *lvl)));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LevelableData;
    use crate::config::CharacterClass;
    use crate::coordinate::CelestialType;
    use crate::ids::Category;
    use crate::resources::Resources;

    fn planet() -> StateSnapshot {
        StateSnapshot::new(CelestialType::Planet)
    }

    fn moon() -> StateSnapshot {
        StateSnapshot::new(CelestialType::Moon)
    }

    fn available(id: EntityId, state: &StateSnapshot) -> bool {
        Catalog::standard().is_available(id, state, &Traits::default())
    }

    #[test]
    fn test_graviton_energy_gate() {
        let id = EntityId::GRAVITON_TECHNOLOGY;
        assert!(!available(id, &planet()));
        let lab = planet().with_level(EntityId::RESEARCH_LAB, 12);
        assert!(!available(id, &lab.clone().with_energy_production(299_999)));
        assert!(available(id, &lab.with_energy_production(300_000)));
    }

    #[test]
    fn test_terraformer() {
        let state = planet()
            .with_level(EntityId::NANITE_FACTORY, 1)
            .with_level(EntityId::ENERGY_TECHNOLOGY, 12);
        assert!(available(EntityId::TERRAFORMER, &state));

        let state = state.with_level(EntityId::ENERGY_TECHNOLOGY, 11);
        assert!(!available(EntityId::TERRAFORMER, &state));
    }

    #[test]
    fn test_armour_technology() {
        let id = EntityId::ARMOUR_TECHNOLOGY;
        assert!(available(id, &planet().with_level(EntityId::RESEARCH_LAB, 2)));
        assert!(!available(id, &planet().with_level(EntityId::RESEARCH_LAB, 1)));
    }

    #[test]
    fn test_light_laser_checks_direct_requirements_only() {
        let state = planet()
            .with_level(EntityId::SHIPYARD, 2)
            .with_level(EntityId::ROBOTICS_FACTORY, 2)
            .with_level(EntityId::ENERGY_TECHNOLOGY, 2)
            .with_level(EntityId::LASER_TECHNOLOGY, 3);
        assert!(available(EntityId::LIGHT_LASER, &state));
    }

    #[test]
    fn test_moon_only_buildings() {
        let id = EntityId::LUNAR_BASE;
        assert!(!available(id, &planet()));
        assert!(!available(id, &StateSnapshot::new(CelestialType::Debris)));
        assert!(available(id, &moon()));

        assert!(!available(EntityId::SENSOR_PHALANX, &moon()));
        assert!(available(
            EntityId::SENSOR_PHALANX,
            &moon().with_level(EntityId::LUNAR_BASE, 1)
        ));
    }

    #[test]
    fn test_planet_only_entities() {
        let lab = moon().with_level(EntityId::RESEARCH_LAB, 2);
        assert!(!available(EntityId::METAL_MINE, &moon()));
        assert!(!available(EntityId::ARMOUR_TECHNOLOGY, &lab));
        assert!(available(EntityId::METAL_MINE, &planet()));
        assert!(available(EntityId::ROBOTICS_FACTORY, &moon()));
    }

    #[test]
    fn test_debris_hosts_nothing() {
        let debris = StateSnapshot::new(CelestialType::Debris).with_level(EntityId::SHIPYARD, 1);
        assert!(!available(EntityId::ROCKET_LAUNCHER, &debris));
        assert!(!available(EntityId::ROBOTICS_FACTORY, &debris));
    }

    #[test]
    fn test_class_ships() {
        let catalog = Catalog::standard();
        let state = planet()
            .with_level(EntityId::SHIPYARD, 5)
            .with_level(EntityId::COMBUSTION_DRIVE, 4)
            .with_level(EntityId::ARMOUR_TECHNOLOGY, 4)
            .with_level(EntityId::LASER_TECHNOLOGY, 4);
        let collector = Traits::with_class(CharacterClass::Collector);
        let general = Traits::with_class(CharacterClass::General);
        assert!(catalog.is_available(EntityId::CRAWLER, &state, &collector));
        assert!(!catalog.is_available(EntityId::CRAWLER, &state, &general));
        assert_eq!(
            catalog.unavailability(EntityId::CRAWLER, &state, &general),
            Some(Unavailable::Class)
        );
    }

    #[test]
    fn test_technology_prerequisites_are_transitive() {
        let id = EntityId::HYPERSPACE_DRIVE;
        let direct = planet().with_level(EntityId::HYPERSPACE_TECHNOLOGY, 3);
        assert!(!available(id, &direct));

        let chain = direct
            .with_level(EntityId::RESEARCH_LAB, 7)
            .with_level(EntityId::SHIELDING_TECHNOLOGY, 5)
            .with_level(EntityId::ENERGY_TECHNOLOGY, 5);
        assert!(available(id, &chain));
    }

    #[test]
    fn test_unmet_requirement_is_reported() {
        let catalog = Catalog::standard();
        let reason = catalog.unavailability(
            EntityId::ARMOUR_TECHNOLOGY,
            &planet(),
            &Traits::default(),
        );
        assert_eq!(
            reason,
            Some(Unavailable::Requirement {
                id: EntityId::RESEARCH_LAB,
                level: 2
            })
        );
    }

    #[test]
    fn test_unknown_entities_fail_closed() {
        let mut catalog = Catalog::new();
        assert!(!catalog.is_available(EntityId::METAL_MINE, &planet(), &Traits::default()));

        catalog.register_levelable(
            LevelableData::new(
                EntityId::METAL_MINE,
                "Metal Mine",
                Category::ResourceBuilding,
                Resources::new(60, 15, 0),
                1.5,
            )
            .requires(EntityId::new(9999), 1),
        );
        let state = planet().with_level(EntityId::new(9999), 5);
        assert!(!catalog.is_available(EntityId::METAL_MINE, &state, &Traits::default()));
    }

    #[test]
    fn test_no_requirements() {
        assert!(available(EntityId::METAL_MINE, &planet()));
        assert!(available(EntityId::RESEARCH_LAB, &planet()));
    }
}
