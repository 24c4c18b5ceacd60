//! Proptest strategies.
//!
//! Generators for levels, bodies, fleets and coordinates within ranges
//! that real accounts reach.

use proptest::prelude::*;

use ogame_core::config::{CharacterClass, Traits};
use ogame_core::coordinate::{CelestialType, Coordinate};
use ogame_core::fleet::Fleet;
use ogame_core::ids::{EntityId, DEFENSES, FACILITIES, RESOURCE_BUILDINGS, SHIPS, TECHNOLOGIES};
use ogame_core::state::{Levels, StateSnapshot};

/// A building or technology level.
///
/// Range: 1 to 25
pub fn arb_level() -> impl Strategy<Value = u32> {
    1u32..=25
}

/// Any building or technology identifier.
pub fn arb_levelable_id() -> impl Strategy<Value = EntityId> {
    let ids: Vec<EntityId> = RESOURCE_BUILDINGS
        .iter()
        .chain(FACILITIES.iter())
        .chain(TECHNOLOGIES.iter())
        .copied()
        .collect();
    prop::sample::select(ids)
}

/// Any building identifier.
pub fn arb_building_id() -> impl Strategy<Value = EntityId> {
    let ids: Vec<EntityId> = RESOURCE_BUILDINGS
        .iter()
        .chain(FACILITIES.iter())
        .copied()
        .collect();
    prop::sample::select(ids)
}

/// Any ship identifier, satellites and crawlers included.
pub fn arb_ship_id() -> impl Strategy<Value = EntityId> {
    prop::sample::select(SHIPS.to_vec())
}

/// Any ship or defense identifier.
pub fn arb_unit_id() -> impl Strategy<Value = EntityId> {
    let ids: Vec<EntityId> = SHIPS.iter().chain(DEFENSES.iter()).copied().collect();
    prop::sample::select(ids)
}

/// Research levels for every technology.
///
/// Range: 0 to 20 each
pub fn arb_researches() -> impl Strategy<Value = Levels> {
    prop::collection::vec(0u32..=20, TECHNOLOGIES.len())
        .prop_map(|levels| TECHNOLOGIES.iter().copied().zip(levels).collect())
}

/// A body with random building and research levels and energy.
pub fn arb_state() -> impl Strategy<Value = StateSnapshot> {
    let celestial = prop_oneof![Just(CelestialType::Planet), Just(CelestialType::Moon)];
    let buildings = prop::collection::vec(0u32..=15, RESOURCE_BUILDINGS.len() + FACILITIES.len());
    (celestial, buildings, arb_researches(), 0i64..500_000).prop_map(
        |(celestial, buildings, researches, energy)| {
            let mut state = RESOURCE_BUILDINGS
                .iter()
                .chain(FACILITIES.iter())
                .copied()
                .zip(buildings)
                .fold(StateSnapshot::new(celestial), |state, (id, level)| {
                    state.with_level(id, level)
                });
            state.researches = researches;
            state.with_energy_production(energy)
        },
    )
}

/// A fleet of up to five ship types, 1 to 1000 of each.
pub fn arb_fleet() -> impl Strategy<Value = Fleet> {
    prop::collection::vec((arb_ship_id(), 1u64..=1000), 0..5)
        .prop_map(|pairs| Fleet::from_quantities(pairs))
}

/// A fleet holding at least one ship that can fly.
pub fn arb_flyable_fleet() -> impl Strategy<Value = Fleet> {
    let flyable: Vec<EntityId> = SHIPS.iter().copied().filter(|id| id.is_flyable()).collect();
    (prop::sample::select(flyable), 1u64..=1000, arb_fleet())
        .prop_map(|(id, quantity, fleet)| fleet.with(id, quantity))
}

/// A planet coordinate inside a 9-galaxy, 499-system universe.
pub fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    (1u32..=9, 1u32..=499, 1u32..=15).prop_map(|(g, s, p)| Coordinate::planet(g, s, p))
}

/// Any class, with or without the technocrat and pioneers bonuses.
pub fn arb_traits() -> impl Strategy<Value = Traits> {
    let class = prop_oneof![
        Just(CharacterClass::NoClass),
        Just(CharacterClass::Collector),
        Just(CharacterClass::General),
        Just(CharacterClass::Discoverer),
    ];
    (class, any::<bool>(), any::<bool>()).prop_map(|(class, technocrat, pioneers)| Traits {
        class,
        technocrat,
        pioneers,
    })
}

/// A fleet speed setting, 10% to 100% in 10% steps.
pub fn arb_speed_fraction() -> impl Strategy<Value = f64> {
    (1u32..=10).prop_map(|tenths| f64::from(tenths) / 10.0)
}
