//! Property tests for the formula engine.
//!
//! Each property holds for every catalog entry and every reachable state,
//! not only for the fixtures the unit tests pin down.

use ogame_core::catalog::Catalog;
use ogame_core::config::Ruleset;
use ogame_core::geometry::{distance, Flight};
use ogame_core::ids::{EntityId, SHIPS};
use ogame_core::production::storage;
use ogame_core::state::Levels;
use ogame_test_utils::fixtures;
use ogame_test_utils::strategies::{
    arb_building_id, arb_coordinate, arb_fleet, arb_flyable_fleet, arb_level, arb_levelable_id,
    arb_researches, arb_speed_fraction, arb_state, arb_traits, arb_unit_id,
};
use proptest::prelude::*;

fn catalog() -> Catalog {
    fixtures::catalog()
}

// ============================================================================
// Prices
// ============================================================================

proptest! {
    /// Each level costs `factor` times the previous one, give or take
    /// the flooring of both.
    #[test]
    fn prop_price_grows_by_factor(id in arb_levelable_id(), level in 1u32..20) {
        let catalog = catalog();
        let factor = catalog.levelable(id).unwrap().increase_factor;
        let prev = catalog.price(id, level).unwrap();
        let next = catalog.price(id, level + 1).unwrap();

        for (p, n) in [
            (prev.metal, next.metal),
            (prev.crystal, next.crystal),
            (prev.deuterium, next.deuterium),
        ] {
            let diff = n as f64 - p as f64 * factor;
            prop_assert!(diff > -1.01, "{id} level {level}: diff {diff}");
            prop_assert!(diff < factor + 0.01, "{id} level {level}: diff {diff}");
        }
    }

    /// Without ion technology, tearing a level down costs its full price.
    #[test]
    fn prop_deconstruction_without_ion_is_full_price(
        id in arb_building_id(),
        level in arb_level(),
    ) {
        let catalog = catalog();
        let refund = catalog.deconstruction_price(id, level, &Levels::new()).unwrap();
        prop_assert_eq!(refund, catalog.price(id, level).unwrap());
    }

    /// Ion technology only ever lowers the deconstruction price.
    #[test]
    fn prop_ion_technology_never_raises_deconstruction(
        id in arb_building_id(),
        level in arb_level(),
        ion in 0u32..40,
    ) {
        let catalog = catalog();
        let researches = Levels::new().with(EntityId::ION_TECHNOLOGY, ion);
        let refund = catalog.deconstruction_price(id, level, &researches).unwrap();
        let price = catalog.price(id, level).unwrap();
        prop_assert!(refund.metal >= 0 && refund.metal <= price.metal);
        prop_assert!(refund.crystal >= 0 && refund.crystal <= price.crystal);
        prop_assert!(refund.deuterium >= 0 && refund.deuterium <= price.deuterium);
    }
}

// ============================================================================
// Availability
// ============================================================================

proptest! {
    /// Raising any level or the energy output never makes an available
    /// building, technology, ship or defense unavailable.
    #[test]
    fn prop_availability_is_monotonic(
        id in prop_oneof![arb_levelable_id(), arb_unit_id()],
        raised in arb_levelable_id(),
        extra_energy in 0i64..100_000,
        state in arb_state(),
        traits in arb_traits(),
    ) {
        let catalog = catalog();
        if catalog.is_available(id, &state, &traits) {
            let level = state.level_of(raised).unwrap_or(0);
            let richer = state
                .clone()
                .with_level(raised, level + 1)
                .with_energy_production(state.energy_production + extra_energy);
            prop_assert!(catalog.is_available(id, &richer, &traits));
        }
    }
}

// ============================================================================
// Fleets
// ============================================================================

proptest! {
    /// Every fleet contains the empty fleet, itself and any part of a sum.
    #[test]
    fn prop_fleet_containment(a in arb_fleet(), b in arb_fleet()) {
        prop_assert!(a.contains(&fixtures::fleet(&[])));
        prop_assert!(a.contains(&a));
        prop_assert!((a.clone() + b.clone()).contains(&b));
    }

    /// Removing a fleet after adding it gives back the first fleet.
    #[test]
    fn prop_fleet_add_then_sub(a in arb_fleet(), b in arb_fleet()) {
        prop_assert_eq!((a.clone() + b.clone()) - b, a);
    }

    /// Research never slows a ship below its catalog speed.
    #[test]
    fn prop_speed_at_least_base(researches in arb_researches(), traits in arb_traits()) {
        let catalog = catalog();
        for id in SHIPS {
            let base = catalog.ship(id).unwrap().mobility.base_speed;
            prop_assert!(catalog.ship_speed(id, &researches, &traits).unwrap() >= base);
        }
    }

    /// Cargo adds up ship by ship.
    #[test]
    fn prop_cargo_is_additive(
        a in arb_fleet(),
        b in arb_fleet(),
        researches in arb_researches(),
        traits in arb_traits(),
    ) {
        let catalog = catalog();
        let rules = Ruleset::default();
        let cargo = |fleet: &ogame_core::fleet::Fleet| {
            fleet.cargo(&catalog, &researches, &rules, &traits).unwrap()
        };
        prop_assert_eq!(cargo(&(a.clone() + b.clone())), cargo(&a) + cargo(&b));
    }
}

#[test]
fn test_empty_fleet_has_no_cargo() {
    let catalog = catalog();
    let fleet = fixtures::fleet(&[]);
    let cargo = fleet
        .cargo(&catalog, &Levels::new(), &Ruleset::default(), &Default::default())
        .unwrap();
    assert_eq!(cargo, 0);
}

// ============================================================================
// Flights
// ============================================================================

proptest! {
    /// Distance does not depend on direction.
    #[test]
    fn prop_distance_is_symmetric(
        a in arb_coordinate(),
        b in arb_coordinate(),
        donut in any::<bool>(),
    ) {
        let rules = Ruleset {
            donut_galaxy: donut,
            donut_system: donut,
            ..Ruleset::default()
        };
        prop_assert_eq!(distance(&a, &b, &rules), distance(&b, &a, &rules));
    }

    /// Flying slower never arrives sooner, and a flyable fleet always
    /// burns some fuel.
    #[test]
    fn prop_slower_flights_take_longer(
        from in arb_coordinate(),
        to in arb_coordinate(),
        fleet in arb_flyable_fleet(),
        fast in arb_speed_fraction(),
        slow in arb_speed_fraction(),
        researches in arb_researches(),
        traits in arb_traits(),
    ) {
        let (fast, slow) = if fast >= slow { (fast, slow) } else { (slow, fast) };
        let catalog = catalog();
        let rules = Ruleset::default();
        let plan = |speed| {
            let flight = Flight::new(from, to, &fleet).at_speed(speed);
            catalog.plan_flight(&flight, &researches, &rules, &traits).unwrap()
        };

        let quick = plan(fast);
        let leisurely = plan(slow);
        prop_assert!(leisurely.duration >= quick.duration);
        prop_assert!(quick.fuel >= 1);
        prop_assert!(leisurely.fuel >= 1);
    }
}

// ============================================================================
// Production
// ============================================================================

proptest! {
    /// A bigger storage building never holds less.
    #[test]
    fn prop_storage_is_monotonic(state in arb_state()) {
        let before = storage(&state);
        let metal = state.resource_buildings.level(EntityId::METAL_STORAGE);
        let tank = state.resource_buildings.level(EntityId::DEUTERIUM_TANK);
        let after = storage(
            &state
                .clone()
                .with_level(EntityId::METAL_STORAGE, metal + 1)
                .with_level(EntityId::DEUTERIUM_TANK, tank + 1),
        );
        prop_assert!(after.metal > before.metal);
        prop_assert_eq!(after.crystal, before.crystal);
        prop_assert!(after.deuterium > before.deuterium);
    }
}
