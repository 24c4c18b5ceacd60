//! Test fixtures and helpers.
//!
//! Reference research states, bodies and fleets taken from known game
//! situations, for consistent testing across crates.

use ogame_core::catalog::Catalog;
use ogame_core::config::Ruleset;
use ogame_core::coordinate::CelestialType;
use ogame_core::fleet::Fleet;
use ogame_core::ids::EntityId;
use ogame_core::state::{Levels, StateSnapshot};
use serde::de::DeserializeOwned;

/// The built-in catalog.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::standard()
}

/// Levels from (id, level) pairs.
#[must_use]
pub fn levels(pairs: &[(EntityId, u32)]) -> Levels {
    pairs.iter().copied().collect()
}

/// Research state with the three drives at the given levels.
#[must_use]
pub fn drives(combustion: u32, impulse: u32, hyperspace: u32) -> Levels {
    levels(&[
        (EntityId::COMBUSTION_DRIVE, combustion),
        (EntityId::IMPULSE_DRIVE, impulse),
        (EntityId::HYPERSPACE_DRIVE, hyperspace),
    ])
}

/// A planet with the given levels, each filed by its category.
#[must_use]
pub fn planet(pairs: &[(EntityId, u32)]) -> StateSnapshot {
    body(CelestialType::Planet, pairs)
}

/// A moon with the given levels, each filed by its category.
#[must_use]
pub fn moon(pairs: &[(EntityId, u32)]) -> StateSnapshot {
    body(CelestialType::Moon, pairs)
}

fn body(celestial: CelestialType, pairs: &[(EntityId, u32)]) -> StateSnapshot {
    pairs
        .iter()
        .fold(StateSnapshot::new(celestial), |state, (id, level)| {
            state.with_level(*id, *level)
        })
}

/// A fleet from (ship, quantity) pairs.
#[must_use]
pub fn fleet(pairs: &[(EntityId, u64)]) -> Fleet {
    pairs.iter().copied().collect()
}

/// Two small and two large cargos.
#[must_use]
pub fn cargo_fleet() -> Fleet {
    fleet(&[(EntityId::SMALL_CARGO, 2), (EntityId::LARGE_CARGO, 2)])
}

/// Sixteen light fighters, eight heavy fighters and four cruisers.
#[must_use]
pub fn fighter_fleet() -> Fleet {
    fleet(&[
        (EntityId::LIGHT_FIGHTER, 16),
        (EntityId::HEAVY_FIGHTER, 8),
        (EntityId::CRUISER, 4),
    ])
}

/// A closed universe: no wraparound, 499 systems.
#[must_use]
pub fn flat_universe(galaxies: u32, fleet_speed: u32) -> Ruleset {
    Ruleset {
        fleet_speed,
        galaxies,
        systems: 499,
        donut_galaxy: false,
        donut_system: false,
        ..Ruleset::default()
    }
}

/// Parse a RON fixture.
///
/// # Panics
///
/// Panics if the text is not valid RON for `T`.
#[must_use]
pub fn from_ron<T: DeserializeOwned>(text: &str) -> T {
    match ron::from_str(text) {
        Ok(value) => value,
        Err(e) => panic!("invalid RON fixture: {e}\n{text}"),
    }
}
