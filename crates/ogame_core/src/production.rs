//! Resource production, energy and storage curves.
//!
//! Hourly rates for a body with the given building levels. `ratio` is the
//! production factor a player sets on a building, 1.0 for full output.

use crate::config::Ruleset;
use crate::ids::EntityId;
use crate::resources::Resources;
use crate::state::StateSnapshot;

/// Deuterium one sensor phalanx scan costs.
pub const PHALANX_SCAN_COST: Resources = Resources::new(0, 0, 5000);

/// Per-level growth of mines and power plants.
const MINE_GROWTH: f64 = 1.1;

fn grown(coefficient: f64, level: u32) -> f64 {
    coefficient * f64::from(level) * MINE_GROWTH.powf(f64::from(level))
}

/// Capacity of a metal storage, crystal storage or deuterium tank.
#[must_use]
pub fn storage_capacity(level: u32) -> i64 {
    let steps = (2.5 * (20.0 * f64::from(level) / 33.0).exp()).floor();
    5000 * steps as i64
}

/// Metal mine output, basic income included.
#[must_use]
pub fn metal_production(level: u32, economy_speed: u32, ratio: f64) -> i64 {
    let basic = 30.0 * f64::from(economy_speed);
    let from_level = basic * f64::from(level) * MINE_GROWTH.powf(f64::from(level));
    (from_level * ratio + basic) as i64
}

/// Crystal mine output, basic income included.
#[must_use]
pub fn crystal_production(level: u32, economy_speed: u32, ratio: f64) -> i64 {
    let speed = f64::from(economy_speed);
    let from_level = grown(20.0, level) * speed;
    (from_level * ratio + 15.0 * speed) as i64
}

/// Deuterium synthesizer output. Colder planets produce more.
#[must_use]
pub fn deuterium_production(
    level: u32,
    economy_speed: u32,
    max_temperature: i32,
    ratio: f64,
) -> i64 {
    let climate = 1.44 - 0.004 * f64::from(max_temperature);
    (grown(10.0, level) * climate * f64::from(economy_speed) * ratio).round() as i64
}

/// Energy drawn by a mine, `None` for anything else.
#[must_use]
pub fn energy_consumption(mine: EntityId, level: u32) -> Option<i64> {
    let coefficient = match mine {
        EntityId::METAL_MINE | EntityId::CRYSTAL_MINE => 10.0,
        EntityId::DEUTERIUM_SYNTHESIZER => 20.0,
        _ => return None,
    };
    Some(grown(coefficient, level).ceil() as i64)
}

/// Energy from the solar plant.
#[must_use]
pub fn solar_plant_production(level: u32) -> i64 {
    grown(20.0, level).floor() as i64
}

/// Energy from the fusion reactor; energy technology raises the growth.
#[must_use]
pub fn fusion_reactor_production(level: u32, energy_technology: u32) -> i64 {
    let growth = 1.05 + f64::from(energy_technology) * 0.01;
    let level = f64::from(level);
    (30.0 * level * growth.powf(level)).round() as i64
}

/// Deuterium burnt by the fusion reactor.
#[must_use]
pub fn fusion_reactor_consumption(level: u32, economy_speed: u32, ratio: f64) -> i64 {
    (10.0 * f64::from(economy_speed) * grown(1.0, level) * ratio).ceil() as i64
}

/// Systems a sensor phalanx reaches on each side.
#[must_use]
pub fn phalanx_range(level: u32) -> u32 {
    match level {
        0 => 0,
        1 => 1,
        _ => level * level - 1,
    }
}

/// Hourly output of a body at full ratio.
///
/// Deuterium is net of the fusion reactor and energy is the balance of
/// the power plants against the mines.
#[must_use]
pub fn hourly_production(
    state: &StateSnapshot,
    rules: &Ruleset,
    max_temperature: i32,
) -> Resources {
    let buildings = &state.resource_buildings;
    let speed = rules.economy_speed;
    let level = |id| buildings.level(id);

    let fusion = level(EntityId::FUSION_REACTOR);
    let mines = [
        EntityId::METAL_MINE,
        EntityId::CRYSTAL_MINE,
        EntityId::DEUTERIUM_SYNTHESIZER,
    ];
    let drawn: i64 = mines
        .into_iter()
        .filter_map(|mine| energy_consumption(mine, level(mine)))
        .sum();
    let produced = solar_plant_production(level(EntityId::SOLAR_PLANT))
        + fusion_reactor_production(fusion, state.researches.level(EntityId::ENERGY_TECHNOLOGY));

    Resources::new(
        metal_production(level(EntityId::METAL_MINE), speed, 1.0),
        crystal_production(level(EntityId::CRYSTAL_MINE), speed, 1.0),
        deuterium_production(level(EntityId::DEUTERIUM_SYNTHESIZER), speed, max_temperature, 1.0)
            - fusion_reactor_consumption(fusion, speed, 1.0),
    )
    .with_energy(produced - drawn)
}

/// Storage capacity of a body, per resource.
#[must_use]
pub fn storage(state: &StateSnapshot) -> Resources {
    let buildings = &state.resource_buildings;
    Resources::new(
        storage_capacity(buildings.level(EntityId::METAL_STORAGE)),
        storage_capacity(buildings.level(EntityId::CRYSTAL_STORAGE)),
        storage_capacity(buildings.level(EntityId::DEUTERIUM_TANK)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::CelestialType;

    #[test]
    fn test_storage_capacity() {
        let capacities: Vec<i64> = (0..=5).map(storage_capacity).collect();
        assert_eq!(capacities, vec![10_000, 20_000, 40_000, 75_000, 140_000, 255_000]);
    }

    #[test]
    fn test_metal_production() {
        assert_eq!(metal_production(0, 1, 1.0), 30);
        assert_eq!(metal_production(1, 1, 1.0), 63);
        assert_eq!(metal_production(0, 4, 1.0), 120);
        assert_eq!(metal_production(1, 4, 1.0), 252);
        assert_eq!(metal_production(29, 7, 1.0), 96_606 + 210);
    }

    #[test]
    fn test_crystal_production() {
        assert_eq!(crystal_production(0, 1, 1.0), 15);
        assert_eq!(crystal_production(25, 7, 1.0), 37_921 + 105);
    }

    #[test]
    fn test_ratio_does_not_touch_basic_income() {
        assert_eq!(metal_production(29, 7, 0.0), 210);
        assert_eq!(crystal_production(25, 7, 0.0), 105);
    }

    #[test]
    fn test_deuterium_production() {
        assert_eq!(deuterium_production(0, 1, 20, 1.0), 0);
        assert_eq!(deuterium_production(1, 1, 20, 1.0), 15);
        assert_eq!(deuterium_production(10, 1, 40, 1.0), 332);
    }

    #[test]
    fn test_energy_consumption() {
        assert_eq!(energy_consumption(EntityId::METAL_MINE, 29), Some(4601));
        assert_eq!(energy_consumption(EntityId::CRYSTAL_MINE, 16), Some(736));
        assert_eq!(energy_consumption(EntityId::DEUTERIUM_SYNTHESIZER, 26), Some(6198));
        assert_eq!(energy_consumption(EntityId::SOLAR_PLANT, 10), None);
    }

    #[test]
    fn test_power_plants() {
        assert_eq!(solar_plant_production(29), 9200);
        assert_eq!(fusion_reactor_production(13, 12), 3002);
        assert_eq!(fusion_reactor_consumption(9, 7, 1.0), 1486);
        assert_eq!(fusion_reactor_consumption(9, 7, 0.7), 1040);
    }

    #[test]
    fn test_phalanx_range() {
        let ranges: Vec<u32> = (0..=4).map(phalanx_range).collect();
        assert_eq!(ranges, vec![0, 1, 3, 8, 15]);
        assert_eq!(PHALANX_SCAN_COST.deuterium, 5000);
    }

    #[test]
    fn test_hourly_production() {
        let state = StateSnapshot::new(CelestialType::Planet)
            .with_level(EntityId::METAL_MINE, 29)
            .with_level(EntityId::CRYSTAL_MINE, 16)
            .with_level(EntityId::SOLAR_PLANT, 29);
        let rules = Ruleset {
            economy_speed: 7,
            ..Ruleset::default()
        };
        let output = hourly_production(&state, &rules, 20);
        assert_eq!(output.metal, 96_816);
        assert_eq!(output.crystal, crystal_production(16, 7, 1.0));
        assert_eq!(output.deuterium, 0);
        assert_eq!(output.energy, 9200 - 4601 - 736);
    }

    #[test]
    fn test_storage() {
        let state = StateSnapshot::new(CelestialType::Moon)
            .with_level(EntityId::METAL_STORAGE, 3)
            .with_level(EntityId::DEUTERIUM_TANK, 1);
        assert_eq!(storage(&state), Resources::new(75_000, 10_000, 20_000));
    }
}
