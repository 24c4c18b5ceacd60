//! Reference constants of the standard game.

use super::{Catalog, CombatStats, DefenseData, LevelableData, Mobility, Placement, ShipData};
use crate::config::CharacterClass;
use crate::ids::{Category, EntityId as Id};
use crate::resources::Resources;

impl Catalog {
    /// Catalog with the constants of the standard game.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for data in buildings().into_iter().chain(technologies()) {
            catalog.register_levelable(data);
        }
        for data in ships() {
            catalog.register_ship(data);
        }
        for data in defenses() {
            catalog.register_defense(data);
        }
        catalog.link_rapidfire();
        catalog
    }

    /// Mirror every `rapidfire_against` entry into the target's
    /// `rapidfire_from`.
    fn link_rapidfire(&mut self) {
        let mut links = Vec::new();
        for ship in self.ships.values() {
            links.extend(
                ship.combat
                    .rapidfire_against
                    .iter()
                    .map(|(target, shots)| (ship.id, *target, *shots)),
            );
        }
        for defense in self.defenses.values() {
            links.extend(
                defense
                    .combat
                    .rapidfire_against
                    .iter()
                    .map(|(target, shots)| (defense.id, *target, *shots)),
            );
        }

        for (attacker, target, shots) in links {
            let combat = if let Some(ship) = self.ships.get_mut(&target) {
                &mut ship.combat
            } else if let Some(defense) = self.defenses.get_mut(&target) {
                &mut defense.combat
            } else {
                continue;
            };
            combat.rapidfire_from.insert(attacker, shots);
        }
    }
}

fn building(
    id: Id,
    category: Category,
    cost: Resources,
    factor: f64,
    placement: Placement,
) -> LevelableData {
    let name = id.name().unwrap_or_default();
    LevelableData::new(id, name, category, cost, factor).placed(placement)
}

fn buildings() -> Vec<LevelableData> {
    use Category::{Facility, ResourceBuilding};
    use Placement::{Anywhere, MoonOnly, PlanetOnly};

    vec![
        building(Id::METAL_MINE, ResourceBuilding, Resources::new(60, 15, 0), 1.5, PlanetOnly),
        building(Id::CRYSTAL_MINE, ResourceBuilding, Resources::new(48, 24, 0), 1.6, PlanetOnly),
        building(
            Id::DEUTERIUM_SYNTHESIZER,
            ResourceBuilding,
            Resources::new(225, 75, 0),
            1.5,
            PlanetOnly,
        ),
        building(Id::SOLAR_PLANT, ResourceBuilding, Resources::new(75, 30, 0), 1.5, PlanetOnly),
        building(
            Id::FUSION_REACTOR,
            ResourceBuilding,
            Resources::new(900, 360, 180),
            1.8,
            PlanetOnly,
        )
        .requires(Id::DEUTERIUM_SYNTHESIZER, 5)
        .requires(Id::ENERGY_TECHNOLOGY, 3),
        building(Id::METAL_STORAGE, ResourceBuilding, Resources::new(1000, 0, 0), 2.0, Anywhere),
        building(
            Id::CRYSTAL_STORAGE,
            ResourceBuilding,
            Resources::new(1000, 500, 0),
            2.0,
            Anywhere,
        ),
        building(
            Id::DEUTERIUM_TANK,
            ResourceBuilding,
            Resources::new(1000, 1000, 0),
            2.0,
            Anywhere,
        ),
        building(
            Id::SHIELDED_METAL_DEN,
            ResourceBuilding,
            Resources::new(2645, 0, 0),
            2.3,
            Anywhere,
        ),
        building(
            Id::UNDERGROUND_CRYSTAL_DEN,
            ResourceBuilding,
            Resources::new(2645, 1322, 0),
            2.3,
            Anywhere,
        ),
        building(
            Id::SEABED_DEUTERIUM_DEN,
            ResourceBuilding,
            Resources::new(2645, 2645, 0),
            2.3,
            Anywhere,
        ),
        building(Id::ROBOTICS_FACTORY, Facility, Resources::new(400, 120, 200), 2.0, Anywhere),
        building(Id::SHIPYARD, Facility, Resources::new(400, 200, 100), 2.0, Anywhere)
            .requires(Id::ROBOTICS_FACTORY, 2),
        building(Id::RESEARCH_LAB, Facility, Resources::new(200, 400, 200), 2.0, PlanetOnly),
        building(Id::ALLIANCE_DEPOT, Facility, Resources::new(20_000, 40_000, 0), 2.0, PlanetOnly),
        building(
            Id::MISSILE_SILO,
            Facility,
            Resources::new(20_000, 20_000, 1000),
            2.0,
            PlanetOnly,
        )
        .requires(Id::SHIPYARD, 1),
        building(
            Id::NANITE_FACTORY,
            Facility,
            Resources::new(1_000_000, 500_000, 100_000),
            2.0,
            PlanetOnly,
        )
        .requires(Id::ROBOTICS_FACTORY, 10)
        .requires(Id::COMPUTER_TECHNOLOGY, 10),
        building(
            Id::TERRAFORMER,
            Facility,
            Resources::new(0, 50_000, 100_000).with_energy(1000),
            2.0,
            PlanetOnly,
        )
        .requires(Id::NANITE_FACTORY, 1)
        .requires(Id::ENERGY_TECHNOLOGY, 12),
        building(
            Id::SPACE_DOCK,
            Facility,
            Resources::new(200, 0, 50).with_energy(50),
            5.0,
            PlanetOnly,
        )
        .with_energy_factor(2.5)
        .requires(Id::SHIPYARD, 2),
        building(Id::LUNAR_BASE, Facility, Resources::new(20_000, 40_000, 20_000), 2.0, MoonOnly),
        building(
            Id::SENSOR_PHALANX,
            Facility,
            Resources::new(20_000, 40_000, 20_000),
            2.0,
            MoonOnly,
        )
        .requires(Id::LUNAR_BASE, 1),
        building(
            Id::JUMP_GATE,
            Facility,
            Resources::new(2_000_000, 4_000_000, 0),
            2.0,
            MoonOnly,
        )
        .requires(Id::LUNAR_BASE, 1)
        .requires(Id::HYPERSPACE_TECHNOLOGY, 7),
    ]
}

fn technology(id: Id, cost: Resources, factor: f64) -> LevelableData {
    building(id, Category::Technology, cost, factor, Placement::PlanetOnly)
}

fn technologies() -> Vec<LevelableData> {
    vec![
        technology(Id::ENERGY_TECHNOLOGY, Resources::new(0, 800, 400), 2.0)
            .requires(Id::RESEARCH_LAB, 1),
        technology(Id::LASER_TECHNOLOGY, Resources::new(200, 100, 0), 2.0)
            .requires(Id::ENERGY_TECHNOLOGY, 2),
        technology(Id::ION_TECHNOLOGY, Resources::new(1000, 300, 100), 2.0)
            .requires(Id::RESEARCH_LAB, 4)
            .requires(Id::ENERGY_TECHNOLOGY, 4)
            .requires(Id::LASER_TECHNOLOGY, 5),
        technology(Id::HYPERSPACE_TECHNOLOGY, Resources::new(0, 4000, 2000), 2.0)
            .requires(Id::RESEARCH_LAB, 7)
            .requires(Id::SHIELDING_TECHNOLOGY, 5)
            .requires(Id::ENERGY_TECHNOLOGY, 5),
        technology(Id::PLASMA_TECHNOLOGY, Resources::new(2000, 4000, 1000), 2.0)
            .requires(Id::ION_TECHNOLOGY, 5)
            .requires(Id::ENERGY_TECHNOLOGY, 8)
            .requires(Id::LASER_TECHNOLOGY, 10),
        technology(Id::COMBUSTION_DRIVE, Resources::new(400, 0, 600), 2.0)
            .requires(Id::ENERGY_TECHNOLOGY, 1),
        technology(Id::IMPULSE_DRIVE, Resources::new(2000, 4000, 600), 2.0)
            .requires(Id::RESEARCH_LAB, 2)
            .requires(Id::ENERGY_TECHNOLOGY, 1),
        technology(Id::HYPERSPACE_DRIVE, Resources::new(10_000, 20_000, 6000), 2.0)
            .requires(Id::HYPERSPACE_TECHNOLOGY, 3),
        technology(Id::ESPIONAGE_TECHNOLOGY, Resources::new(200, 1000, 200), 2.0)
            .requires(Id::RESEARCH_LAB, 3),
        technology(Id::COMPUTER_TECHNOLOGY, Resources::new(0, 400, 600), 2.0)
            .requires(Id::RESEARCH_LAB, 1),
        technology(Id::ASTROPHYSICS, Resources::new(4000, 8000, 4000), 1.75)
            .requires(Id::ESPIONAGE_TECHNOLOGY, 4)
            .requires(Id::IMPULSE_DRIVE, 3),
        technology(
            Id::INTERGALACTIC_RESEARCH_NETWORK,
            Resources::new(240_000, 400_000, 160_000),
            2.0,
        )
        .requires(Id::RESEARCH_LAB, 10)
        .requires(Id::COMPUTER_TECHNOLOGY, 8)
        .requires(Id::HYPERSPACE_TECHNOLOGY, 8),
        technology(
            Id::GRAVITON_TECHNOLOGY,
            Resources::ZERO.with_energy(300_000),
            3.0,
        )
        .requires(Id::RESEARCH_LAB, 12)
        .with_energy_gate(300_000),
        technology(Id::WEAPONS_TECHNOLOGY, Resources::new(800, 200, 0), 2.0)
            .requires(Id::RESEARCH_LAB, 4),
        technology(Id::SHIELDING_TECHNOLOGY, Resources::new(200, 600, 0), 2.0)
            .requires(Id::RESEARCH_LAB, 6)
            .requires(Id::ENERGY_TECHNOLOGY, 3),
        technology(Id::ARMOUR_TECHNOLOGY, Resources::new(1000, 0, 0), 2.0)
            .requires(Id::RESEARCH_LAB, 2),
    ]
}

/// Base stats shared by the ship table: integrity, shield, weapon,
/// cargo, speed, fuel consumption.
struct ShipStats(i64, i64, i64, i64, i64, i64);

fn ship(
    id: Id,
    price: Resources,
    stats: ShipStats,
    requirements: &[(Id, u32)],
    rapidfire_against: &[(Id, u32)],
) -> ShipData {
    let ShipStats(integrity, shield, weapon, cargo, speed, fuel) = stats;
    let mut combat = CombatStats::new(integrity, shield, weapon);
    combat.rapidfire_against = rapidfire_against.iter().copied().collect();
    ShipData {
        id,
        name: id.name().unwrap_or_default().to_string(),
        price,
        combat,
        mobility: Mobility {
            base_speed: speed,
            cargo_capacity: cargo,
            fuel_consumption: fuel,
            fuel_capacity: cargo,
        },
        requirements: requirements.iter().copied().collect(),
        required_class: None,
    }
}

const FODDER: [(Id, u32); 3] = [
    (Id::ESPIONAGE_PROBE, 5),
    (Id::SOLAR_SATELLITE, 5),
    (Id::CRAWLER, 5),
];

fn with_fodder(extra: &[(Id, u32)]) -> Vec<(Id, u32)> {
    FODDER.iter().chain(extra).copied().collect()
}

fn ships() -> Vec<ShipData> {
    let mut reaper = ship(
        Id::REAPER,
        Resources::new(85_000, 55_000, 20_000),
        ShipStats(140_000, 700, 2800, 10_000, 7000, 1100),
        &[
            (Id::SHIPYARD, 10),
            (Id::HYPERSPACE_TECHNOLOGY, 6),
            (Id::HYPERSPACE_DRIVE, 7),
            (Id::SHIELDING_TECHNOLOGY, 6),
        ],
        &with_fodder(&[
            (Id::BATTLESHIP, 7),
            (Id::BATTLECRUISER, 7),
            (Id::BOMBER, 4),
            (Id::DESTROYER, 3),
        ]),
    );
    reaper.required_class = Some(CharacterClass::General);

    let mut pathfinder = ship(
        Id::PATHFINDER,
        Resources::new(8000, 15_000, 8000),
        ShipStats(23_000, 100, 200, 10_000, 12_000, 300),
        &[(Id::SHIPYARD, 5), (Id::HYPERSPACE_DRIVE, 2)],
        &with_fodder(&[
            (Id::CRUISER, 3),
            (Id::LIGHT_FIGHTER, 3),
            (Id::HEAVY_FIGHTER, 2),
        ]),
    );
    pathfinder.required_class = Some(CharacterClass::Discoverer);

    let mut crawler = ship(
        Id::CRAWLER,
        Resources::new(2000, 2000, 1000),
        ShipStats(4000, 1, 1, 0, 0, 0),
        &[
            (Id::SHIPYARD, 5),
            (Id::COMBUSTION_DRIVE, 4),
            (Id::ARMOUR_TECHNOLOGY, 4),
            (Id::LASER_TECHNOLOGY, 4),
        ],
        &[],
    );
    crawler.required_class = Some(CharacterClass::Collector);

    vec![
        ship(
            Id::SMALL_CARGO,
            Resources::new(2000, 2000, 0),
            ShipStats(4000, 10, 5, 5000, 5000, 10),
            &[(Id::SHIPYARD, 2), (Id::COMBUSTION_DRIVE, 2)],
            &FODDER,
        ),
        ship(
            Id::LARGE_CARGO,
            Resources::new(6000, 6000, 0),
            ShipStats(12_000, 25, 5, 25_000, 7500, 50),
            &[(Id::SHIPYARD, 4), (Id::COMBUSTION_DRIVE, 6)],
            &FODDER,
        ),
        ship(
            Id::LIGHT_FIGHTER,
            Resources::new(3000, 1000, 0),
            ShipStats(4000, 10, 50, 50, 12_500, 20),
            &[(Id::SHIPYARD, 1), (Id::COMBUSTION_DRIVE, 1)],
            &FODDER,
        ),
        ship(
            Id::HEAVY_FIGHTER,
            Resources::new(6000, 4000, 0),
            ShipStats(10_000, 25, 150, 100, 10_000, 75),
            &[
                (Id::SHIPYARD, 3),
                (Id::IMPULSE_DRIVE, 2),
                (Id::ARMOUR_TECHNOLOGY, 2),
            ],
            &with_fodder(&[(Id::SMALL_CARGO, 3)]),
        ),
        ship(
            Id::CRUISER,
            Resources::new(20_000, 7000, 2000),
            ShipStats(27_000, 50, 400, 800, 15_000, 300),
            &[
                (Id::SHIPYARD, 5),
                (Id::IMPULSE_DRIVE, 4),
                (Id::ION_TECHNOLOGY, 2),
            ],
            &with_fodder(&[(Id::LIGHT_FIGHTER, 6), (Id::ROCKET_LAUNCHER, 10)]),
        ),
        ship(
            Id::BATTLESHIP,
            Resources::new(45_000, 15_000, 0),
            ShipStats(60_000, 200, 1000, 1500, 10_000, 500),
            &[(Id::SHIPYARD, 7), (Id::HYPERSPACE_DRIVE, 4)],
            &with_fodder(&[(Id::PATHFINDER, 5)]),
        ),
        ship(
            Id::COLONY_SHIP,
            Resources::new(10_000, 20_000, 10_000),
            ShipStats(30_000, 100, 50, 7500, 2500, 1000),
            &[(Id::SHIPYARD, 4), (Id::IMPULSE_DRIVE, 3)],
            &FODDER,
        ),
        ship(
            Id::RECYCLER,
            Resources::new(10_000, 6000, 2000),
            ShipStats(16_000, 10, 1, 20_000, 2000, 300),
            &[
                (Id::SHIPYARD, 4),
                (Id::COMBUSTION_DRIVE, 6),
                (Id::SHIELDING_TECHNOLOGY, 2),
            ],
            &FODDER,
        ),
        ship(
            Id::ESPIONAGE_PROBE,
            Resources::new(0, 1000, 0),
            ShipStats(1000, 0, 0, 5, 100_000_000, 1),
            &[
                (Id::SHIPYARD, 3),
                (Id::COMBUSTION_DRIVE, 3),
                (Id::ESPIONAGE_TECHNOLOGY, 2),
            ],
            &[],
        ),
        ship(
            Id::BOMBER,
            Resources::new(50_000, 25_000, 15_000),
            ShipStats(75_000, 500, 1000, 500, 4000, 1000),
            &[
                (Id::IMPULSE_DRIVE, 6),
                (Id::SHIPYARD, 8),
                (Id::PLASMA_TECHNOLOGY, 5),
            ],
            &with_fodder(&[
                (Id::ROCKET_LAUNCHER, 20),
                (Id::LIGHT_LASER, 20),
                (Id::HEAVY_LASER, 10),
                (Id::ION_CANNON, 10),
                (Id::GAUSS_CANNON, 5),
                (Id::PLASMA_TURRET, 5),
            ]),
        ),
        ship(
            Id::SOLAR_SATELLITE,
            Resources::new(0, 2000, 500),
            ShipStats(2000, 1, 1, 0, 0, 0),
            &[(Id::SHIPYARD, 1)],
            &[],
        ),
        ship(
            Id::DESTROYER,
            Resources::new(60_000, 50_000, 15_000),
            ShipStats(110_000, 500, 2000, 2000, 5000, 1000),
            &[
                (Id::SHIPYARD, 9),
                (Id::HYPERSPACE_DRIVE, 6),
                (Id::HYPERSPACE_TECHNOLOGY, 5),
            ],
            &with_fodder(&[(Id::LIGHT_LASER, 10), (Id::BATTLECRUISER, 2)]),
        ),
        ship(
            Id::DEATHSTAR,
            Resources::new(5_000_000, 4_000_000, 1_000_000),
            ShipStats(9_000_000, 50_000, 200_000, 1_000_000, 100, 1),
            &[
                (Id::SHIPYARD, 12),
                (Id::GRAVITON_TECHNOLOGY, 1),
                (Id::HYPERSPACE_DRIVE, 7),
                (Id::HYPERSPACE_TECHNOLOGY, 6),
            ],
            &[
                (Id::SMALL_CARGO, 250),
                (Id::LARGE_CARGO, 250),
                (Id::LIGHT_FIGHTER, 200),
                (Id::HEAVY_FIGHTER, 100),
                (Id::CRUISER, 33),
                (Id::BATTLESHIP, 30),
                (Id::COLONY_SHIP, 250),
                (Id::RECYCLER, 250),
                (Id::ESPIONAGE_PROBE, 1250),
                (Id::SOLAR_SATELLITE, 1250),
                (Id::BOMBER, 25),
                (Id::DESTROYER, 5),
                (Id::ROCKET_LAUNCHER, 200),
                (Id::LIGHT_LASER, 200),
                (Id::HEAVY_LASER, 100),
                (Id::GAUSS_CANNON, 50),
                (Id::ION_CANNON, 100),
                (Id::BATTLECRUISER, 15),
                (Id::CRAWLER, 1250),
                (Id::PATHFINDER, 30),
                (Id::REAPER, 10),
            ],
        ),
        ship(
            Id::BATTLECRUISER,
            Resources::new(30_000, 40_000, 15_000),
            ShipStats(70_000, 400, 700, 750, 10_000, 250),
            &[
                (Id::LASER_TECHNOLOGY, 12),
                (Id::HYPERSPACE_TECHNOLOGY, 5),
                (Id::HYPERSPACE_DRIVE, 5),
                (Id::SHIPYARD, 8),
            ],
            &with_fodder(&[
                (Id::SMALL_CARGO, 3),
                (Id::LARGE_CARGO, 3),
                (Id::HEAVY_FIGHTER, 4),
                (Id::CRUISER, 4),
                (Id::BATTLESHIP, 7),
            ]),
        ),
        crawler,
        reaper,
        pathfinder,
    ]
}

fn defense(
    id: Id,
    price: Resources,
    (integrity, shield, weapon): (i64, i64, i64),
    requirements: &[(Id, u32)],
) -> DefenseData {
    DefenseData {
        id,
        name: id.name().unwrap_or_default().to_string(),
        price,
        combat: CombatStats::new(integrity, shield, weapon),
        requirements: requirements.iter().copied().collect(),
    }
}

fn defenses() -> Vec<DefenseData> {
    let mut ion_cannon = defense(
        Id::ION_CANNON,
        Resources::new(2000, 6000, 0),
        (8000, 500, 150),
        &[(Id::SHIPYARD, 4), (Id::ION_TECHNOLOGY, 4)],
    );
    ion_cannon.combat.rapidfire_against.insert(Id::REAPER, 2);

    vec![
        defense(
            Id::ROCKET_LAUNCHER,
            Resources::new(2000, 0, 0),
            (2000, 20, 80),
            &[(Id::SHIPYARD, 1)],
        ),
        defense(
            Id::LIGHT_LASER,
            Resources::new(1500, 500, 0),
            (2000, 25, 100),
            &[(Id::SHIPYARD, 2), (Id::LASER_TECHNOLOGY, 3)],
        ),
        defense(
            Id::HEAVY_LASER,
            Resources::new(6000, 2000, 0),
            (8000, 100, 250),
            &[
                (Id::SHIPYARD, 4),
                (Id::ENERGY_TECHNOLOGY, 3),
                (Id::LASER_TECHNOLOGY, 6),
            ],
        ),
        defense(
            Id::GAUSS_CANNON,
            Resources::new(20_000, 15_000, 2000),
            (35_000, 200, 1100),
            &[
                (Id::SHIPYARD, 6),
                (Id::WEAPONS_TECHNOLOGY, 3),
                (Id::ENERGY_TECHNOLOGY, 6),
                (Id::SHIELDING_TECHNOLOGY, 1),
            ],
        ),
        ion_cannon,
        defense(
            Id::PLASMA_TURRET,
            Resources::new(50_000, 50_000, 30_000),
            (100_000, 300, 3000),
            &[(Id::SHIPYARD, 8), (Id::PLASMA_TECHNOLOGY, 7)],
        ),
        defense(
            Id::SMALL_SHIELD_DOME,
            Resources::new(10_000, 10_000, 0),
            (20_000, 2000, 1),
            &[(Id::SHIPYARD, 1), (Id::SHIELDING_TECHNOLOGY, 2)],
        ),
        defense(
            Id::LARGE_SHIELD_DOME,
            Resources::new(50_000, 50_000, 0),
            (100_000, 10_000, 1),
            &[(Id::SHIPYARD, 6), (Id::SHIELDING_TECHNOLOGY, 6)],
        ),
        defense(
            Id::ANTI_BALLISTIC_MISSILES,
            Resources::new(8000, 0, 2000),
            (8000, 1, 1),
            &[(Id::MISSILE_SILO, 2)],
        ),
        defense(
            Id::INTERPLANETARY_MISSILES,
            Resources::new(12_500, 2500, 10_000),
            (15_000, 1, 12_000),
            &[(Id::MISSILE_SILO, 4), (Id::IMPULSE_DRIVE, 1)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{DEFENSES, FACILITIES, RESOURCE_BUILDINGS, SHIPS, TECHNOLOGIES};

    #[test]
    fn test_standard_catalog_is_complete() {
        let catalog = Catalog::standard();
        for id in RESOURCE_BUILDINGS
            .iter()
            .chain(&FACILITIES)
            .chain(&TECHNOLOGIES)
            .chain(&SHIPS)
            .chain(&DEFENSES)
        {
            assert!(catalog.contains(*id), "missing {id}");
        }
        assert_eq!(catalog.len(), 65);
    }

    #[test]
    fn test_standard_catalog_is_valid() {
        let errors = Catalog::standard().validate();
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_rapidfire_is_mirrored() {
        let catalog = Catalog::standard();
        let cruiser = catalog.ship(Id::CRUISER).unwrap();
        assert_eq!(cruiser.combat.rapidfire_against(Id::LIGHT_FIGHTER), 6);
        assert_eq!(cruiser.combat.rapidfire_against(Id::ROCKET_LAUNCHER), 10);

        let launcher = catalog.get_defense(Id::ROCKET_LAUNCHER).unwrap();
        assert_eq!(launcher.combat.rapidfire_from(Id::CRUISER), 10);
        assert_eq!(launcher.combat.rapidfire_from(Id::BOMBER), 20);
        assert_eq!(launcher.combat.rapidfire_from(Id::DEATHSTAR), 200);

        let reaper = catalog.ship(Id::REAPER).unwrap();
        assert_eq!(reaper.combat.rapidfire_from(Id::DEATHSTAR), 10);
        assert_eq!(reaper.combat.rapidfire_from(Id::ION_CANNON), 2);
    }

    #[test]
    fn test_class_ships() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.ship(Id::REAPER).unwrap().required_class,
            Some(CharacterClass::General)
        );
        assert_eq!(
            catalog.ship(Id::CRAWLER).unwrap().required_class,
            Some(CharacterClass::Collector)
        );
        assert_eq!(catalog.ship(Id::SMALL_CARGO).unwrap().required_class, None);
    }

    #[test]
    fn test_standard_round_trips_through_ron() {
        let catalog = Catalog::standard();
        let parsed = Catalog::from_ron(&catalog.to_ron().unwrap()).unwrap();
        assert_eq!(parsed.len(), catalog.len());
        assert_eq!(parsed.ship(Id::DEATHSTAR).unwrap(), catalog.ship(Id::DEATHSTAR).unwrap());
    }
}
