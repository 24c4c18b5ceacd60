//! Entity identifiers and the category classifier.
//!
//! Every constructible thing in the game has a stable numeric identifier.
//! The identifier alone decides which rule set applies to it: levelable
//! curves for buildings and technologies, flat per-unit prices for ships
//! and defenses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for any constructible entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

/// The five entity categories.
///
/// Resource buildings and facilities are both buildings; technologies
/// share their levelable cost curve. Ships and defenses are unit entities
/// bought by quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Mines, power plants and storage.
    ResourceBuilding,
    /// Infrastructure that speeds up or unlocks construction.
    Facility,
    /// Researched technology.
    Technology,
    /// Mobile unit.
    Ship,
    /// Stationary unit.
    Defense,
}

impl Category {
    /// Buildings are resource buildings and facilities.
    #[must_use]
    pub const fn is_building(self) -> bool {
        matches!(self, Self::ResourceBuilding | Self::Facility)
    }

    /// Levelable entities have a geometric cost curve.
    #[must_use]
    pub const fn is_levelable(self) -> bool {
        matches!(self, Self::ResourceBuilding | Self::Facility | Self::Technology)
    }

    /// Unit entities are priced per piece.
    #[must_use]
    pub const fn is_unit(self) -> bool {
        matches!(self, Self::Ship | Self::Defense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ResourceBuilding => "resource building",
            Self::Facility => "facility",
            Self::Technology => "technology",
            Self::Ship => "ship",
            Self::Defense => "defense",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Known identifiers
// ============================================================================

impl EntityId {
    /// Metal mine.
    pub const METAL_MINE: Self = Self(1);
    /// Crystal mine.
    pub const CRYSTAL_MINE: Self = Self(2);
    /// Deuterium synthesizer.
    pub const DEUTERIUM_SYNTHESIZER: Self = Self(3);
    /// Solar plant.
    pub const SOLAR_PLANT: Self = Self(4);
    /// Fusion reactor.
    pub const FUSION_REACTOR: Self = Self(12);
    /// Robotics factory.
    pub const ROBOTICS_FACTORY: Self = Self(14);
    /// Nanite factory.
    pub const NANITE_FACTORY: Self = Self(15);
    /// Shipyard.
    pub const SHIPYARD: Self = Self(21);
    /// Metal storage.
    pub const METAL_STORAGE: Self = Self(22);
    /// Crystal storage.
    pub const CRYSTAL_STORAGE: Self = Self(23);
    /// Deuterium tank.
    pub const DEUTERIUM_TANK: Self = Self(24);
    /// Shielded metal den.
    pub const SHIELDED_METAL_DEN: Self = Self(25);
    /// Underground crystal den.
    pub const UNDERGROUND_CRYSTAL_DEN: Self = Self(26);
    /// Seabed deuterium den.
    pub const SEABED_DEUTERIUM_DEN: Self = Self(27);
    /// Research lab.
    pub const RESEARCH_LAB: Self = Self(31);
    /// Terraformer.
    pub const TERRAFORMER: Self = Self(33);
    /// Alliance depot.
    pub const ALLIANCE_DEPOT: Self = Self(34);
    /// Space dock.
    pub const SPACE_DOCK: Self = Self(36);
    /// Lunar base.
    pub const LUNAR_BASE: Self = Self(41);
    /// Sensor phalanx.
    pub const SENSOR_PHALANX: Self = Self(42);
    /// Jump gate.
    pub const JUMP_GATE: Self = Self(43);
    /// Missile silo.
    pub const MISSILE_SILO: Self = Self(44);

    /// Espionage technology.
    pub const ESPIONAGE_TECHNOLOGY: Self = Self(106);
    /// Computer technology.
    pub const COMPUTER_TECHNOLOGY: Self = Self(108);
    /// Weapons technology.
    pub const WEAPONS_TECHNOLOGY: Self = Self(109);
    /// Shielding technology.
    pub const SHIELDING_TECHNOLOGY: Self = Self(110);
    /// Armour technology.
    pub const ARMOUR_TECHNOLOGY: Self = Self(111);
    /// Energy technology.
    pub const ENERGY_TECHNOLOGY: Self = Self(113);
    /// Hyperspace technology.
    pub const HYPERSPACE_TECHNOLOGY: Self = Self(114);
    /// Combustion drive.
    pub const COMBUSTION_DRIVE: Self = Self(115);
    /// Impulse drive.
    pub const IMPULSE_DRIVE: Self = Self(117);
    /// Hyperspace drive.
    pub const HYPERSPACE_DRIVE: Self = Self(118);
    /// Laser technology.
    pub const LASER_TECHNOLOGY: Self = Self(120);
    /// Ion technology.
    pub const ION_TECHNOLOGY: Self = Self(121);
    /// Plasma technology.
    pub const PLASMA_TECHNOLOGY: Self = Self(122);
    /// Intergalactic research network.
    pub const INTERGALACTIC_RESEARCH_NETWORK: Self = Self(123);
    /// Astrophysics.
    pub const ASTROPHYSICS: Self = Self(124);
    /// Graviton technology.
    pub const GRAVITON_TECHNOLOGY: Self = Self(199);

    /// Small cargo.
    pub const SMALL_CARGO: Self = Self(202);
    /// Large cargo.
    pub const LARGE_CARGO: Self = Self(203);
    /// Light fighter.
    pub const LIGHT_FIGHTER: Self = Self(204);
    /// Heavy fighter.
    pub const HEAVY_FIGHTER: Self = Self(205);
    /// Cruiser.
    pub const CRUISER: Self = Self(206);
    /// Battleship.
    pub const BATTLESHIP: Self = Self(207);
    /// Colony ship.
    pub const COLONY_SHIP: Self = Self(208);
    /// Recycler.
    pub const RECYCLER: Self = Self(209);
    /// Espionage probe.
    pub const ESPIONAGE_PROBE: Self = Self(210);
    /// Bomber.
    pub const BOMBER: Self = Self(211);
    /// Solar satellite.
    pub const SOLAR_SATELLITE: Self = Self(212);
    /// Destroyer.
    pub const DESTROYER: Self = Self(213);
    /// Deathstar.
    pub const DEATHSTAR: Self = Self(214);
    /// Battlecruiser.
    pub const BATTLECRUISER: Self = Self(215);
    /// Crawler.
    pub const CRAWLER: Self = Self(217);
    /// Reaper.
    pub const REAPER: Self = Self(218);
    /// Pathfinder.
    pub const PATHFINDER: Self = Self(219);

    /// Rocket launcher.
    pub const ROCKET_LAUNCHER: Self = Self(401);
    /// Light laser.
    pub const LIGHT_LASER: Self = Self(402);
    /// Heavy laser.
    pub const HEAVY_LASER: Self = Self(403);
    /// Gauss cannon.
    pub const GAUSS_CANNON: Self = Self(404);
    /// Ion cannon.
    pub const ION_CANNON: Self = Self(405);
    /// Plasma turret.
    pub const PLASMA_TURRET: Self = Self(406);
    /// Small shield dome.
    pub const SMALL_SHIELD_DOME: Self = Self(407);
    /// Large shield dome.
    pub const LARGE_SHIELD_DOME: Self = Self(408);
    /// Anti-ballistic missiles.
    pub const ANTI_BALLISTIC_MISSILES: Self = Self(502);
    /// Interplanetary missiles.
    pub const INTERPLANETARY_MISSILES: Self = Self(503);
}

/// All ships in canonical order.
pub const SHIPS: [EntityId; 17] = [
    EntityId::LIGHT_FIGHTER,
    EntityId::HEAVY_FIGHTER,
    EntityId::CRUISER,
    EntityId::BATTLESHIP,
    EntityId::BATTLECRUISER,
    EntityId::BOMBER,
    EntityId::DESTROYER,
    EntityId::DEATHSTAR,
    EntityId::SMALL_CARGO,
    EntityId::LARGE_CARGO,
    EntityId::COLONY_SHIP,
    EntityId::RECYCLER,
    EntityId::ESPIONAGE_PROBE,
    EntityId::SOLAR_SATELLITE,
    EntityId::CRAWLER,
    EntityId::REAPER,
    EntityId::PATHFINDER,
];

/// Combat ships. Class bonuses and battle simulators key off this set.
pub const COMBAT_SHIPS: [EntityId; 9] = [
    EntityId::LIGHT_FIGHTER,
    EntityId::HEAVY_FIGHTER,
    EntityId::CRUISER,
    EntityId::BATTLESHIP,
    EntityId::BATTLECRUISER,
    EntityId::BOMBER,
    EntityId::DESTROYER,
    EntityId::DEATHSTAR,
    EntityId::REAPER,
];

/// All defenses, missiles included.
pub const DEFENSES: [EntityId; 10] = [
    EntityId::ROCKET_LAUNCHER,
    EntityId::LIGHT_LASER,
    EntityId::HEAVY_LASER,
    EntityId::GAUSS_CANNON,
    EntityId::ION_CANNON,
    EntityId::PLASMA_TURRET,
    EntityId::SMALL_SHIELD_DOME,
    EntityId::LARGE_SHIELD_DOME,
    EntityId::ANTI_BALLISTIC_MISSILES,
    EntityId::INTERPLANETARY_MISSILES,
];

/// All technologies.
pub const TECHNOLOGIES: [EntityId; 16] = [
    EntityId::ENERGY_TECHNOLOGY,
    EntityId::LASER_TECHNOLOGY,
    EntityId::ION_TECHNOLOGY,
    EntityId::HYPERSPACE_TECHNOLOGY,
    EntityId::PLASMA_TECHNOLOGY,
    EntityId::COMBUSTION_DRIVE,
    EntityId::IMPULSE_DRIVE,
    EntityId::HYPERSPACE_DRIVE,
    EntityId::ESPIONAGE_TECHNOLOGY,
    EntityId::COMPUTER_TECHNOLOGY,
    EntityId::ASTROPHYSICS,
    EntityId::INTERGALACTIC_RESEARCH_NETWORK,
    EntityId::GRAVITON_TECHNOLOGY,
    EntityId::WEAPONS_TECHNOLOGY,
    EntityId::SHIELDING_TECHNOLOGY,
    EntityId::ARMOUR_TECHNOLOGY,
];

/// All resource buildings.
pub const RESOURCE_BUILDINGS: [EntityId; 11] = [
    EntityId::METAL_MINE,
    EntityId::CRYSTAL_MINE,
    EntityId::DEUTERIUM_SYNTHESIZER,
    EntityId::SOLAR_PLANT,
    EntityId::FUSION_REACTOR,
    EntityId::METAL_STORAGE,
    EntityId::CRYSTAL_STORAGE,
    EntityId::DEUTERIUM_TANK,
    EntityId::SHIELDED_METAL_DEN,
    EntityId::UNDERGROUND_CRYSTAL_DEN,
    EntityId::SEABED_DEUTERIUM_DEN,
];

/// All facilities.
pub const FACILITIES: [EntityId; 11] = [
    EntityId::ROBOTICS_FACTORY,
    EntityId::SHIPYARD,
    EntityId::RESEARCH_LAB,
    EntityId::ALLIANCE_DEPOT,
    EntityId::MISSILE_SILO,
    EntityId::NANITE_FACTORY,
    EntityId::TERRAFORMER,
    EntityId::SPACE_DOCK,
    EntityId::LUNAR_BASE,
    EntityId::SENSOR_PHALANX,
    EntityId::JUMP_GATE,
];

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Classify this identifier.
    ///
    /// Returns `None` for identifiers the game does not know.
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self.0 {
            1..=4 | 12 | 22..=27 => Some(Category::ResourceBuilding),
            14 | 15 | 21 | 31 | 33 | 34 | 36 | 41..=44 => Some(Category::Facility),
            106 | 108..=111 | 113..=115 | 117 | 118 | 120..=124 | 199 => {
                Some(Category::Technology)
            }
            202..=215 | 217..=219 => Some(Category::Ship),
            401..=408 | 502 | 503 => Some(Category::Defense),
            _ => None,
        }
    }

    /// Check if this is a ship.
    #[must_use]
    pub const fn is_ship(self) -> bool {
        matches!(self.category(), Some(Category::Ship))
    }

    /// Check if this is a ship that can be sent on a mission.
    #[must_use]
    pub const fn is_flyable(self) -> bool {
        self.is_ship() && self.0 != Self::SOLAR_SATELLITE.0 && self.0 != Self::CRAWLER.0
    }

    /// Check if this is one of the [`COMBAT_SHIPS`].
    #[must_use]
    pub fn is_combat_ship(self) -> bool {
        COMBAT_SHIPS.contains(&self)
    }

    /// Check if this is a defense.
    #[must_use]
    pub const fn is_defense(self) -> bool {
        matches!(self.category(), Some(Category::Defense))
    }

    /// Check if this is a technology.
    #[must_use]
    pub const fn is_technology(self) -> bool {
        matches!(self.category(), Some(Category::Technology))
    }

    /// Check if this is a resource building or a facility.
    #[must_use]
    pub const fn is_building(self) -> bool {
        match self.category() {
            Some(category) => category.is_building(),
            None => false,
        }
    }

    /// English display name.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            1 => "Metal Mine",
            2 => "Crystal Mine",
            3 => "Deuterium Synthesizer",
            4 => "Solar Plant",
            12 => "Fusion Reactor",
            14 => "Robotics Factory",
            15 => "Nanite Factory",
            21 => "Shipyard",
            22 => "Metal Storage",
            23 => "Crystal Storage",
            24 => "Deuterium Tank",
            25 => "Shielded Metal Den",
            26 => "Underground Crystal Den",
            27 => "Seabed Deuterium Den",
            31 => "Research Lab",
            33 => "Terraformer",
            34 => "Alliance Depot",
            36 => "Space Dock",
            41 => "Lunar Base",
            42 => "Sensor Phalanx",
            43 => "Jump Gate",
            44 => "Missile Silo",
            106 => "Espionage Technology",
            108 => "Computer Technology",
            109 => "Weapons Technology",
            110 => "Shielding Technology",
            111 => "Armour Technology",
            113 => "Energy Technology",
            114 => "Hyperspace Technology",
            115 => "Combustion Drive",
            117 => "Impulse Drive",
            118 => "Hyperspace Drive",
            120 => "Laser Technology",
            121 => "Ion Technology",
            122 => "Plasma Technology",
            123 => "Intergalactic Research Network",
            124 => "Astrophysics",
            199 => "Graviton Technology",
            202 => "Small Cargo",
            203 => "Large Cargo",
            204 => "Light Fighter",
            205 => "Heavy Fighter",
            206 => "Cruiser",
            207 => "Battleship",
            208 => "Colony Ship",
            209 => "Recycler",
            210 => "Espionage Probe",
            211 => "Bomber",
            212 => "Solar Satellite",
            213 => "Destroyer",
            214 => "Deathstar",
            215 => "Battlecruiser",
            217 => "Crawler",
            218 => "Reaper",
            219 => "Pathfinder",
            401 => "Rocket Launcher",
            402 => "Light Laser",
            403 => "Heavy Laser",
            404 => "Gauss Cannon",
            405 => "Ion Cannon",
            406 => "Plasma Turret",
            407 => "Small Shield Dome",
            408 => "Large Shield Dome",
            502 => "Anti-Ballistic Missiles",
            503 => "Interplanetary Missiles",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{}", self.0),
        }
    }
}
