//! Research-adjusted unit capabilities: combat stats, speed, cargo, fuel.
//!
//! Ship speed follows the governing drive, the drive technology named in
//! the ship's requirement set. A few ships switch to a better drive once
//! the player researches it far enough; those cases live in
//! [`DRIVE_UPGRADES`] and are consulted before the generic rule.

use serde::{Deserialize, Serialize};

use crate::catalog::{Buildable, Catalog, CombatStats, Defender, Mobile, Requirements};
use crate::config::{Ruleset, Traits};
use crate::error::Result;
use crate::ids::EntityId;
use crate::state::Levels;

/// Combat bonus per level of armour, shielding and weapons technology.
pub const COMBAT_RESEARCH_BONUS: f64 = 0.1;

/// Cargo bonus per level of hyperspace technology.
pub const HYPERSPACE_CARGO_BONUS: f64 = 0.05;

/// Cargo bonus per level of hyperspace technology with the pioneers bonus.
pub const PIONEERS_HYPERSPACE_CARGO_BONUS: f64 = 0.02;

/// Extra cargo of Collector cargo ships.
pub const COLLECTOR_CARGO_BONUS: f64 = 0.25;

/// Combat values after research.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenderStats {
    /// Hull points.
    pub structural_integrity: i64,
    /// Shield points.
    pub shield_power: i64,
    /// Damage per shot.
    pub weapon_power: i64,
}

/// `stat * (1 + 0.1 * level)`, rounded to nearest.
fn researched(stat: i64, level: u32) -> i64 {
    (stat as f64 * (1.0 + COMBAT_RESEARCH_BONUS * f64::from(level))).round() as i64
}

/// Combat values boosted by armour, shielding and weapons technology.
#[must_use]
pub fn effective_stats(combat: &CombatStats, researches: &Levels) -> DefenderStats {
    DefenderStats {
        structural_integrity: researched(
            combat.structural_integrity,
            researches.level(EntityId::ARMOUR_TECHNOLOGY),
        ),
        shield_power: researched(
            combat.shield_power,
            researches.level(EntityId::SHIELDING_TECHNOLOGY),
        ),
        weapon_power: researched(
            combat.weapon_power,
            researches.level(EntityId::WEAPONS_TECHNOLOGY),
        ),
    }
}

// ============================================================================
// Drives
// ============================================================================

/// The three drive technologies, slowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Drive {
    /// +10% per level.
    Combustion,
    /// +20% per level.
    Impulse,
    /// +30% per level.
    Hyperspace,
}

impl Drive {
    /// Order in which requirement sets are inspected.
    pub const PRIORITY: [Self; 3] = [Self::Combustion, Self::Impulse, Self::Hyperspace];

    /// Technology researching this drive.
    #[must_use]
    pub const fn technology(self) -> EntityId {
        match self {
            Self::Combustion => EntityId::COMBUSTION_DRIVE,
            Self::Impulse => EntityId::IMPULSE_DRIVE,
            Self::Hyperspace => EntityId::HYPERSPACE_DRIVE,
        }
    }

    /// Speed bonus per level.
    #[must_use]
    pub const fn bonus_per_level(self) -> f64 {
        match self {
            Self::Combustion => 0.1,
            Self::Impulse => 0.2,
            Self::Hyperspace => 0.3,
        }
    }
}

/// The governing drive of a requirement set and its required level.
#[must_use]
pub fn governing_drive(requirements: &Requirements) -> Option<(Drive, u32)> {
    Drive::PRIORITY.into_iter().find_map(|drive| {
        requirements
            .get(&drive.technology())
            .map(|min_level| (drive, *min_level))
    })
}

/// A ship that switches drives once a technology is high enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveUpgrade {
    /// Ship concerned.
    pub ship: EntityId,
    /// Drive that takes over.
    pub drive: Drive,
    /// Researched level of that drive needed for the switch.
    pub min_level: u32,
    /// Replacement base speed, if the new drive changes it.
    pub base_speed: Option<i64>,
    /// Multiplier on the final speed.
    pub speed_multiplier: i64,
    /// Multiplier on fuel consumption.
    pub fuel_multiplier: i64,
}

/// Drive upgrades, checked in order. The first matching row wins.
pub const DRIVE_UPGRADES: [DriveUpgrade; 4] = [
    DriveUpgrade {
        ship: EntityId::SMALL_CARGO,
        drive: Drive::Impulse,
        min_level: 5,
        base_speed: Some(10_000),
        speed_multiplier: 1,
        fuel_multiplier: 2,
    },
    DriveUpgrade {
        ship: EntityId::BOMBER,
        drive: Drive::Hyperspace,
        min_level: 8,
        base_speed: Some(5000),
        speed_multiplier: 1,
        fuel_multiplier: 1,
    },
    DriveUpgrade {
        ship: EntityId::RECYCLER,
        drive: Drive::Hyperspace,
        min_level: 15,
        base_speed: None,
        speed_multiplier: 3,
        fuel_multiplier: 3,
    },
    DriveUpgrade {
        ship: EntityId::RECYCLER,
        drive: Drive::Impulse,
        min_level: 17,
        base_speed: None,
        speed_multiplier: 2,
        fuel_multiplier: 2,
    },
];

/// The drive upgrade active for `ship`, if any.
#[must_use]
pub fn active_upgrade(ship: EntityId, researches: &Levels) -> Option<&'static DriveUpgrade> {
    DRIVE_UPGRADES.iter().find(|upgrade| {
        upgrade.ship == ship && researches.level(upgrade.drive.technology()) >= upgrade.min_level
    })
}

// ============================================================================
// Ship capabilities
// ============================================================================

/// Check if the player's class doubles this ship's base speed.
fn class_speed_bonus(ship: EntityId, traits: &Traits) -> bool {
    if traits.is_collector() {
        return ship == EntityId::SMALL_CARGO || ship == EntityId::LARGE_CARGO;
    }
    traits.is_general()
        && (ship == EntityId::RECYCLER || ship.is_combat_ship())
        && ship != EntityId::DEATHSTAR
}

/// Speed of one ship after drive research and class bonuses.
#[must_use]
pub fn ship_speed<S: Mobile + ?Sized>(ship: &S, researches: &Levels, traits: &Traits) -> i64 {
    let id = ship.id();
    let mut base = ship.mobility().base_speed as f64;
    let mut multiplier = 1;

    let (factor, level) = if let Some(upgrade) = active_upgrade(id, researches) {
        tracing::debug!(ship = %id, drive = ?upgrade.drive, "drive upgrade");
        if let Some(speed) = upgrade.base_speed {
            base = speed as f64;
        }
        multiplier = upgrade.speed_multiplier;
        (
            upgrade.drive.bonus_per_level(),
            researches.level(upgrade.drive.technology()),
        )
    } else if let Some((drive, min_level)) = governing_drive(ship.requirements()) {
        let researched = researches.level(drive.technology());
        (drive.bonus_per_level(), researched.max(min_level))
    } else {
        (Drive::Impulse.bonus_per_level(), 0)
    };

    let mut speed = base + (base * factor) * f64::from(level);
    if class_speed_bonus(id, traits) {
        speed += base;
    }
    (speed as i64) * multiplier
}

/// Cargo capacity of one ship.
///
/// Espionage probes carry nothing unless probe raids are enabled.
#[must_use]
pub fn cargo_capacity<S: Mobile + ?Sized>(
    ship: &S,
    researches: &Levels,
    rules: &Ruleset,
    traits: &Traits,
) -> i64 {
    let id = ship.id();
    if id == EntityId::ESPIONAGE_PROBE && !rules.probe_raids {
        return 0;
    }

    let base = ship.mobility().cargo_capacity;
    let bonus = if traits.pioneers {
        PIONEERS_HYPERSPACE_CARGO_BONUS
    } else {
        HYPERSPACE_CARGO_BONUS
    };
    let hyperspace = researches.level(EntityId::HYPERSPACE_TECHNOLOGY);

    let mut cargo = base + ((base * i64::from(hyperspace)) as f64 * bonus) as i64;
    if traits.is_collector() && (id == EntityId::SMALL_CARGO || id == EntityId::LARGE_CARGO) {
        cargo += (base as f64 * COLLECTOR_CARGO_BONUS) as i64;
    }
    cargo
}

/// Fuel consumption of one ship.
///
/// Drive upgrades multiply the base value, the deuterium-save factor
/// scales it, and Generals pay half.
#[must_use]
pub fn fuel_consumption<S: Mobile + ?Sized>(
    ship: &S,
    researches: &Levels,
    rules: &Ruleset,
    traits: &Traits,
) -> i64 {
    let mut fuel = ship.mobility().fuel_consumption;
    if let Some(upgrade) = active_upgrade(ship.id(), researches) {
        fuel *= upgrade.fuel_multiplier;
    }
    fuel = (rules.deuterium_save_factor * fuel as f64) as i64;
    if traits.is_general() {
        fuel = (fuel as f64 / 2.0) as i64;
    }
    fuel
}

/// Fuel one ship can carry for its own flight.
#[must_use]
pub fn fuel_capacity<S: Mobile + ?Sized>(ship: &S) -> i64 {
    ship.mobility().fuel_capacity
}

// ============================================================================
// Catalog queries
// ============================================================================

impl Catalog {
    /// Research-adjusted combat values of a ship or defense.
    pub fn defender_stats(&self, id: EntityId, researches: &Levels) -> Result<DefenderStats> {
        Ok(effective_stats(self.defender(id)?.combat(), researches))
    }

    /// Speed of a ship.
    pub fn ship_speed(&self, id: EntityId, researches: &Levels, traits: &Traits) -> Result<i64> {
        Ok(ship_speed(self.ship(id)?, researches, traits))
    }

    /// Cargo capacity of a ship.
    pub fn cargo_capacity(
        &self,
        id: EntityId,
        researches: &Levels,
        rules: &Ruleset,
        traits: &Traits,
    ) -> Result<i64> {
        Ok(cargo_capacity(self.ship(id)?, researches, rules, traits))
    }

    /// Fuel consumption of a ship.
    pub fn fuel_consumption(
        &self,
        id: EntityId,
        researches: &Levels,
        rules: &Ruleset,
        traits: &Traits,
    ) -> Result<i64> {
        Ok(fuel_consumption(self.ship(id)?, researches, rules, traits))
    }
}
