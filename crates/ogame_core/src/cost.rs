//! Cost and construction-time formulas.
//!
//! The free functions are the curves themselves, over raw numbers. The
//! [`Catalog`] methods at the bottom look an entity up and pick the right
//! curve for its category.
//!
//! Levels passed to the curves are [`NonZeroU32`]: level 0 has no price.

use std::num::NonZeroU32;
use std::time::Duration;

use crate::catalog::{Buildable, Catalog, Defender};
use crate::config::{Ruleset, Traits};
use crate::error::{GameError, Result};
use crate::ids::{Category, EntityId};
use crate::resources::Resources;
use crate::state::{Levels, StateSnapshot};

/// Deconstruction discount per level of ion technology.
pub const ION_DECONSTRUCTION_DISCOUNT: f64 = 0.04;

/// Research time cut of the technocrat officer.
pub const TECHNOCRAT_RESEARCH_BONUS: f64 = 0.25;

/// Research time cut of the Discoverer class.
pub const DISCOVERER_RESEARCH_BONUS: f64 = 0.25;

/// Price of `level`: `floor(base * factor^(level-1))` per component.
#[must_use]
pub fn price_at_level(base: Resources, factor: f64, level: NonZeroU32) -> Resources {
    let scale = factor.powf(f64::from(level.get() - 1));
    base.map_costs(|cost| (cost as f64 * scale).floor() as i64)
}

/// Refund-style price of tearing `level` down.
///
/// Each component of the level price is cut by 4% per ion technology
/// level. The cut stops at 100%, so components never go negative.
#[must_use]
pub fn deconstruction_price(
    base: Resources,
    factor: f64,
    level: NonZeroU32,
    ion_technology: u32,
) -> Resources {
    let keep = (1.0 - ION_DECONSTRUCTION_DISCOUNT * f64::from(ion_technology)).max(0.0);
    price_at_level(base, factor, level).map_costs(|cost| (cost as f64 * keep).floor() as i64)
}

/// Construction time of a building level.
///
/// Levels 1 through 5 get an early discount of `2 / (7 - (level - 1))`,
/// except for the nanite factory. The result is at least one second.
#[must_use]
pub fn building_construction_time(
    id: EntityId,
    price: Resources,
    level: NonZeroU32,
    economy_speed: u32,
    robotics_factory: u32,
    nanite_factory: u32,
) -> Duration {
    let hours = (price.metal as f64 + price.crystal as f64)
        / (2500.0
            * (1.0 + f64::from(robotics_factory))
            * f64::from(economy_speed)
            * 2f64.powf(f64::from(nanite_factory)));
    let mut secs = hours * 3600.0;

    let completed = f64::from(level.get() - 1);
    if id != EntityId::NANITE_FACTORY && completed < 5.0 {
        secs *= 2.0 / (7.0 - completed);
    }

    Duration::from_secs(secs.max(1.0).floor() as u64)
}

/// Research time of a technology level, floored to whole seconds.
///
/// The technocrat and Discoverer cuts apply one after the other.
#[must_use]
pub fn technology_construction_time(
    price: Resources,
    economy_speed: u32,
    research_lab: u32,
    traits: &Traits,
) -> Duration {
    let mut hours = (price.metal as f64 + price.crystal as f64)
        / (1000.0 * (1.0 + f64::from(research_lab)) * f64::from(economy_speed));
    if traits.technocrat {
        hours -= TECHNOCRAT_RESEARCH_BONUS * hours;
    }
    if traits.is_discoverer() {
        hours -= DISCOVERER_RESEARCH_BONUS * hours;
    }
    Duration::from_secs((hours * 3600.0).floor() as u64)
}

/// Build time of `quantity` ships or defenses.
///
/// Each unit takes at least one second.
#[must_use]
pub fn unit_construction_time(
    structural_integrity: i64,
    quantity: u64,
    economy_speed: u32,
    shipyard: u32,
    nanite_factory: u32,
) -> Duration {
    let hours = structural_integrity as f64
        / (2500.0
            * (1.0 + f64::from(shipyard))
            * f64::from(economy_speed)
            * 2f64.powf(f64::from(nanite_factory)));
    let per_unit = (hours * 3600.0).max(1.0).floor() as u64;
    Duration::from_secs(per_unit.saturating_mul(quantity))
}

/// Flat price of `quantity` units.
#[must_use]
pub fn unit_price(price: Resources, quantity: u64) -> Resources {
    price * i64::try_from(quantity).unwrap_or(i64::MAX)
}

fn nonzero_level(id: EntityId, level: u32) -> Result<NonZeroU32> {
    NonZeroU32::new(level).ok_or(GameError::InvalidLevel { id, level })
}

// ============================================================================
// Catalog queries
// ============================================================================

impl Catalog {
    /// Price of `id` at a level (buildings, technologies) or for a
    /// quantity (ships, defenses).
    pub fn price(&self, id: EntityId, level_or_quantity: u32) -> Result<Resources> {
        if let Some(data) = self.get_levelable(id) {
            return Ok(data.price(nonzero_level(id, level_or_quantity)?));
        }
        let unit = self.defender(id)?;
        Ok(unit_price(unit.price(), u64::from(level_or_quantity)))
    }

    /// Price of tearing down `level` of a building.
    pub fn deconstruction_price(
        &self,
        id: EntityId,
        level: u32,
        researches: &Levels,
    ) -> Result<Resources> {
        let data = self.levelable(id)?;
        if !data.category.is_building() {
            return Err(GameError::WrongCategory {
                id,
                expected: Category::Facility,
            });
        }
        Ok(deconstruction_price(
            data.base_cost,
            data.increase_factor,
            nonzero_level(id, level)?,
            researches.level(EntityId::ION_TECHNOLOGY),
        ))
    }

    /// Construction time of `id` at a level or for a quantity.
    ///
    /// Facility and research levels come from `state`.
    pub fn construction_time(
        &self,
        id: EntityId,
        level_or_quantity: u32,
        rules: &Ruleset,
        state: &StateSnapshot,
        traits: &Traits,
    ) -> Result<Duration> {
        rules.validate()?;
        let facilities = &state.facilities;
        let nanite = facilities.level(EntityId::NANITE_FACTORY);

        let duration = if let Some(data) = self.get_levelable(id) {
            let level = nonzero_level(id, level_or_quantity)?;
            let price = data.price(level);
            if data.category == Category::Technology {
                technology_construction_time(
                    price,
                    rules.economy_speed,
                    facilities.level(EntityId::RESEARCH_LAB),
                    traits,
                )
            } else {
                building_construction_time(
                    id,
                    price,
                    level,
                    rules.economy_speed,
                    facilities.level(EntityId::ROBOTICS_FACTORY),
                    nanite,
                )
            }
        } else {
            let unit = self.defender(id)?;
            unit_construction_time(
                unit.combat().structural_integrity,
                u64::from(level_or_quantity),
                rules.economy_speed,
                facilities.level(EntityId::SHIPYARD),
                nanite,
            )
        };

        tracing::debug!(
            entity = %id,
            amount = level_or_quantity,
            secs = duration.as_secs(),
            "construction time"
        );
        Ok(duration)
    }

    /// Name of `id` for display, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self, id: EntityId) -> String {
        self.get(id)
            .map_or_else(|| id.to_string(), |entity| entity.name().to_string())
    }
}
