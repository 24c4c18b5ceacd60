//! Fleet compositions and their aggregate properties.
//!
//! A [`Fleet`] maps ship identifiers to quantities. Zero quantities are
//! never stored, so two fleets are equal exactly when every ship kind has
//! the same count.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::capability::{cargo_capacity, fuel_capacity, ship_speed};
use crate::catalog::{Catalog, Defender};
use crate::config::{Ruleset, Traits};
use crate::cost::unit_price;
use crate::error::Result;
use crate::ids::{EntityId, SHIPS};
use crate::resources::Resources;
use crate::state::Levels;

/// Quantities of each ship kind travelling together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<EntityId, u64>", into = "BTreeMap<EntityId, u64>")]
pub struct Fleet {
    ships: BTreeMap<EntityId, u64>,
}

impl Fleet {
    /// Create an empty fleet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ships of kind `id`, 0 if none.
    #[must_use]
    pub fn by_id(&self, id: EntityId) -> u64 {
        self.ships.get(&id).copied().unwrap_or(0)
    }

    /// Set the quantity of one ship kind. Non-ship identifiers are ignored.
    pub fn set(&mut self, id: EntityId, quantity: u64) {
        if !id.is_ship() {
            return;
        }
        if quantity == 0 {
            self.ships.remove(&id);
        } else {
            self.ships.insert(id, quantity);
        }
    }

    /// Builder form of [`Fleet::set`].
    #[must_use]
    pub fn with(mut self, id: EntityId, quantity: u64) -> Self {
        self.set(id, quantity);
        self
    }

    /// Add `quantity` ships of kind `id`.
    pub fn add_ships(&mut self, id: EntityId, quantity: u64) {
        self.set(id, self.by_id(id).saturating_add(quantity));
    }

    /// Remove up to `quantity` ships of kind `id`.
    pub fn sub_ships(&mut self, id: EntityId, quantity: u64) {
        self.set(id, self.by_id(id).saturating_sub(quantity));
    }

    /// Total number of ships.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.ships
            .values()
            .fold(0, |total, quantity| total.saturating_add(*quantity))
    }

    /// Check if the fleet holds no ship at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Check if the fleet holds at least one ship, flyable or not.
    #[must_use]
    pub fn has_ships(&self) -> bool {
        !self.is_empty()
    }

    /// Check if the fleet holds at least one ship that can be dispatched.
    #[must_use]
    pub fn has_flyable_ships(&self) -> bool {
        self.ships.keys().any(|id| id.is_flyable())
    }

    /// Check if every quantity of `other` is covered by this fleet.
    #[must_use]
    pub fn contains(&self, other: &Fleet) -> bool {
        other
            .ships
            .iter()
            .all(|(id, quantity)| *quantity <= self.by_id(*id))
    }

    /// Ships in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, u64)> + '_ {
        SHIPS.into_iter().filter_map(|id| {
            let quantity = self.by_id(id);
            (quantity > 0).then_some((id, quantity))
        })
    }

    /// Flyable ships in canonical order.
    pub fn iter_flyable(&self) -> impl Iterator<Item = (EntityId, u64)> + '_ {
        self.iter().filter(|(id, _)| id.is_flyable())
    }

    /// Dispatch-ready list: flyable ships only, canonical order.
    #[must_use]
    pub fn to_quantities(&self) -> Vec<(EntityId, u64)> {
        self.iter_flyable().collect()
    }

    /// Build a fleet from (id, quantity) pairs, summing repeated ids.
    #[must_use]
    pub fn from_quantities(quantities: impl IntoIterator<Item = (EntityId, u64)>) -> Self {
        let mut fleet = Self::new();
        for (id, quantity) in quantities {
            fleet.add_ships(id, quantity);
        }
        fleet
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Summed price of every ship.
    pub fn cost(&self, catalog: &Catalog) -> Result<Resources> {
        let mut total = Resources::ZERO;
        for (id, quantity) in self.iter() {
            total += unit_price(catalog.ship(id)?.price(), quantity);
        }
        Ok(total)
    }

    /// Summed weighted value of every ship, see [`Resources::value`].
    pub fn value(&self, catalog: &Catalog) -> Result<i64> {
        let mut total = 0;
        for (id, quantity) in self.iter() {
            total = unit_price(catalog.ship(id)?.price(), quantity)
                .value()
                .saturating_add(total);
        }
        Ok(total)
    }

    /// Summed cargo capacity.
    pub fn cargo(
        &self,
        catalog: &Catalog,
        researches: &Levels,
        rules: &Ruleset,
        traits: &Traits,
    ) -> Result<i64> {
        let mut total = 0;
        for (id, quantity) in self.iter() {
            let ship = catalog.ship(id)?;
            let cargo = cargo_capacity(ship, researches, rules, traits);
            total = saturating_product(cargo, quantity).saturating_add(total);
        }
        Ok(total)
    }

    /// Summed fuel capacity.
    pub fn fuel_capacity(&self, catalog: &Catalog) -> Result<i64> {
        let mut total = 0;
        for (id, quantity) in self.iter() {
            let fuel = fuel_capacity(catalog.ship(id)?);
            total = saturating_product(fuel, quantity).saturating_add(total);
        }
        Ok(total)
    }

    /// Speed of the slowest flyable ship, `None` if nothing can fly.
    pub fn slowest_speed(
        &self,
        catalog: &Catalog,
        researches: &Levels,
        traits: &Traits,
    ) -> Result<Option<i64>> {
        let mut slowest: Option<i64> = None;
        for (id, _) in self.iter_flyable() {
            let speed = ship_speed(catalog.ship(id)?, researches, traits);
            slowest = Some(slowest.map_or(speed, |current| current.min(speed)));
        }
        Ok(slowest)
    }
}

/// `per_ship * quantity`, saturating at the `i64` bounds.
fn saturating_product(per_ship: i64, quantity: u64) -> i64 {
    per_ship.saturating_mul(i64::try_from(quantity).unwrap_or(i64::MAX))
}

impl From<BTreeMap<EntityId, u64>> for Fleet {
    fn from(ships: BTreeMap<EntityId, u64>) -> Self {
        Self::from_quantities(ships)
    }
}

impl From<Fleet> for BTreeMap<EntityId, u64> {
    fn from(fleet: Fleet) -> Self {
        fleet.ships
    }
}

impl FromIterator<(EntityId, u64)> for Fleet {
    fn from_iter<I: IntoIterator<Item = (EntityId, u64)>>(iter: I) -> Self {
        Self::from_quantities(iter)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl AddAssign<&Fleet> for Fleet {
    fn add_assign(&mut self, rhs: &Fleet) {
        for (id, quantity) in &rhs.ships {
            self.add_ships(*id, *quantity);
        }
    }
}

impl SubAssign<&Fleet> for Fleet {
    fn sub_assign(&mut self, rhs: &Fleet) {
        for (id, quantity) in &rhs.ships {
            self.sub_ships(*id, *quantity);
        }
    }
}

impl Add for Fleet {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl Sub for Fleet {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= &rhs;
        self
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in SHIPS {
            write!(
                f,
                "\n{:>15}: {}",
                id.name().unwrap_or_default(),
                self.by_id(id)
            )?;
        }
        Ok(())
    }
}
