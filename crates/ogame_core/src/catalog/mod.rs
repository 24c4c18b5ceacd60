//! The entity catalog.
//!
//! A [`Catalog`] holds the immutable definition of every entity: costs,
//! requirement sets and base capability constants. It is an ordinary
//! value, built once and passed by reference into every query, so several
//! rulesets can coexist in one process.
//!
//! Definitions come from [`Catalog::standard`] or from RON text.

mod levelable_data;
mod standard;
mod unit_data;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub use levelable_data::{LevelableData, Placement, Requirements};
pub use unit_data::{CombatStats, DefenseData, Mobility, ShipData};

use crate::config::{parse_ron, CharacterClass};
use crate::error::{GameError, Result};
use crate::ids::{Category, EntityId};
use crate::resources::Resources;

// ============================================================================
// Capabilities
// ============================================================================

/// Shared by every entity: identity, requirements and placement.
pub trait Buildable {
    /// Unique identifier.
    fn id(&self) -> EntityId;

    /// Display name.
    fn name(&self) -> &str;

    /// Category tag used for dispatch.
    fn category(&self) -> Category;

    /// Minimum levels of other entities.
    fn requirements(&self) -> &Requirements;

    /// Bodies this can be built on.
    fn placement(&self) -> Placement {
        Placement::Anywhere
    }

    /// Minimum energy production needed on the body.
    fn energy_gate(&self) -> Option<i64> {
        None
    }

    /// Class the player must have.
    fn required_class(&self) -> Option<CharacterClass> {
        None
    }
}

/// Units that take part in combat: ships and defenses.
pub trait Defender: Buildable {
    /// Price of one unit.
    fn price(&self) -> Resources;

    /// Base combat values.
    fn combat(&self) -> &CombatStats;
}

/// Units that fly.
pub trait Mobile: Defender {
    /// Movement constants.
    fn mobility(&self) -> &Mobility;
}

impl Buildable for LevelableData {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    fn placement(&self) -> Placement {
        self.placement
    }

    fn energy_gate(&self) -> Option<i64> {
        self.energy_gate
    }
}

impl Buildable for ShipData {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Ship
    }

    fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    fn required_class(&self) -> Option<CharacterClass> {
        self.required_class
    }
}

impl Defender for ShipData {
    fn price(&self) -> Resources {
        self.price
    }

    fn combat(&self) -> &CombatStats {
        &self.combat
    }
}

impl Mobile for ShipData {
    fn mobility(&self) -> &Mobility {
        &self.mobility
    }
}

impl Buildable for DefenseData {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Defense
    }

    fn requirements(&self) -> &Requirements {
        &self.requirements
    }
}

impl Defender for DefenseData {
    fn price(&self) -> Resources {
        self.price
    }

    fn combat(&self) -> &CombatStats {
        &self.combat
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Serialized layout of a catalog.
///
/// # Example RON
///
/// ```ron
/// CatalogData(
///     buildings: [LevelableData(...), ...],
///     technologies: [LevelableData(...), ...],
///     ships: [ShipData(...), ...],
///     defenses: [DefenseData(...), ...],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Resource buildings and facilities.
    #[serde(default)]
    pub buildings: Vec<LevelableData>,

    /// Technologies.
    #[serde(default)]
    pub technologies: Vec<LevelableData>,

    /// Ships.
    #[serde(default)]
    pub ships: Vec<ShipData>,

    /// Defenses.
    #[serde(default)]
    pub defenses: Vec<DefenseData>,
}

/// Registry of entity definitions, indexed by identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    /// Buildings and technologies.
    levelables: BTreeMap<EntityId, LevelableData>,
    /// Ships.
    ships: BTreeMap<EntityId, ShipData>,
    /// Defenses.
    defenses: BTreeMap<EntityId, DefenseData>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from RON text.
    ///
    /// With the `debug-validation` feature the catalog is also checked
    /// with [`Catalog::check`].
    pub fn from_ron(text: &str) -> Result<Self> {
        let catalog: Self = parse_ron(text, "<catalog>")?;
        if cfg!(feature = "debug-validation") {
            catalog.check()?;
        }
        Ok(catalog)
    }

    /// Serialize the catalog as pretty RON.
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()).map_err(|e| {
            GameError::DataParseError {
                path: "<catalog>".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Register a building or technology.
    pub fn register_levelable(&mut self, data: LevelableData) {
        self.levelables.insert(data.id, data);
    }

    /// Register a ship.
    pub fn register_ship(&mut self, data: ShipData) {
        self.ships.insert(data.id, data);
    }

    /// Register a defense.
    pub fn register_defense(&mut self, data: DefenseData) {
        self.defenses.insert(data.id, data);
    }

    /// Check if `id` is defined.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.levelables.contains_key(&id)
            || self.ships.contains_key(&id)
            || self.defenses.contains_key(&id)
    }

    /// Look up any entity.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&dyn Buildable> {
        if let Some(data) = self.levelables.get(&id) {
            return Some(data);
        }
        if let Some(data) = self.ships.get(&id) {
            return Some(data);
        }
        self.defenses.get(&id).map(|data| data as &dyn Buildable)
    }

    /// Look up a ship or defense.
    #[must_use]
    pub fn get_defender(&self, id: EntityId) -> Option<&dyn Defender> {
        if let Some(data) = self.ships.get(&id) {
            return Some(data);
        }
        self.defenses.get(&id).map(|data| data as &dyn Defender)
    }

    /// Look up a building or technology.
    #[must_use]
    pub fn get_levelable(&self, id: EntityId) -> Option<&LevelableData> {
        self.levelables.get(&id)
    }

    /// Look up a ship.
    #[must_use]
    pub fn get_ship(&self, id: EntityId) -> Option<&ShipData> {
        self.ships.get(&id)
    }

    /// Look up a defense.
    #[must_use]
    pub fn get_defense(&self, id: EntityId) -> Option<&DefenseData> {
        self.defenses.get(&id)
    }

    /// Building or technology, or why it is not one.
    pub fn levelable(&self, id: EntityId) -> Result<&LevelableData> {
        self.get_levelable(id)
            .ok_or_else(|| self.missing(id, Category::Technology))
    }

    /// Ship, or why it is not one.
    pub fn ship(&self, id: EntityId) -> Result<&ShipData> {
        self.get_ship(id).ok_or_else(|| self.missing(id, Category::Ship))
    }

    /// Ship or defense, or why it is not one.
    pub fn defender(&self, id: EntityId) -> Result<&dyn Defender> {
        self.get_defender(id)
            .ok_or_else(|| self.missing(id, Category::Defense))
    }

    fn missing(&self, id: EntityId, expected: Category) -> GameError {
        if self.contains(id) {
            GameError::WrongCategory { id, expected }
        } else {
            GameError::UnknownEntity(id)
        }
    }

    /// All buildings and technologies, in identifier order.
    pub fn levelables(&self) -> impl Iterator<Item = &LevelableData> {
        self.levelables.values()
    }

    /// All ships, in identifier order.
    pub fn ships(&self) -> impl Iterator<Item = &ShipData> {
        self.ships.values()
    }

    /// All defenses, in identifier order.
    pub fn defenses(&self) -> impl Iterator<Item = &DefenseData> {
        self.defenses.values()
    }

    /// Number of defined entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levelables.len() + self.ships.len() + self.defenses.len()
    }

    /// Check if nothing is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate internal consistency.
    ///
    /// Checks for:
    /// - Identifiers filed under the wrong category
    /// - Growth factors below 1
    /// - Requirements on unknown entities or on units
    /// - Requirement cycles
    ///
    /// Returns a list of problems (empty if valid).
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for data in self.levelables.values() {
            if data.id.category() != Some(data.category) || !data.category.is_levelable() {
                errors.push(format!("{} ({}) is filed as {}", data.name, data.id.0, data.category));
            }
            if data.increase_factor < 1.0 {
                errors.push(format!(
                    "{} has growth factor {} below 1",
                    data.name, data.increase_factor
                ));
            }
        }
        for data in self.ships.values() {
            if !data.id.is_ship() {
                errors.push(format!("{} ({}) is filed as ship", data.name, data.id.0));
            }
        }
        for data in self.defenses.values() {
            if !data.id.is_defense() {
                errors.push(format!("{} ({}) is filed as defense", data.name, data.id.0));
            }
        }

        for entity in self.entities() {
            for required in entity.requirements().keys() {
                match self.get(*required) {
                    None => errors.push(format!(
                        "{} requires unknown entity #{}",
                        entity.name(),
                        required.0
                    )),
                    Some(target) if target.category().is_unit() => errors.push(format!(
                        "{} requires unit {}",
                        entity.name(),
                        target.name()
                    )),
                    Some(_) => {}
                }
            }
        }

        if let Some(id) = self.find_cycle() {
            errors.push(format!("requirement cycle through {id}"));
        }

        errors
    }

    /// Validate and fail on the first inconsistency report.
    pub fn check(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        for error in &errors {
            tracing::warn!(%error, "catalog validation");
        }
        Err(GameError::InvalidCatalog(errors.join("; ")))
    }

    fn entities(&self) -> impl Iterator<Item = &dyn Buildable> {
        self.levelables
            .values()
            .map(|d| d as &dyn Buildable)
            .chain(self.ships.values().map(|d| d as &dyn Buildable))
            .chain(self.defenses.values().map(|d| d as &dyn Buildable))
    }

    /// Depth-first search for a back edge in the requirement graph.
    fn find_cycle(&self) -> Option<EntityId> {
        fn visit(
            catalog: &Catalog,
            id: EntityId,
            on_path: &mut BTreeSet<EntityId>,
            done: &mut BTreeSet<EntityId>,
        ) -> Option<EntityId> {
            if done.contains(&id) {
                return None;
            }
            if !on_path.insert(id) {
                return Some(id);
            }
            if let Some(entity) = catalog.get(id) {
                for required in entity.requirements().keys() {
                    if let Some(found) = visit(catalog, *required, on_path, done) {
                        return Some(found);
                    }
                }
            }
            on_path.remove(&id);
            done.insert(id);
            None
        }

        let mut done = BTreeSet::new();
        let mut on_path = BTreeSet::new();
        self.entities()
            .find_map(|entity| visit(self, entity.id(), &mut on_path, &mut done))
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = GameError;

    fn try_from(data: CatalogData) -> Result<Self> {
        let mut catalog = Self::new();
        let levelables = data.buildings.into_iter().chain(data.technologies);
        for entry in levelables {
            if catalog.contains(entry.id) {
                return Err(duplicate(entry.id));
            }
            catalog.register_levelable(entry);
        }
        for entry in data.ships {
            if catalog.contains(entry.id) {
                return Err(duplicate(entry.id));
            }
            catalog.register_ship(entry);
        }
        for entry in data.defenses {
            if catalog.contains(entry.id) {
                return Err(duplicate(entry.id));
            }
            catalog.register_defense(entry);
        }
        Ok(catalog)
    }
}

fn duplicate(id: EntityId) -> GameError {
    GameError::InvalidCatalog(format!("duplicate entity #{}", id.0))
}

impl From<Catalog> for CatalogData {
    fn from(catalog: Catalog) -> Self {
        let (technologies, buildings) = catalog
            .levelables
            .into_values()
            .partition(|data| data.category == Category::Technology);
        Self {
            buildings,
            technologies,
            ships: catalog.ships.into_values().collect(),
            defenses: catalog.defenses.into_values().collect(),
        }
    }
}
