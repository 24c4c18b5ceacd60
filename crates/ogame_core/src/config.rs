//! Universe rules and player traits.
//!
//! Both are plain data passed into every computation that needs them.
//! They load from RON with every field optional.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Universe-wide settings.
///
/// # Example RON
///
/// ```ron
/// Ruleset(
///     economy_speed: 7,
///     fleet_speed: 4,
///     deuterium_save_factor: 0.5,
///     galaxies: 6,
///     systems: 499,
///     donut_galaxy: true,
///     donut_system: true,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    /// Economy speed multiplier, applied to construction times.
    pub economy_speed: u32,

    /// Fleet speed multiplier, applied to flight times.
    pub fleet_speed: u32,

    /// Global fuel consumption factor.
    pub deuterium_save_factor: f64,

    /// Number of galaxies.
    pub galaxies: u32,

    /// Number of systems per galaxy.
    pub systems: u32,

    /// Galaxy 1 neighbours the last galaxy.
    pub donut_galaxy: bool,

    /// System 1 neighbours the last system.
    pub donut_system: bool,

    /// Espionage probes may carry loot.
    pub probe_raids: bool,

    /// Systems skipped by the system distance (ignored empty or inactive
    /// systems).
    pub systems_skip: u32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            economy_speed: 1,
            fleet_speed: 1,
            deuterium_save_factor: 1.0,
            galaxies: 9,
            systems: 499,
            donut_galaxy: true,
            donut_system: true,
            probe_raids: false,
            systems_skip: 0,
        }
    }
}

impl Ruleset {
    /// Parse and validate a ruleset from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        let rules: Self = parse_ron(text, "<ruleset>")?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that speeds and universe dimensions are usable.
    ///
    /// Speeds divide flight and construction times, and the galaxy and
    /// system counts bound coordinates, so none of them may be zero. The
    /// deuterium-save factor must be a positive finite number.
    pub fn validate(&self) -> Result<()> {
        let zero = [
            ("economy_speed", self.economy_speed),
            ("fleet_speed", self.fleet_speed),
            ("galaxies", self.galaxies),
            ("systems", self.systems),
        ]
        .into_iter()
        .find(|(_, value)| *value == 0);
        if let Some((field, _)) = zero {
            return Err(GameError::InvalidRuleset(format!("{field} must be at least 1")));
        }
        if !(self.deuterium_save_factor.is_finite() && self.deuterium_save_factor > 0.0) {
            return Err(GameError::InvalidRuleset(format!(
                "deuterium_save_factor {} must be positive",
                self.deuterium_save_factor
            )));
        }
        Ok(())
    }
}

/// Player class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterClass {
    /// No class selected.
    #[default]
    NoClass,
    /// Faster, larger cargo ships.
    Collector,
    /// Faster combat ships and recyclers, cheaper fuel.
    General,
    /// Faster research.
    Discoverer,
}

/// Player-level modifiers.
///
/// # Example RON
///
/// ```ron
/// Traits(class: Collector, technocrat: true)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Traits {
    /// Selected class.
    pub class: CharacterClass,

    /// Technocrat officer hired (shorter research).
    pub technocrat: bool,

    /// Pioneers bonus: hyperspace technology adds 2% cargo per level
    /// instead of 5%.
    pub pioneers: bool,
}

impl Traits {
    /// Traits of a player with the given class and nothing else.
    #[must_use]
    pub const fn with_class(class: CharacterClass) -> Self {
        Self {
            class,
            technocrat: false,
            pioneers: false,
        }
    }

    /// Check if the player is a Collector.
    #[must_use]
    pub const fn is_collector(&self) -> bool {
        matches!(self.class, CharacterClass::Collector)
    }

    /// Check if the player is a General.
    #[must_use]
    pub const fn is_general(&self) -> bool {
        matches!(self.class, CharacterClass::General)
    }

    /// Check if the player is a Discoverer.
    #[must_use]
    pub const fn is_discoverer(&self) -> bool {
        matches!(self.class, CharacterClass::Discoverer)
    }

    /// Parse traits from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        parse_ron(text, "<traits>")
    }
}

/// Deserialize RON text, naming `origin` in the error.
pub fn parse_ron<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T> {
    ron::from_str(text).map_err(|e| GameError::DataParseError {
        path: origin.to_string(),
        message: e.to_string(),
    })
}
