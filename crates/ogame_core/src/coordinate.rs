//! Galactic coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Kind of body found at a position.
///
/// Ordering follows the numeric tags: planet < debris < moon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum CelestialType {
    /// A planet.
    #[default]
    Planet = 1,
    /// A debris field.
    Debris = 2,
    /// A moon.
    Moon = 3,
}

impl CelestialType {
    /// Single-letter tag used in coordinate text.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Planet => 'P',
            Self::Debris => 'D',
            Self::Moon => 'M',
        }
    }
}

/// Position of a body: galaxy, system, position and body type.
///
/// Coordinates compare hierarchically, galaxy first and body type last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Galaxy index, 1-based.
    pub galaxy: u32,
    /// System index, 1-based.
    pub system: u32,
    /// Position in the system, 1-based.
    pub position: u32,
    /// Body type.
    #[serde(default)]
    pub celestial: CelestialType,
}

impl Coordinate {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(galaxy: u32, system: u32, position: u32, celestial: CelestialType) -> Self {
        Self {
            galaxy,
            system,
            position,
            celestial,
        }
    }

    /// Create a planet coordinate.
    #[must_use]
    pub const fn planet(galaxy: u32, system: u32, position: u32) -> Self {
        Self::new(galaxy, system, position, CelestialType::Planet)
    }

    /// Create a moon coordinate.
    #[must_use]
    pub const fn moon(galaxy: u32, system: u32, position: u32) -> Self {
        Self::new(galaxy, system, position, CelestialType::Moon)
    }

    /// Create a debris field coordinate.
    #[must_use]
    pub const fn debris(galaxy: u32, system: u32, position: u32) -> Self {
        Self::new(galaxy, system, position, CelestialType::Debris)
    }

    /// Same position, given body type.
    #[must_use]
    pub const fn companion(self, celestial: CelestialType) -> Self {
        Self { celestial, ..self }
    }

    /// The planet at this position.
    #[must_use]
    pub const fn as_planet(self) -> Self {
        self.companion(CelestialType::Planet)
    }

    /// The moon at this position.
    #[must_use]
    pub const fn as_moon(self) -> Self {
        self.companion(CelestialType::Moon)
    }

    /// The debris field at this position.
    #[must_use]
    pub const fn as_debris(self) -> Self {
        self.companion(CelestialType::Debris)
    }

    /// Check if this points at a planet.
    #[must_use]
    pub const fn is_planet(&self) -> bool {
        matches!(self.celestial, CelestialType::Planet)
    }

    /// Check if this points at a moon.
    #[must_use]
    pub const fn is_moon(&self) -> bool {
        matches!(self.celestial, CelestialType::Moon)
    }

    /// Check if this points at a debris field.
    #[must_use]
    pub const fn is_debris(&self) -> bool {
        matches!(self.celestial, CelestialType::Debris)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}:{}:{}]",
            self.celestial.letter(),
            self.galaxy,
            self.system,
            self.position
        )
    }
}

/// Accepts `1:2:3`, `[1:2:3]` and the typed forms `[P:1:2:3]`,
/// `[M:1:2:3]`, `[D:1:2:3]`. Untyped coordinates are planets.
impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCoordinate(s.to_string());

        let trimmed = s.trim();
        let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
        let inner = inner.strip_suffix(']').unwrap_or(inner);

        let mut parts: Vec<&str> = inner.split(':').collect();
        let celestial = match parts.len() {
            3 => CelestialType::Planet,
            4 => match parts.remove(0) {
                "P" => CelestialType::Planet,
                "M" => CelestialType::Moon,
                "D" => CelestialType::Debris,
                _ => return Err(invalid()),
            },
            _ => return Err(invalid()),
        };

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2], celestial))
    }
}
