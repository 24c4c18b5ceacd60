//! Error types for the formula engine.

use thiserror::Error;

use crate::ids::{Category, EntityId};

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for all formula and catalog errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Level-based price or time requested below level 1.
    #[error("Invalid level {level} for {id}: levels start at 1")]
    InvalidLevel {
        /// Entity the level was requested for.
        id: EntityId,
        /// The rejected level.
        level: u32,
    },

    /// Identifier absent from the catalog.
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// Entity exists but belongs to another category.
    #[error("{id} is not a {expected}")]
    WrongCategory {
        /// Entity that was looked up.
        id: EntityId,
        /// Category the operation needs.
        expected: Category,
    },

    /// Coordinate text could not be parsed.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Fleet speed fraction outside (0, 1].
    #[error("Invalid fleet speed {0}: expected a fraction in (0, 1]")]
    InvalidFleetSpeed(f64),

    /// Ruleset value outside its valid range.
    #[error("Invalid ruleset: {0}")]
    InvalidRuleset(String),

    /// Catalog failed a consistency check.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path to the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },
}
