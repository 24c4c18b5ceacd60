//! # OGame Core
//!
//! Progression economy and fleet logistics formulas for a persistent
//! space-strategy game.
//!
//! This crate is a pure computation library:
//! - No IO beyond parsing text handed to it
//! - No global state (the catalog is an explicit value)
//! - No interior mutability; every query borrows its inputs
//!
//! Every entity (building, technology, ship, defense) is defined once in a
//! [`catalog::Catalog`]. Queries combine a catalog entry with caller-owned
//! snapshots ([`state::Levels`], [`state::StateSnapshot`],
//! [`fleet::Fleet`]) and universe settings ([`config::Ruleset`],
//! [`config::Traits`]).
//!
//! ## Crate Structure
//!
//! - [`ids`] - Entity identifiers and categories
//! - [`cost`] - Prices, deconstruction refunds and construction times
//! - [`capability`] - Research-adjusted combat stats, speed, cargo and fuel
//! - [`availability`] - Requirement resolution
//! - [`fleet`] - Fleet compositions and aggregates
//! - [`geometry`] - Distances, flight times and fuel
//! - [`production`] - Mine output, energy and storage curves

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod availability;
pub mod capability;
pub mod catalog;
pub mod config;
pub mod coordinate;
pub mod cost;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod ids;
pub mod production;
pub mod resources;
pub mod state;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::availability::Unavailable;
    pub use crate::capability::{DefenderStats, Drive};
    pub use crate::catalog::{
        Buildable, Catalog, CombatStats, DefenseData, Defender, LevelableData, Mobile, Mobility,
        Placement, ShipData,
    };
    pub use crate::config::{CharacterClass, Ruleset, Traits};
    pub use crate::coordinate::{CelestialType, Coordinate};
    pub use crate::error::{GameError, Result};
    pub use crate::fleet::Fleet;
    pub use crate::geometry::{Flight, FlightPlan};
    pub use crate::ids::{Category, EntityId};
    pub use crate::resources::Resources;
    pub use crate::state::{Levels, StateSnapshot};
}
