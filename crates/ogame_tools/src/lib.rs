//! # OGame Development Tools
//!
//! Command-line tools for development:
//! - Catalog validators
//! - Price, construction time and flight calculators

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod evaluate;
pub mod validate;
