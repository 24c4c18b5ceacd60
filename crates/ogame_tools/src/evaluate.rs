//! Formula evaluation for the command line.
//!
//! Parses the compact `id=value` argument syntax and bundles query
//! results into serializable reports.

use ogame_core::prelude::*;
use serde::Serialize;

use crate::validate::{Result, ToolError};

/// Parse one `id=value` pair.
fn parse_pair(text: &str) -> Result<(EntityId, u64)> {
    let invalid = || ToolError::InvalidArgument(text.to_string());
    let (id, value) = text.split_once('=').ok_or_else(invalid)?;
    let id = id.trim().parse().map_err(|_| invalid())?;
    let value = value.trim().parse().map_err(|_| invalid())?;
    Ok((EntityId::new(id), value))
}

/// Parse a ship count such as `202=10`.
pub fn parse_ship(text: &str) -> Result<(EntityId, u64)> {
    let (id, quantity) = parse_pair(text)?;
    if !id.is_ship() {
        return Err(ToolError::InvalidArgument(text.to_string()));
    }
    Ok((id, quantity))
}

/// Parse a comma-separated level list such as `115=10,117=8`.
pub fn parse_levels(text: &str) -> Result<Levels> {
    let mut levels = Levels::new();
    for part in text.split(',').filter(|part| !part.trim().is_empty()) {
        let (id, level) = parse_pair(part)?;
        let level = u32::try_from(level).map_err(|_| ToolError::InvalidArgument(part.into()))?;
        levels.set(id, level);
    }
    Ok(levels)
}

/// Price and construction time of one purchase.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Entity bought.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Level (buildings, technologies) or quantity (units).
    pub amount: u32,
    /// Resources paid.
    pub price: Resources,
    /// Construction time in seconds.
    pub seconds: u64,
}

/// Price and construction time of `id` at `amount`.
pub fn price_report(
    catalog: &Catalog,
    id: EntityId,
    amount: u32,
    rules: &Ruleset,
    state: &StateSnapshot,
    traits: &Traits,
) -> Result<PriceReport> {
    let price = catalog.price(id, amount)?;
    let duration = catalog.construction_time(id, amount, rules, state, traits)?;
    Ok(PriceReport {
        id,
        name: catalog.display_name(id),
        amount,
        price,
        seconds: duration.as_secs(),
    })
}

/// Everything needed to plan one flight.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    /// Start coordinate.
    pub from: Coordinate,
    /// Target coordinate.
    pub to: Coordinate,
    /// Ships sent.
    pub fleet: Fleet,
    /// Speed fraction in (0, 1].
    pub speed: f64,
    /// Hours held at the target.
    pub holding_hours: u32,
}

/// Result of a flight query.
#[derive(Debug, Clone, Serialize)]
pub struct FlightReport {
    /// Start coordinate as text.
    pub from: String,
    /// Target coordinate as text.
    pub to: String,
    /// Distance flown.
    pub distance: i64,
    /// One-way flight time in seconds.
    pub seconds: u64,
    /// Deuterium burnt.
    pub fuel: i64,
    /// Cargo capacity of the fleet.
    pub cargo: i64,
    /// Weighted value of the fleet.
    pub value: i64,
}

/// Plan a flight and gather fleet aggregates.
pub fn flight_report(
    catalog: &Catalog,
    query: &FlightQuery,
    researches: &Levels,
    rules: &Ruleset,
    traits: &Traits,
) -> Result<FlightReport> {
    let flight = Flight::new(query.from, query.to, &query.fleet)
        .at_speed(query.speed)
        .holding(query.holding_hours);
    let plan = catalog.plan_flight(&flight, researches, rules, traits)?;
    Ok(FlightReport {
        from: query.from.to_string(),
        to: query.to.to_string(),
        distance: plan.distance,
        seconds: plan.duration.as_secs(),
        fuel: plan.fuel,
        cargo: query.fleet.cargo(catalog, researches, rules, traits)?,
        value: query.fleet.value(catalog)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogame_test_utils::fixtures;

    #[test]
    fn test_parse_ship() {
        assert_eq!(parse_ship("202=10").unwrap(), (EntityId::SMALL_CARGO, 10));
        assert_eq!(parse_ship(" 203 = 2 ").unwrap(), (EntityId::LARGE_CARGO, 2));
        assert!(parse_ship("401=10").is_err());
        assert!(parse_ship("202").is_err());
        assert!(parse_ship("202=-1").is_err());
    }

    #[test]
    fn test_parse_levels() {
        let levels = parse_levels("115=10,117=8,").unwrap();
        assert_eq!(levels.level(EntityId::COMBUSTION_DRIVE), 10);
        assert_eq!(levels.level(EntityId::IMPULSE_DRIVE), 8);
        assert!(parse_levels("").unwrap().is_empty());
        assert!(parse_levels("115=x").is_err());
    }

    #[test]
    fn test_price_report() {
        let catalog = fixtures::catalog();
        let report = price_report(
            &catalog,
            EntityId::METAL_MINE,
            2,
            &Ruleset::default(),
            &fixtures::planet(&[]),
            &Traits::default(),
        )
        .unwrap();
        assert_eq!(report.name, "Metal Mine");
        assert_eq!(report.price, Resources::new(90, 22, 0));
    }

    #[test]
    fn test_flight_report() {
        let catalog = fixtures::catalog();
        let query = FlightQuery {
            from: Coordinate::planet(1, 1, 8),
            to: Coordinate::planet(1, 1, 8).as_moon(),
            fleet: fixtures::cargo_fleet(),
            speed: 1.0,
            holding_hours: 0,
        };
        let report = flight_report(
            &catalog,
            &query,
            &fixtures::drives(6, 0, 0),
            &fixtures::flat_universe(6, 1),
            &Traits::default(),
        )
        .unwrap();
        assert_eq!(report.from, "[P:1:1:8]");
        assert_eq!(report.to, "[M:1:1:8]");
        assert_eq!(report.distance, 5);
        assert_eq!(report.cargo, 60_000);
        assert!(report.fuel >= 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["distance"], 5);
    }

    #[test]
    fn test_flight_report_rejects_bad_speed() {
        let catalog = fixtures::catalog();
        let query = FlightQuery {
            from: Coordinate::planet(1, 1, 8),
            to: Coordinate::planet(1, 2, 8),
            fleet: fixtures::cargo_fleet(),
            speed: 1.5,
            holding_hours: 0,
        };
        let err = flight_report(
            &catalog,
            &query,
            &Levels::new(),
            &Ruleset::default(),
            &Traits::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::Game(GameError::InvalidFleetSpeed(_))));
    }
}
