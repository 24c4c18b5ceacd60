//! Distances between coordinates, flight durations and fuel costs.
//!
//! Coordinates are compared hierarchically: different galaxies use the
//! galaxy distance, different systems the system distance, different
//! positions the position distance. Two bodies at the same position (a
//! planet and its moon) are 5 units apart.
//!
//! # Flight formula
//!
//! With `d` the distance, `v` the slowest ship speed, `s` the speed
//! fraction and `a` the universe fleet speed:
//!
//! ```text
//! seconds = round(((3500 / s) * sqrt(d * 10 / v) + 10) / a)
//! ```
//!
//! Every flyable ship kind then burns
//! `consumption * count * d / 35000 * (k / 10 + 1)^2` where
//! `k = 35000 / max(0.5, seconds * a - 10) * sqrt(d * 10 / shipSpeed)`.
//! The fleet pays `1 + round(sum)` plus the holding fuel.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::{fuel_consumption, ship_speed};
use crate::catalog::Catalog;
use crate::config::{Ruleset, Traits};
use crate::coordinate::Coordinate;
use crate::error::{GameError, Result};
use crate::fleet::Fleet;
use crate::state::Levels;

/// Distance between two adjacent galaxies.
pub const GALAXY_DISTANCE: i64 = 20_000;

/// Distance between two bodies at the same position.
pub const SAME_POSITION_DISTANCE: i64 = 5;

/// Wrap-aware difference of two 1-based indices.
fn index_delta(from: u32, to: u32, count: u32, wrap: bool) -> i64 {
    let delta = (i64::from(to) - i64::from(from)).abs();
    if wrap {
        delta.min(i64::from(count) - delta)
    } else {
        delta
    }
}

/// Distance between two galaxies.
#[must_use]
pub fn galaxy_distance(from: u32, to: u32, galaxies: u32, donut: bool) -> i64 {
    GALAXY_DISTANCE * index_delta(from, to, galaxies, donut)
}

/// Distance between two systems of one galaxy.
///
/// `skip` systems are removed from the delta, which never goes below 0.
#[must_use]
pub fn system_distance(from: u32, to: u32, systems: u32, skip: u32, donut: bool) -> i64 {
    let delta = (index_delta(from, to, systems, donut) - i64::from(skip)).max(0);
    2700 + 95 * delta
}

/// Distance between two positions of one system.
#[must_use]
pub fn planet_distance(from: u32, to: u32) -> i64 {
    1000 + 5 * (i64::from(to) - i64::from(from)).abs()
}

/// Distance between two coordinates under `rules`.
#[must_use]
pub fn distance(from: &Coordinate, to: &Coordinate, rules: &Ruleset) -> i64 {
    if from.galaxy != to.galaxy {
        galaxy_distance(from.galaxy, to.galaxy, rules.galaxies, rules.donut_galaxy)
    } else if from.system != to.system {
        system_distance(
            from.system,
            to.system,
            rules.systems,
            rules.systems_skip,
            rules.donut_system,
        )
    } else if from.position != to.position {
        planet_distance(from.position, to.position)
    } else {
        SAME_POSITION_DISTANCE
    }
}

/// Whole seconds a fleet needs for `distance` at its slowest `speed`.
#[must_use]
pub fn flight_seconds(distance: i64, slowest_speed: i64, fraction: f64, fleet_speed: u32) -> i64 {
    let d = distance as f64;
    let v = slowest_speed as f64;
    let a = f64::from(fleet_speed);
    (((3500.0 / fraction) * (d * 10.0 / v).sqrt() + 10.0) / a).round() as i64
}

// ============================================================================
// Flight planning
// ============================================================================

/// A planned move of one fleet.
#[derive(Debug, Clone, Copy)]
pub struct Flight<'a> {
    /// Start of the flight.
    pub origin: Coordinate,
    /// Target of the flight.
    pub destination: Coordinate,
    /// Ships sent.
    pub fleet: &'a Fleet,
    /// Fraction of full speed, in (0, 1].
    pub speed: f64,
    /// Hours the fleet holds at the destination.
    pub holding_hours: u32,
}

impl<'a> Flight<'a> {
    /// A full-speed flight without holding time.
    #[must_use]
    pub fn new(origin: Coordinate, destination: Coordinate, fleet: &'a Fleet) -> Self {
        Self {
            origin,
            destination,
            fleet,
            speed: 1.0,
            holding_hours: 0,
        }
    }

    /// Set the speed fraction.
    #[must_use]
    pub fn at_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the holding time.
    #[must_use]
    pub fn holding(mut self, hours: u32) -> Self {
        self.holding_hours = hours;
        self
    }
}

/// Duration and fuel of a flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPlan {
    /// Distance flown.
    pub distance: i64,
    /// One-way flight time.
    pub duration: Duration,
    /// Deuterium burnt.
    pub fuel: i64,
}

fn check_in_universe(coordinate: &Coordinate, rules: &Ruleset) -> Result<()> {
    let valid = (1..=rules.galaxies).contains(&coordinate.galaxy)
        && (1..=rules.systems).contains(&coordinate.system)
        && coordinate.position >= 1;
    if valid {
        Ok(())
    } else {
        Err(GameError::InvalidCoordinate(coordinate.to_string()))
    }
}

impl Catalog {
    /// Duration and fuel cost of `flight`.
    ///
    /// A fleet with no flyable ship yields an empty plan.
    pub fn plan_flight(
        &self,
        flight: &Flight<'_>,
        researches: &Levels,
        rules: &Ruleset,
        traits: &Traits,
    ) -> Result<FlightPlan> {
        if !(flight.speed > 0.0 && flight.speed <= 1.0) {
            return Err(GameError::InvalidFleetSpeed(flight.speed));
        }
        rules.validate()?;
        check_in_universe(&flight.origin, rules)?;
        check_in_universe(&flight.destination, rules)?;

        let Some(slowest) = flight.fleet.slowest_speed(self, researches, traits)? else {
            return Ok(FlightPlan::default());
        };

        let distance = distance(&flight.origin, &flight.destination, rules);
        let seconds = flight_seconds(distance, slowest, flight.speed, rules.fleet_speed);

        let d = distance as f64;
        let elapsed = (seconds as f64 * f64::from(rules.fleet_speed) - 10.0).max(0.5);
        let mut burn = 0.0;
        let mut holding_cost = 0_i64;
        for (id, count) in flight.fleet.iter_flyable() {
            let ship = self.ship(id)?;
            let consumption = fuel_consumption(ship, researches, rules, traits);
            let speed = ship_speed(ship, researches, traits) as f64;
            let count = i64::try_from(count).unwrap_or(i64::MAX);

            holding_cost = consumption
                .saturating_mul(count)
                .saturating_mul(i64::from(flight.holding_hours))
                .saturating_add(holding_cost);
            let k = (35_000.0 / elapsed) * (d * 10.0 / speed).sqrt();
            let consumed = consumption.saturating_mul(count).saturating_mul(distance);
            burn += consumed as f64 / 35_000.0 * (k / 10.0 + 1.0).powi(2);
        }

        let mut fuel = (burn.round() as i64).saturating_add(1);
        if flight.holding_hours > 0 {
            fuel = fuel.saturating_add((holding_cost / 10).max(1));
        }

        tracing::debug!(
            from = %flight.origin,
            to = %flight.destination,
            distance,
            slowest,
            seconds,
            fuel,
            "flight planned"
        );

        Ok(FlightPlan {
            distance,
            duration: Duration::from_secs(u64::try_from(seconds).unwrap_or(0)),
            fuel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EntityId;

    fn create_test_rules(galaxies: u32, fleet_speed: u32, deuterium_save_factor: f64) -> Ruleset {
        Ruleset {
            fleet_speed,
            deuterium_save_factor,
            galaxies,
            systems: 499,
            donut_galaxy: false,
            donut_system: false,
            ..Ruleset::default()
        }
    }

    fn drives(combustion: u32, impulse: u32, hyperspace: u32) -> Levels {
        Levels::new()
            .with(EntityId::COMBUSTION_DRIVE, combustion)
            .with(EntityId::IMPULSE_DRIVE, impulse)
            .with(EntityId::HYPERSPACE_DRIVE, hyperspace)
    }

    #[test]
    fn test_galaxy_distance() {
        assert_eq!(galaxy_distance(6, 3, 6, false), 60_000);
        assert_eq!(galaxy_distance(1, 2, 6, false), 20_000);
        assert_eq!(galaxy_distance(1, 3, 6, false), 40_000);
        assert_eq!(galaxy_distance(1, 4, 6, false), 60_000);
        assert_eq!(galaxy_distance(1, 5, 6, false), 80_000);
        assert_eq!(galaxy_distance(1, 6, 6, false), 100_000);

        assert_eq!(galaxy_distance(1, 2, 6, true), 20_000);
        assert_eq!(galaxy_distance(1, 3, 6, true), 40_000);
        assert_eq!(galaxy_distance(1, 4, 6, true), 60_000);
        assert_eq!(galaxy_distance(1, 5, 6, true), 40_000);
        assert_eq!(galaxy_distance(1, 6, 6, true), 20_000);
        assert_eq!(galaxy_distance(6, 1, 6, true), 20_000);
    }

    #[test]
    fn test_system_distance() {
        assert_eq!(system_distance(35, 30, 499, 0, false), 3175);

        assert_eq!(system_distance(1, 2, 499, 0, true), 2795);
        assert_eq!(system_distance(1, 499, 499, 0, true), 2795);
        assert_eq!(system_distance(1, 3, 499, 0, true), 2890);
        assert_eq!(system_distance(1, 498, 499, 0, true), 2890);
        assert_eq!(system_distance(498, 1, 499, 0, true), 2890);
    }

    #[test]
    fn test_system_distance_skips_systems() {
        assert_eq!(system_distance(35, 30, 499, 2, false), 2985);
        assert_eq!(system_distance(35, 30, 499, 10, false), 2700);
    }

    #[test]
    fn test_planet_distance() {
        assert_eq!(planet_distance(6, 3), 1015);
    }

    #[test]
    fn test_distance() {
        let rules = Ruleset {
            galaxies: 6,
            ..Ruleset::default()
        };
        let d = |a, b| distance(&a, &b, &rules);
        assert_eq!(d(Coordinate::planet(1, 1, 3), Coordinate::planet(1, 1, 6)), 1015);
        assert_eq!(d(Coordinate::planet(1, 1, 3), Coordinate::planet(1, 498, 6)), 2890);
        assert_eq!(d(Coordinate::planet(6, 1, 3), Coordinate::planet(1, 498, 6)), 20_000);
        assert_eq!(d(Coordinate::planet(6, 1, 3), Coordinate::moon(6, 1, 3)), 5);
    }

    #[test]
    fn test_flight_with_mixed_fighters() {
        let catalog = Catalog::standard();
        let fleet = Fleet::new()
            .with(EntityId::LIGHT_FIGHTER, 16)
            .with(EntityId::HEAVY_FIGHTER, 8)
            .with(EntityId::CRUISER, 4);
        let flight = Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(1, 5, 3), &fleet)
            .at_speed(0.8);
        let rules = create_test_rules(1, 1, 1.0);
        let plan = catalog
            .plan_flight(&flight, &drives(10, 7, 0), &rules, &Traits::default())
            .unwrap();
        assert_eq!(plan.distance, 3080);
        assert_eq!(plan.duration, Duration::from_secs(4966));
        assert_eq!(plan.fuel, 550);
    }

    #[test]
    fn test_flight_with_deuterium_save_factor() {
        let catalog = Catalog::standard();
        let fleet = Fleet::new()
            .with(EntityId::LARGE_CARGO, 12_428)
            .with(EntityId::DEATHSTAR, 1);
        let from = Coordinate::planet(1, 162, 1);
        let flight = Flight::new(from, Coordinate::planet(4, 144, 1), &fleet);
        let rules = create_test_rules(6, 6, 0.5);
        let plan = catalog
            .plan_flight(&flight, &drives(15, 12, 10), &rules, &Traits::default())
            .unwrap();
        assert_eq!(plan.duration, Duration::from_secs(22_594));
        assert_eq!(plan.fuel, 699_587);
    }

    #[test]
    fn test_flight_ignores_solar_satellites() {
        let catalog = Catalog::standard();
        let fleet = Fleet::new()
            .with(EntityId::LARGE_CARGO, 100)
            .with(EntityId::SOLAR_SATELLITE, 50);
        let flight = Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(1, 1, 15), &fleet);
        let rules = create_test_rules(6, 4, 1.0);
        let plan = catalog
            .plan_flight(&flight, &drives(16, 13, 15), &rules, &Traits::default())
            .unwrap();
        assert_eq!(plan.duration, Duration::from_secs(651));
        assert_eq!(plan.fuel, 612);
    }

    #[test]
    fn test_holding_time_fuel() {
        let catalog = Catalog::standard();
        let rules = create_test_rules(6, 4, 1.0);
        let researches = drives(16, 13, 15);
        let fleet = Fleet::new().with(EntityId::LARGE_CARGO, 100);
        let flight = Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(1, 1, 15), &fleet);

        let base = catalog
            .plan_flight(&flight, &researches, &rules, &Traits::default())
            .unwrap();
        let held = catalog
            .plan_flight(&flight.holding(2), &researches, &rules, &Traits::default())
            .unwrap();
        assert_eq!(held.duration, base.duration);
        assert_eq!(held.fuel, base.fuel + 1000);
    }

    #[test]
    fn test_holding_time_costs_at_least_one() {
        let catalog = Catalog::standard();
        let rules = create_test_rules(6, 1, 1.0);
        let fleet = Fleet::new().with(EntityId::ESPIONAGE_PROBE, 1);
        let flight = Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(1, 1, 2), &fleet);

        let base = catalog
            .plan_flight(&flight, &Levels::new(), &rules, &Traits::default())
            .unwrap();
        let held = catalog
            .plan_flight(&flight.holding(1), &Levels::new(), &rules, &Traits::default())
            .unwrap();
        assert_eq!(held.fuel, base.fuel + 1);
    }

    #[test]
    fn test_empty_fleet_has_empty_plan() {
        let catalog = Catalog::standard();
        let rules = Ruleset::default();
        let empty = Fleet::new();
        let grounded = Fleet::new().with(EntityId::SOLAR_SATELLITE, 3);
        for fleet in [&empty, &grounded] {
            let flight =
                Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(2, 1, 1), fleet);
            let plan = catalog
                .plan_flight(&flight, &Levels::new(), &rules, &Traits::default())
                .unwrap();
            assert_eq!(plan, FlightPlan::default());
        }
    }

    #[test]
    fn test_invalid_speed_is_rejected() {
        let catalog = Catalog::standard();
        let fleet = Fleet::new().with(EntityId::SMALL_CARGO, 1);
        let flight = Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(1, 1, 2), &fleet);
        for speed in [0.0, -0.5, 1.5, f64::NAN] {
            let result = catalog.plan_flight(
                &flight.at_speed(speed),
                &Levels::new(),
                &Ruleset::default(),
                &Traits::default(),
            );
            assert!(matches!(result, Err(GameError::InvalidFleetSpeed(_))));
        }
    }

    #[test]
    fn test_zero_fleet_speed_is_rejected() {
        let catalog = Catalog::standard();
        let fleet = Fleet::new().with(EntityId::SMALL_CARGO, 1);
        let flight = Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(2, 1, 1), &fleet);
        let rules = Ruleset {
            fleet_speed: 0,
            ..Ruleset::default()
        };
        let result = catalog.plan_flight(&flight, &Levels::new(), &rules, &Traits::default());
        assert!(matches!(result, Err(GameError::InvalidRuleset(_))));
    }

    #[test]
    fn test_coordinates_outside_universe_are_rejected() {
        let catalog = Catalog::standard();
        let fleet = Fleet::new().with(EntityId::SMALL_CARGO, 1);
        let flight = Flight::new(Coordinate::planet(1, 1, 1), Coordinate::planet(12, 1, 2), &fleet);
        let rules = Ruleset::default();
        let result = catalog.plan_flight(&flight, &Levels::new(), &rules, &Traits::default());
        assert!(matches!(result, Err(GameError::InvalidCoordinate(_))));
    }
}
