//! The five-component resource vector.
//!
//! All arithmetic is component-wise integer math, saturating at the `i64`
//! bounds. Subtraction does not clamp at zero: callers check
//! affordability with [`Resources::can_afford`] before committing
//! anything.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Metal, crystal, deuterium, energy and dark matter.
///
/// Energy is a balance and may be negative.
///
/// # Example RON
///
/// ```ron
/// (metal: 20000, crystal: 7000, deuterium: 2000)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resources {
    /// Metal.
    #[serde(default)]
    pub metal: i64,
    /// Crystal.
    #[serde(default)]
    pub crystal: i64,
    /// Deuterium.
    #[serde(default)]
    pub deuterium: i64,
    /// Energy balance.
    #[serde(default)]
    pub energy: i64,
    /// Dark matter.
    #[serde(default)]
    pub darkmatter: i64,
}

impl Resources {
    /// Empty vector.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a vector of the three base materials.
    #[must_use]
    pub const fn new(metal: i64, crystal: i64, deuterium: i64) -> Self {
        Self {
            metal,
            crystal,
            deuterium,
            energy: 0,
            darkmatter: 0,
        }
    }

    /// Set the energy component.
    #[must_use]
    pub const fn with_energy(mut self, energy: i64) -> Self {
        self.energy = energy;
        self
    }

    /// Set the dark matter component.
    #[must_use]
    pub const fn with_darkmatter(mut self, darkmatter: i64) -> Self {
        self.darkmatter = darkmatter;
        self
    }

    /// Sum of metal, crystal and deuterium.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.metal
            .saturating_add(self.crystal)
            .saturating_add(self.deuterium)
    }

    /// Market value: deuterium weighs 3, crystal 2, metal 1.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.deuterium
            .saturating_mul(3)
            .saturating_add(self.crystal.saturating_mul(2))
            .saturating_add(self.metal)
    }

    /// Check if every component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.metal == 0
            && self.crystal == 0
            && self.deuterium == 0
            && self.energy == 0
            && self.darkmatter == 0
    }

    /// Component-wise `self >= other`.
    #[must_use]
    pub const fn gte(&self, other: &Self) -> bool {
        self.metal >= other.metal
            && self.crystal >= other.crystal
            && self.deuterium >= other.deuterium
            && self.energy >= other.energy
            && self.darkmatter >= other.darkmatter
    }

    /// Component-wise `self <= other`.
    #[must_use]
    pub const fn lte(&self, other: &Self) -> bool {
        other.gte(self)
    }

    /// Check if this stock covers `price`.
    #[must_use]
    pub const fn can_afford(&self, price: &Self) -> bool {
        self.gte(price)
    }

    /// How many times `price` fits into this stock.
    ///
    /// Only the positive components of `price` constrain the result. A
    /// price with no positive component fits an unbounded number of times
    /// and returns `u64::MAX`.
    #[must_use]
    pub fn fits(&self, price: &Self) -> u64 {
        let pairs = [
            (self.metal, price.metal),
            (self.crystal, price.crystal),
            (self.deuterium, price.deuterium),
            (self.energy, price.energy),
            (self.darkmatter, price.darkmatter),
        ];
        pairs
            .iter()
            .filter(|(_, cost)| *cost > 0)
            .map(|(have, cost)| u64::try_from(have / cost).unwrap_or(0))
            .min()
            .unwrap_or(u64::MAX)
    }

    /// Apply `f` to metal, crystal, deuterium and energy.
    ///
    /// Dark matter is never part of a cost curve and is left as is.
    #[must_use]
    pub fn map_costs(self, f: impl Fn(i64) -> i64) -> Self {
        Self {
            metal: f(self.metal),
            crystal: f(self.crystal),
            deuterium: f(self.deuterium),
            energy: f(self.energy),
            darkmatter: self.darkmatter,
        }
    }
}

impl Add for Resources {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            metal: self.metal.saturating_add(rhs.metal),
            crystal: self.crystal.saturating_add(rhs.crystal),
            deuterium: self.deuterium.saturating_add(rhs.deuterium),
            energy: self.energy.saturating_add(rhs.energy),
            darkmatter: self.darkmatter.saturating_add(rhs.darkmatter),
        }
    }
}

impl Sub for Resources {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            metal: self.metal.saturating_sub(rhs.metal),
            crystal: self.crystal.saturating_sub(rhs.crystal),
            deuterium: self.deuterium.saturating_sub(rhs.deuterium),
            energy: self.energy.saturating_sub(rhs.energy),
            darkmatter: self.darkmatter.saturating_sub(rhs.darkmatter),
        }
    }
}

impl Mul<i64> for Resources {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self {
            metal: self.metal.saturating_mul(rhs),
            crystal: self.crystal.saturating_mul(rhs),
            deuterium: self.deuterium.saturating_mul(rhs),
            energy: self.energy.saturating_mul(rhs),
            darkmatter: self.darkmatter.saturating_mul(rhs),
        }
    }
}

impl AddAssign for Resources {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Resources {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for Resources {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Format an integer with `,` thousands separators.
pub(crate) fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}|{}]",
            group_thousands(self.metal),
            group_thousands(self.crystal),
            group_thousands(self.deuterium)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_saturates() {
        let big = Resources::new(i64::MAX / 2, i64::MAX, 10);
        assert_eq!((big * 4).metal, i64::MAX);
        assert_eq!((big + big).crystal, i64::MAX);
        assert_eq!((Resources::ZERO - big - big).crystal, i64::MIN);
        assert_eq!(big.total(), i64::MAX);
        assert_eq!(big.value(), i64::MAX);
        assert_eq!((big + big).deuterium, 20);
    }

    #[test]
    fn test_total_and_value() {
        let r = Resources::new(1000, 2000, 3000);
        assert_eq!(r.total(), 6000);
        assert_eq!(r.value(), 1000 + 4000 + 9000);
    }

    #[test]
    fn test_sub_may_go_negative() {
        let r = Resources::new(100, 0, 0) - Resources::new(300, 10, 0);
        assert_eq!(r, Resources::new(-200, -10, 0));
    }

    #[test]
    fn test_arithmetic() {
        let mut r = Resources::new(1, 2, 3) + Resources::new(10, 20, 30);
        assert_eq!(r, Resources::new(11, 22, 33));
        r -= Resources::new(1, 2, 3);
        assert_eq!(r, Resources::new(10, 20, 30));
        r += Resources::new(0, 0, 0).with_energy(5);
        assert_eq!(r * 3, Resources::new(30, 60, 90).with_energy(15));
    }

    #[test]
    fn test_comparisons() {
        let stock = Resources::new(1000, 1000, 1000);
        assert!(stock.can_afford(&Resources::new(1000, 500, 0)));
        assert!(!stock.can_afford(&Resources::new(1001, 0, 0)));
        assert!(Resources::new(1, 1, 1).lte(&stock));
        assert!(!stock.lte(&Resources::new(1, 1, 1)));
    }

    #[test]
    fn test_fits() {
        let stock = Resources::new(10_000, 5000, 100);
        assert_eq!(stock.fits(&Resources::new(2000, 2000, 0)), 2);
        assert_eq!(stock.fits(&Resources::new(2000, 0, 0)), 5);
        assert_eq!(stock.fits(&Resources::new(0, 0, 1000)), 0);
        assert_eq!(stock.fits(&Resources::ZERO), u64::MAX);
    }

    #[test]
    fn test_display() {
        let r = Resources::new(1_000_000, 2_000_000, 3_000_000);
        assert_eq!(r.to_string(), "[1,000,000|2,000,000|3,000,000]");
        assert_eq!(Resources::new(-1500, 0, 999).to_string(), "[-1,500|0|999]");
    }

    #[test]
    fn test_sum() {
        let total: Resources = [Resources::new(1, 0, 0), Resources::new(0, 2, 0)]
            .into_iter()
            .sum();
        assert_eq!(total, Resources::new(1, 2, 0));
    }

    #[test]
    fn test_ron_defaults() {
        let r: Resources = ron::from_str("(metal: 60, crystal: 15)").unwrap();
        assert_eq!(r, Resources::new(60, 15, 0));
    }
}
