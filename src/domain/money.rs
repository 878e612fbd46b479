use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// A monetary value in the smallest currency unit.
///
/// All face values, prices and funds are expressed in `Cents` so that the
/// change arithmetic stays exact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Self = Self(0);

    /// Largest face value or price a machine accepts.
    ///
    /// With a `u32` coin count, `MAX_UNIT * count` always fits in a `u64`.
    pub const MAX_UNIT: Self = Self(u32::MAX as u64);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Cents) -> Option<Cents> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_mul(self, count: u32) -> Option<Cents> {
        self.0.checked_mul(u64::from(count)).map(Self)
    }

    /// How many whole `unit`s fit into this amount.
    pub fn units_of(&self, unit: Cents) -> u64 {
        if unit.is_zero() { 0 } else { self.0 / unit.0 }
    }
}

impl Sub for Cents {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_arithmetic() {
        let a = Cents::new(65);
        let b = Cents::new(35);
        assert_eq!(a.checked_add(b), Some(Cents::new(100)));
        assert_eq!(a - b, Cents::new(30));
        assert_eq!(Cents::new(25).checked_mul(4), Some(Cents::new(100)));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = Cents::new(1 << 63);
        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(huge.checked_mul(2), None);
        assert_eq!(Cents::new(u64::MAX).checked_add(Cents::ZERO), Some(Cents::new(u64::MAX)));
    }

    #[test]
    fn test_max_unit_times_any_count_fits() {
        assert!(Cents::MAX_UNIT.checked_mul(u32::MAX).is_some());
    }

    #[test]
    fn test_units_of() {
        assert_eq!(Cents::new(440).units_of(Cents::new(100)), 4);
        assert_eq!(Cents::new(35).units_of(Cents::new(100)), 0);
        assert_eq!(Cents::new(35).units_of(Cents::ZERO), 0);
    }
}
