use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed-point monetary amount stored as whole cents.
///
/// All aggregation happens on the integer representation; conversion to
/// floating point only occurs at presentation boundaries (percentages,
/// JSON numbers, formatted text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a decimal amount to cents, rounding to the nearest cent.
    /// Returns `None` for NaN or infinite input.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self((value * 100.0).round() as i64))
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// This amount as a percentage of `total`, or 0.0 when `total` is zero.
    pub fn percent_of(self, total: Money) -> f64 {
        if total.0 == 0 {
            0.0
        } else {
            self.0 as f64 / total.0 as f64 * 100.0
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, value| acc + value)
    }
}

impl fmt::Display for Money {
    /// Renders with exactly two decimal places, e.g. `-12.05`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).ok_or_else(|| D::Error::custom("amount is not a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(Money::from_f64(12.345).unwrap().cents(), 1235);
        assert_eq!(Money::from_f64(0.004).unwrap().cents(), 0);
        assert_eq!(Money::from_f64(-5.0).unwrap().cents(), -500);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Money::from_f64(f64::NAN).is_none());
        assert!(Money::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::from_cents(170_00).to_string(), "170.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1305).to_string(), "-13.05");
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(Money::from_cents(500).percent_of(Money::ZERO), 0.0);
        assert_eq!(Money::from_cents(50).percent_of(Money::from_cents(200)), 25.0);
    }

    #[test]
    fn sums_without_drift() {
        let parts = vec![Money::from_f64(0.1).unwrap(); 10];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total, Money::from_f64(1.0).unwrap());
    }
}
