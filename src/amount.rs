use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole currency units. Neither transactions nor transfers carry minor units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Digit group separator, a narrow no-break space as in `50 000`.
    const GROUP_SEPARATOR: char = '\u{202f}';

    pub const fn new(units: u64) -> Self {
        Amount(units)
    }

    pub const fn units(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, digit) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(Self::GROUP_SEPARATOR);
            }
            grouped.push(digit);
        }
        f.write_str(&grouped)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Amount(units)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::default(), |acc, amount| acc + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_value() {
        assert_eq!(Amount::new(50_000).units(), 50_000);
    }

    #[test]
    fn display_small_values_are_not_grouped() {
        assert_eq!(Amount::new(0).to_string(), "0");
        assert_eq!(Amount::new(7).to_string(), "7");
        assert_eq!(Amount::new(999).to_string(), "999");
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Amount::new(1_000).to_string(), "1\u{202f}000");
        assert_eq!(Amount::new(50_000).to_string(), "50\u{202f}000");
        assert_eq!(Amount::new(150_000).to_string(), "150\u{202f}000");
        assert_eq!(Amount::new(1_234_567).to_string(), "1\u{202f}234\u{202f}567");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::new(0));
    }

    #[test]
    fn sum() {
        let total: Amount = [Amount::new(100), Amount::new(50)].into_iter().sum();
        assert_eq!(total, Amount::new(150));
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(25_000) < Amount::new(45_000));
    }
}
