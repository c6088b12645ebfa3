//! Type-safe price representation in integer minor-currency units.
//!
//! All catalog and order amounts are euro cents. Arithmetic is saturating so
//! totals derived from untrusted quantities cannot overflow, and display
//! formatting follows Dutch conventions (`€ 1.234,56`).

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in euro cents.
///
/// Stored as an integer number of minor units so derived totals are exact.
/// Conversion to a decimal amount happens only at the display boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero euros.
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as a two-decimal euro value.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Format for display in Dutch locale conventions, e.g. `€ 45,00` or
    /// `€ 1.234,56`.
    #[must_use]
    pub fn format_eur(&self) -> String {
        let text = self.as_decimal().abs().to_string();
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut reversed = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                reversed.push('.');
            }
            reversed.push(c);
        }
        let grouped: String = reversed.chars().rev().collect();

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("\u{20ac} {sign}{grouped},{frac_part}")
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(rhs)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_eur())
    }
}
