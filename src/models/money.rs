//! Money type for representing currency amounts
//!
//! Amounts are exact decimals, so `1.999` stays `1.999` and sums never
//! drift. On the wire an amount is a plain JSON number in currency units
//! (`4.5`). Accepted amounts are limited to what survives that round trip:
//! at most fifteen significant digits and a magnitude below one
//! quadrillion.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Most significant digits an amount may carry
pub const MAX_DIGITS: usize = 15;

/// Most decimal places an amount may carry
const MAX_SCALE: i64 = 28;

/// Represents an exact monetary amount in currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from hundredths of the currency unit
    ///
    /// # Examples
    /// ```
    /// use spendwise::models::Money;
    /// let amount = Money::from_cents(450); // 4.50
    /// assert_eq!(amount, Money::parse("4.5").unwrap());
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2).normalize())
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact decimal value
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// `self / whole` as a float, for percentages and bars
    ///
    /// Zero when `whole` is not positive.
    pub fn ratio_of(&self, whole: Money) -> f64 {
        if !whole.is_positive() {
            return 0.0;
        }
        match (self.0.to_f64(), whole.0.to_f64()) {
            (Some(part), Some(whole)) => part / whole,
            _ => 0.0,
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "1.999", ".5", "5.", "1e3".
    /// The value is kept exactly as written.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (number, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => {
                let exponent: i32 = body[idx + 1..].parse().map_err(|_| invalid())?;
                (&body[..idx], i64::from(exponent))
            }
            None => (body, 0),
        };

        let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        // Significant digits and the power of ten they are scaled down by
        let joined = format!("{}{}", whole, frac);
        let digits = joined.trim_start_matches('0');
        let trimmed = digits.trim_end_matches('0');
        if trimmed.is_empty() {
            return Ok(Self::zero());
        }
        let scale = frac.len() as i64 - exponent - (digits.len() - trimmed.len()) as i64;

        let integer_digits = trimmed.len() as i64 - scale;
        if trimmed.len() > MAX_DIGITS || integer_digits > MAX_DIGITS as i64 || scale > MAX_SCALE {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        let mut mantissa: i64 = trimmed.parse().map_err(|_| invalid())?;
        let mut scale = scale;
        if scale < 0 {
            mantissa *= 10_i64.pow((-scale) as u32);
            scale = 0;
        }
        if negative {
            mantissa = -mantissa;
        }

        Ok(Self(Decimal::new(mantissa, scale as u32)))
    }

    /// Format with a currency symbol, always showing at least two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, Self(self.0.abs()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.normalize();
        if value.scale() < 2 {
            write!(f, "{:.2}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0.normalize();
        if value.scale() == 0 {
            if let Some(units) = value.to_i64() {
                return serializer.serialize_i64(units);
            }
        }
        // Decimal text parses to the nearest float, which prints back as the same text
        let float: f64 = value
            .to_string()
            .parse()
            .map_err(|e| serde::ser::Error::custom(format!("amount {}: {}", value, e)))?;
        serializer.serialize_f64(float)
    }
}

struct MoneyVisitor;

impl MoneyVisitor {
    fn from_text<E: de::Error>(text: &str) -> Result<Money, E> {
        Money::parse(text).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an amount as a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Self::from_text(&v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Self::from_text(&v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("amount is not finite: {}", v)));
        }
        // f64 Display is the shortest text that reads back as the same float
        Self::from_text(&v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Self::from_text(v)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("Amount out of range (at most 15 significant digits): {0}")]
    OutOfRange(String),
}
