use std::{
    fmt::Display,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sqlx::Type;
use thiserror::Error;

/// ISO 4217 numeric code for US dollars, as used in EMVCo payment payloads.
pub const USD_ISO4217_NUMERIC: &str = "840";

//--------------------------------------     UsdAmount       ---------------------------------------------------------
/// A US dollar amount, stored as an integer number of cents.
///
/// Prices persist and round-trip exactly; floating point only appears at the JSON boundary, where amounts are
/// conventionally expressed in dollars.
#[derive(Debug, Clone, Copy, Default, Type, PartialEq, Eq, PartialOrd, Ord)]
#[sqlx(transparent)]
pub struct UsdAmount(i64);

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in US cents: {0}")]
pub struct UsdConversionError(String);

impl UsdAmount {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// The amount in cents.
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for UsdAmount {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl Add for UsdAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for UsdAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Display for UsdAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

/// Parses a decimal price string, e.g. "6.40" or "8". Fractional parts longer than two digits are rejected rather
/// than silently rounded.
impl FromStr for UsdAmount {
    type Err = UsdConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let mut parts = digits.splitn(2, '.');
        let whole = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| UsdConversionError(s.to_string()))?
            .parse::<i64>()
            .map_err(|e| UsdConversionError(format!("{s}: {e}")))?;
        let cents = match parts.next() {
            None | Some("") => 0,
            Some(frac) if frac.len() <= 2 => {
                let v = frac.parse::<i64>().map_err(|e| UsdConversionError(format!("{s}: {e}")))?;
                if frac.len() == 1 {
                    v * 10
                } else {
                    v
                }
            },
            Some(_) => return Err(UsdConversionError(format!("{s}: more than two decimal places"))),
        };
        Ok(Self(sign * (whole * 100 + cents)))
    }
}

impl Serialize for UsdAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for UsdAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        let cents = (dollars * 100.0).round();
        if !cents.is_finite() || cents.abs() > i64::MAX as f64 {
            return Err(de::Error::custom(format!("amount out of range: {dollars}")));
        }
        Ok(Self(cents as i64))
    }
}
