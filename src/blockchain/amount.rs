use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use std::fmt;

/// Number of minor units in one whole coin (8 decimal places)
pub const UNITS_PER_COIN: i64 = 100_000_000;

/// Largest magnitude, in whole coins, accepted from a floating point value
pub const MAX_TRANSFER_COINS: i64 = 1_000_000_000;

/// Errors that can occur when converting into an amount
#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount is not a finite number: {0}")]
    NotFinite(f64),

    #[error("Amount out of range: {0}")]
    OutOfRange(f64),
}

/// A signed fixed-precision amount of coins
///
/// Stored as an integer count of minor units so that hashing the same value
/// always produces the same bytes, whatever the platform. All arithmetic is
/// checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from raw minor units
    pub const fn from_units(units: i64) -> Self {
        Amount(units)
    }

    /// Creates an amount from a whole number of coins
    pub const fn from_coins(coins: i64) -> Self {
        Amount(coins * UNITS_PER_COIN)
    }

    /// Narrows a wide minor-unit total, if it fits
    pub fn from_wide_units(units: i128) -> Option<Self> {
        i64::try_from(units).ok().map(Amount)
    }

    /// Converts a floating point coin value, rounding to the nearest minor unit
    ///
    /// Values above `MAX_TRANSFER_COINS` in magnitude are rejected.
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value));
        }

        if value.abs() > MAX_TRANSFER_COINS as f64 {
            return Err(AmountError::OutOfRange(value));
        }

        Ok(Amount((value * UNITS_PER_COIN as f64).round() as i64))
    }

    /// Raw minor units
    pub const fn units(self) -> i64 {
        self.0
    }

    /// Lossy conversion for presentation
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / UNITS_PER_COIN as f64
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    pub fn checked_neg(self) -> Option<Amount> {
        self.0.checked_neg().map(Amount)
    }

    /// Multiplies the amount by an integer count
    pub fn checked_times(self, count: i64) -> Option<Amount> {
        self.0.checked_mul(count).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_coin = UNITS_PER_COIN as u64;
        write!(f, "{}{}.{:08}", sign, abs / per_coin, abs % per_coin)
    }
}

// The wire format is a plain JSON number; the canonical hash encoding uses
// `units()` instead.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Amount::from_f64(value).map_err(serde::de::Error::custom)
    }
}
