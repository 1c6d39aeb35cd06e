//! Seed values and the integer domain they live in
//!
//! A seed is a signed integer. Every derived quantity (glyph scheme, color
//! scheme, modulus, sign flips) uses Euclidean remainders, so negative seeds
//! classify into the same non-negative buckets the deployed metadata uses.
//!
//! The magnitude cap keeps `x * y` for every grid cell inside `i128`:
//! `|x|, |y| <= 63 * 2^57 < 2^63`, so the product stays below `2^126`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PenroseError, Result};

/// Largest accepted seed magnitude (`2^57`).
pub const MAX_SEED_MAGNITUDE: i64 = 1 << 57;

/// A validated seed.
///
/// Construct with [`Seed::new`] or parse from a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Seed(i64);

impl Seed {
    /// Validate a raw integer as a seed.
    ///
    /// # Errors
    ///
    /// Returns [`PenroseError::InvalidSeed`] when `|value| > 2^57`.
    pub fn new(value: i64) -> Result<Self> {
        if value.unsigned_abs() > MAX_SEED_MAGNITUDE.unsigned_abs() {
            return Err(PenroseError::InvalidSeed(value.to_string()));
        }
        Ok(Self(value))
    }

    /// The raw integer value.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Euclidean remainder of the seed by `modulus`, always in `[0, modulus)`.
    pub fn bucket(self, modulus: i64) -> i64 {
        self.0.rem_euclid(modulus)
    }

    /// Whether the seed is odd (for negative seeds too).
    pub fn is_odd(self) -> bool {
        self.bucket(2) == 1
    }

    /// Canonical decimal form used as the seed → id lookup key.
    ///
    /// No leading zeros, a leading `-` for negative seeds, `0` for zero.
    pub fn key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = PenroseError;

    /// Parse a decimal seed. Surrounding whitespace is ignored; anything
    /// else that is not an `i64` in range is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| PenroseError::InvalidSeed(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for Seed {
    type Error = PenroseError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Seed> for i64 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}
