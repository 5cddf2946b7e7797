//! Percent value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A survey percentage between 0 and 100 inclusive.
///
/// Survey values carry one decimal place ("41.0%"), so this wraps an f64
/// rather than an integer. The range only holds for finite input; the
/// clamping constructor lets non-finite values through for analysis-time
/// rejection, while [`Percent::try_new`] enforces the range up front.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Percent, clamping finite values to the valid range.
    ///
    /// Non-finite input is carried through unchanged so that analysis-time
    /// validation rejects the malformed value; it must not become a silent
    /// zero that classifies like a real measurement.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(value);
        }
        Self(value.max(0.0).min(100.0))
    }

    /// Creates a Percent, returning an error if non-finite or out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("percent"));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percent", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl FromStr for Percent {
    type Err = ValidationError;

    /// Parses "41.0%" or "41.0"; the trailing percent sign is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let value: f64 = numeric
            .parse()
            .map_err(|_| ValidationError::invalid_format("percent", format!("'{s}'")))?;
        Self::try_new(value)
    }
}
