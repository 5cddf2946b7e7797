//! Raw metric field normalization.
//!
//! Upstream tables deliver metric values either as numbers (41.0) or as
//! percent-suffixed strings ("41.0%"). This is the single point where both
//! shapes normalize to a finite f64.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A metric value as found in a raw market record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMetricField {
    Number(f64),
    Text(String),
}

impl RawMetricField {
    /// Normalizes to a finite f64.
    ///
    /// Numbers must already be finite; text is trimmed, an optional trailing
    /// percent sign is stripped, and the remainder parsed. Anything else is a
    /// malformed field, never a silent zero.
    pub fn normalize(&self, field: &str) -> Result<f64, ValidationError> {
        match self {
            RawMetricField::Number(n) => {
                if n.is_finite() {
                    Ok(*n)
                } else {
                    Err(ValidationError::not_finite(field))
                }
            }
            RawMetricField::Text(s) => {
                let trimmed = s.trim();
                let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
                numeric
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        ValidationError::invalid_format(field, format!("'{s}'"))
                    })
            }
        }
    }
}

impl fmt::Display for RawMetricField {
    /// Shows the raw value, for error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawMetricField::Number(n) => write!(f, "{n}"),
            RawMetricField::Text(s) => write!(f, "{s}"),
        }
    }
}
