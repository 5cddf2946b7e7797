//! Error types for the analytics core.

use thiserror::Error;

/// Errors that occur during value object construction and normalization.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' is not a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a not-finite validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the analysis operations.
///
/// Classification is all-or-nothing: no partial result accompanies an error,
/// and the core never logs-and-swallows. Display and retry decisions belong
/// to the caller.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// Zero markets were supplied. The midpoints would be undefined, so this
    /// is a hard error rather than a silent NaN chart.
    #[error("No markets supplied for analysis")]
    EmptyInput,

    /// A metric field is present but cannot be coerced to a finite number.
    /// Distinct from an absent field, which normalizes to zero.
    #[error("Market '{market}' has invalid {field}: {value}")]
    InvalidMetric {
        market: String,
        field: &'static str,
        value: String,
    },

    /// The weight configuration cannot produce finite scores.
    #[error("Invalid score weights: {reason}")]
    InvalidWeights { reason: String },
}

impl AnalysisError {
    /// Creates an invalid metric error.
    pub fn invalid_metric(
        market: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        AnalysisError::InvalidMetric {
            market: market.into(),
            field,
            value: value.into(),
        }
    }

    /// Creates an invalid weights error.
    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidWeights {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("awareness", 0.0, 100.0, 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'awareness' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("intent", "not a number");
        assert_eq!(
            format!("{}", err),
            "Field 'intent' has invalid format: not a number"
        );
    }

    #[test]
    fn empty_input_displays_correctly() {
        assert_eq!(
            format!("{}", AnalysisError::EmptyInput),
            "No markets supplied for analysis"
        );
    }

    #[test]
    fn invalid_metric_displays_market_and_field() {
        let err = AnalysisError::invalid_metric("Japan", "awareness", "N/A");
        assert_eq!(format!("{}", err), "Market 'Japan' has invalid awareness: N/A");
    }

    #[test]
    fn invalid_weights_displays_the_reason() {
        let err = AnalysisError::invalid_weights("growth weights must have a positive sum");
        assert_eq!(
            format!("{}", err),
            "Invalid score weights: growth weights must have a positive sum"
        );
    }
}
