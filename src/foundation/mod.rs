//! Foundation module - shared analytics primitives.
//!
//! Contains the value objects, normalization rules, and error types that
//! form the vocabulary of the market analytics core.

mod errors;
mod metric_field;
mod percent;

pub use errors::{AnalysisError, ValidationError};
pub use metric_field::RawMetricField;
pub use percent::Percent;
