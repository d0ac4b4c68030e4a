//! Validation errors for option strings and records.

use thiserror::Error;

/// Why a raw string or a structured record was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The keyword pattern left after token stripping is too short.
    #[error("pattern must be at least {min} characters (got {len})")]
    PatternTooShort { len: usize, min: usize },

    /// The keyword pattern has leading or trailing whitespace.
    #[error("pattern must not start or end with whitespace: {pattern:?}")]
    PatternNotTrimmed { pattern: String },

    /// The keyword pattern contains `|` or `&&`.
    #[error("pattern must not contain {operator:?}")]
    PatternContainsReservedOperator { operator: &'static str },

    /// Precision outside `50..=100`.
    #[error("precision must be between 50 and 100 (got {value})")]
    PrecisionOutOfRange { value: String },

    /// A reader character exclusion that is empty or contains `}`.
    #[error("character exclusion must be non-empty and free of '}}': {value:?}")]
    InvalidCharExclusion { value: String },

    /// A numeric reader directive whose digits are not a valid integer.
    #[error("invalid numeric value for {field}: {value:?}")]
    InvalidNumericValue { field: &'static str, value: String },
}
