//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Item construction never fails; these errors only surface when a caller
/// opts into validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item attribute is out of range (e.g. negative unit price).
    #[error("invalid attribute `{field}`: {reason}")]
    InvalidAttribute { field: &'static str, reason: String },

    /// An expiration date is empty or malformed.
    #[error("invalid date `{value}`: {reason}")]
    InvalidDate { value: String, reason: String },

    /// A value failed to parse (e.g. a decimal amount).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_attribute(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
