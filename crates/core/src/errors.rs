//! Core error types for the SpendSmart client.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest, status codes, body decoding) are converted to these types by
//! the client crate.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the SpendSmart client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Transport-agnostic error type for backend API calls.
///
/// All details are kept as strings so that the core crate does not depend on
/// the HTTP stack.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or no response was received.
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The requested resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid amount for '{field}': {value}")]
    InvalidAmount { field: String, value: f64 },

    #[error("Invalid date window: {0}")]
    InvalidDateWindow(String),

    #[error("Invalid report period: {0}")]
    InvalidPeriod(String),
}

impl ValidationError {
    /// Creates an InvalidAmount error.
    pub fn invalid_amount(field: impl Into<String>, value: f64) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value,
        }
    }

    /// Creates an InvalidDateWindow error.
    pub fn date_window(message: impl Into<String>) -> Self {
        Self::InvalidDateWindow(message.into())
    }
}

impl Error {
    /// Returns true when the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound(_)))
    }
}

/// Rejects amounts that are not finite or not strictly positive.
pub(crate) fn ensure_positive_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::invalid_amount(field, value).into());
    }
    Ok(())
}

/// Rejects blank strings.
pub(crate) fn ensure_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount_rules() {
        assert!(ensure_positive_amount("amount", 10.0).is_ok());
        assert!(ensure_positive_amount("amount", 0.0).is_err());
        assert!(ensure_positive_amount("amount", -1.0).is_err());
        assert!(ensure_positive_amount("amount", f64::NAN).is_err());
        assert!(ensure_positive_amount("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_blank_rejected() {
        assert!(matches!(
            ensure_not_blank("name", "   "),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "name"
        ));
        assert!(ensure_not_blank("name", "Vacation").is_ok());
    }

    #[test]
    fn test_not_found_detection() {
        let err: Error = ApiError::NotFound("/api/goals/1".to_string()).into();
        assert!(err.is_not_found());
        let err: Error = ApiError::Request("timeout".to_string()).into();
        assert!(!err.is_not_found());
    }
}
