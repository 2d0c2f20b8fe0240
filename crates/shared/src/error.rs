//! Application-wide error types.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed, missing or out-of-range input.
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A credit would drive the balance below zero.
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// A debit would lift the balance above the ledger ceiling.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    /// Unsupported currency pair reached the converter.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::InsufficientFunds(_) | Self::LimitExceeded(_) => 422,
            Self::NotFound(_) => 404,
            Self::Conversion(_) | Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InsufficientFunds(_) => "INSUFFICIENT_FUNDS",
            Self::LimitExceeded(_) => "BALANCE_LIMIT_EXCEEDED",
            Self::Conversion(_) => "CONVERSION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for faults the caller cannot fix by changing the request.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
