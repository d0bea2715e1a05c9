//! Application-wide error taxonomy.
//!
//! Every module-level error enum maps onto one of four kinds so the API
//! layer can translate errors uniformly into per-field messages.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// The four error kinds surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input shape or value.
    Validation,
    /// Unique-constraint violation.
    Duplicate,
    /// Referenced entity absent.
    NotFound,
    /// A ledger mutation could not be applied atomically.
    Consistency,
}

impl ErrorKind {
    /// Returns the HTTP status code for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::Duplicate => 409,
            Self::Consistency => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Duplicate => "DUPLICATE_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Consistency => "CONSISTENCY_ERROR",
        }
    }
}

/// Application error with a kind and a human-readable message.
///
/// Module errors carry precise context; this is the flattened form the
/// request-handling collaborator receives.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error kind.
    pub kind: ErrorKind,
    /// Human-readable message with per-field detail.
    pub message: String,
}

impl AppError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Validation, message: message.into() }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Duplicate, message: message.into() }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::NotFound, message: message.into() }
    }

    /// Creates a consistency error.
    #[must_use]
    pub fn consistency(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Consistency, message: message.into() }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}
