//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Every failure is terminal for the request that produced it.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed id or form field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Connection or query failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Template or document generation failure.
    #[error("Render error: {0}")]
    Render(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Database(_) | Self::Render(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code used in logs and error pages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Render(_) => "RENDER_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the user.
    ///
    /// Storage and rendering details stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Database(_) => "Failed to access the loan records".to_string(),
            Self::Render(_) => "Failed to render the page".to_string(),
            Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}
