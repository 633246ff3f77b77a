//! Loan error types.

use thiserror::Error;

/// Errors raised while coercing form input into loan values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    /// Identifier is not an integer.
    #[error("Invalid loan id: {0:?}")]
    InvalidId(String),

    /// Quantity is not an integer.
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// Quantity is below zero.
    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(i32),

    /// Date field is not `YYYY-MM-DD`.
    #[error("Invalid {field}: {value:?} is not a YYYY-MM-DD date")]
    InvalidDate {
        /// Form field name.
        field: &'static str,
        /// Submitted value.
        value: String,
    },

    /// Required field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl From<LoanError> for peminjaman_shared::AppError {
    fn from(err: LoanError) -> Self {
        Self::Validation(err.to_string())
    }
}
