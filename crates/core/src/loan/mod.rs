//! Equipment loan records.
//!
//! This module provides the loan domain:
//! - `LoanRecord` as handed out by the record store
//! - `LoanState`, which ties the status to the return date
//! - Form coercion into `LoanDraft` and `LoanUpdate`

pub mod error;
pub mod types;


pub use error::LoanError;
pub use types::*;

use peminjaman_shared::LoanId;

/// Parses a loan id submitted in a query string or form.
///
/// # Errors
///
/// Returns [`LoanError::InvalidId`] if the value is not an integer.
pub fn parse_loan_id(raw: &str) -> Result<LoanId, LoanError> {
    raw.parse()
        .map_err(|_| LoanError::InvalidId(raw.to_string()))
}
