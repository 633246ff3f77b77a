//! Template view models.
//!
//! The list page shows dates as `DD Mon YYYY` with `-` for a missing return
//! date. The edit form needs `YYYY-MM-DD` so date inputs prefill.

use serde::Serialize;

use peminjaman_core::dates;
use peminjaman_core::loan::LoanRecord;

/// One row of the loan list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanRowView {
    /// Loan id.
    pub id: i32,
    /// Borrower.
    pub borrower_name: String,
    /// Item.
    pub item_name: String,
    /// Number of units.
    pub quantity: i32,
    /// Display loan date.
    pub loan_date: String,
    /// Display return date, `-` when the item is still out.
    pub return_date: String,
    /// `borrowed` or `returned`.
    pub status: &'static str,
}

impl From<&LoanRecord> for LoanRowView {
    fn from(record: &LoanRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            borrower_name: record.borrower_name.clone(),
            item_name: record.item_name.clone(),
            quantity: record.quantity,
            loan_date: dates::display_date(record.loan_date),
            return_date: dates::display_return_date(record.return_date()),
            status: record.status().as_str(),
        }
    }
}

/// Prefilled values of the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanFormView {
    /// Loan id.
    pub id: i32,
    /// Borrower.
    pub borrower_name: String,
    /// Item.
    pub item_name: String,
    /// Number of units.
    pub quantity: i32,
    /// `YYYY-MM-DD`, or empty.
    pub loan_date: String,
    /// `YYYY-MM-DD`, or empty while the item is still out.
    pub return_date: String,
    /// `borrowed` or `returned`.
    pub status: &'static str,
}

impl From<&LoanRecord> for LoanFormView {
    fn from(record: &LoanRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            borrower_name: record.borrower_name.clone(),
            item_name: record.item_name.clone(),
            quantity: record.quantity,
            loan_date: dates::form_date(record.loan_date),
            return_date: dates::form_date(record.return_date()),
            status: record.status().as_str(),
        }
    }
}
