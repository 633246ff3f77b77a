//! Loan domain types.

use chrono::NaiveDate;

use peminjaman_shared::LoanId;

use super::error::LoanError;
use crate::dates;

/// Stored status of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanStatus {
    /// The item is still out.
    Borrowed,
    /// The item came back.
    Returned,
}

impl LoanStatus {
    /// Returns the value written to the `status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Borrowed => "borrowed",
            Self::Returned => "returned",
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a loan.
///
/// A loan is returned exactly when it carries a return date, so the status
/// and the return date can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanState {
    /// Item is out.
    Active,
    /// Item came back on the given date.
    Returned(NaiveDate),
}

impl LoanState {
    /// Derives the state from an optional return date.
    #[must_use]
    pub const fn from_return_date(return_date: Option<NaiveDate>) -> Self {
        match return_date {
            Some(date) => Self::Returned(date),
            None => Self::Active,
        }
    }

    /// Returns the status implied by this state.
    #[must_use]
    pub const fn status(self) -> LoanStatus {
        match self {
            Self::Active => LoanStatus::Borrowed,
            Self::Returned(_) => LoanStatus::Returned,
        }
    }

    /// Returns the return date, if any.
    #[must_use]
    pub const fn return_date(self) -> Option<NaiveDate> {
        match self {
            Self::Active => None,
            Self::Returned(date) => Some(date),
        }
    }
}

/// One borrowing transaction as handed out by the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRecord {
    /// Engine-assigned key.
    pub id: LoanId,
    /// Who borrowed the item.
    pub borrower_name: String,
    /// What was borrowed.
    pub item_name: String,
    /// Number of units.
    pub quantity: i32,
    /// Loan date. `None` only when the stored value could not be read as a date.
    pub loan_date: Option<NaiveDate>,
    /// Borrowed or returned.
    pub state: LoanState,
}

impl LoanRecord {
    /// Returns the status derived from the state.
    #[must_use]
    pub const fn status(&self) -> LoanStatus {
        self.state.status()
    }

    /// Returns the return date, if the item came back.
    #[must_use]
    pub const fn return_date(&self) -> Option<NaiveDate> {
        self.state.return_date()
    }
}

/// Validated fields of the add form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanDraft {
    /// Who borrowed the item.
    pub borrower_name: String,
    /// What was borrowed.
    pub item_name: String,
    /// Number of units, never negative.
    pub quantity: i32,
    /// Loan date.
    pub loan_date: NaiveDate,
}

impl LoanDraft {
    /// Coerces raw form values into a draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not a non-negative integer or the
    /// loan date is not a `YYYY-MM-DD` date.
    pub fn parse(
        borrower_name: &str,
        item_name: &str,
        quantity: &str,
        loan_date: &str,
    ) -> Result<Self, LoanError> {
        Ok(Self {
            borrower_name: borrower_name.trim().to_string(),
            item_name: item_name.trim().to_string(),
            quantity: parse_quantity(quantity)?,
            loan_date: dates::parse_form_date("loan_date", loan_date)?,
        })
    }
}

/// Validated fields of the edit form.
///
/// There is no status field: the state is derived from the return date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanUpdate {
    /// Editable loan details.
    pub details: LoanDraft,
    /// Borrowed, or returned on a date.
    pub state: LoanState,
}

impl LoanUpdate {
    /// Builds an update, deriving the state from the return date.
    #[must_use]
    pub const fn new(details: LoanDraft, return_date: Option<NaiveDate>) -> Self {
        Self {
            details,
            state: LoanState::from_return_date(return_date),
        }
    }

    /// Coerces raw form values into an update. An empty return date means the
    /// item is still out.
    ///
    /// # Errors
    ///
    /// Returns an error if any field fails [`LoanDraft::parse`] or the return
    /// date is non-empty but not a `YYYY-MM-DD` date.
    pub fn parse(
        borrower_name: &str,
        item_name: &str,
        quantity: &str,
        loan_date: &str,
        return_date: &str,
    ) -> Result<Self, LoanError> {
        let details = LoanDraft::parse(borrower_name, item_name, quantity, loan_date)?;
        let return_date = dates::parse_optional_form_date("return_date", return_date)?;
        Ok(Self::new(details, return_date))
    }
}

fn parse_quantity(raw: &str) -> Result<i32, LoanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoanError::MissingField("quantity"));
    }
    let quantity: i32 = trimmed
        .parse()
        .map_err(|_| LoanError::InvalidQuantity(raw.to_string()))?;
    if quantity < 0 {
        return Err(LoanError::NegativeQuantity(quantity));
    }
    Ok(quantity)
}
