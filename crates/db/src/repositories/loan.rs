//! Loan repository, the record store behind every loan operation.
//!
//! Dates are read back as text and normalized here, so SQLite (plain date
//! text), PostgreSQL (`DATE`), and legacy rows holding full timestamps all
//! reach callers as a calendar date or nothing.

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, sea_query::Expr,
};
use tracing::debug;

use peminjaman_core::dates;
use peminjaman_core::loan::{LoanDraft, LoanRecord, LoanState, LoanStatus, LoanUpdate};
use peminjaman_shared::{AppError, LoanId};

use crate::entities::loan;

/// Error types for loan operations.
#[derive(Debug, thiserror::Error)]
pub enum LoanRepositoryError {
    /// No row has this id.
    #[error("Loan not found: {0}")]
    NotFound(LoanId),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<LoanRepositoryError> for AppError {
    fn from(err: LoanRepositoryError) -> Self {
        match err {
            LoanRepositoryError::NotFound(id) => Self::NotFound(format!("Loan {id} not found")),
            LoanRepositoryError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// A loan row with its date columns cast to text.
#[derive(Debug, FromQueryResult)]
struct LoanRow {
    id: i32,
    borrower_name: String,
    item_name: String,
    quantity: i32,
    loan_date: Option<String>,
    return_date: Option<String>,
}

impl LoanRow {
    fn into_record(self) -> LoanRecord {
        let loan_date = read_date(self.id, "loan_date", self.loan_date.as_deref());
        let return_date = read_date(self.id, "return_date", self.return_date.as_deref());
        LoanRecord {
            id: LoanId::new(self.id),
            borrower_name: self.borrower_name,
            item_name: self.item_name,
            quantity: self.quantity,
            loan_date,
            state: LoanState::from_return_date(return_date),
        }
    }
}

fn read_date(id: i32, column: &'static str, raw: Option<&str>) -> Option<NaiveDate> {
    let parsed = dates::parse_optional_date(raw);
    if parsed.is_none()
        && let Some(raw) = raw.filter(|value| !value.trim().is_empty())
    {
        debug!(loan_id = id, column, raw, "Unreadable stored date treated as absent");
    }
    parsed
}

/// Loan repository for CRUD operations.
///
/// Callers always receive owned copies of the stored records.
#[derive(Debug, Clone)]
pub struct LoanRepository {
    db: DatabaseConnection,
}

impl LoanRepository {
    /// Creates a new loan repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn select_rows() -> Select<loan::Entity> {
        loan::Entity::find()
            .select_only()
            .column(loan::Column::Id)
            .column(loan::Column::BorrowerName)
            .column(loan::Column::ItemName)
            .column(loan::Column::Quantity)
            .column_as(Expr::cust("CAST(loan_date AS TEXT)"), "loan_date")
            .column_as(Expr::cust("CAST(return_date AS TEXT)"), "return_date")
    }

    /// Lists every loan, most recent first.
    pub async fn list(&self) -> Result<Vec<LoanRecord>, LoanRepositoryError> {
        let rows = Self::select_rows()
            .order_by_desc(loan::Column::Id)
            .into_model::<LoanRow>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(LoanRow::into_record).collect())
    }

    /// Lists every loan, oldest first, for the report exporters.
    pub async fn list_for_export(&self) -> Result<Vec<LoanRecord>, LoanRepositoryError> {
        let rows = Self::select_rows()
            .order_by_asc(loan::Column::Id)
            .into_model::<LoanRow>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(LoanRow::into_record).collect())
    }

    /// Finds a loan by id.
    ///
    /// # Errors
    ///
    /// Returns [`LoanRepositoryError::NotFound`] if no row matches.
    pub async fn get(&self, id: LoanId) -> Result<LoanRecord, LoanRepositoryError> {
        Self::select_rows()
            .filter(loan::Column::Id.eq(id.into_inner()))
            .into_model::<LoanRow>()
            .one(&self.db)
            .await?
            .map(LoanRow::into_record)
            .ok_or(LoanRepositoryError::NotFound(id))
    }

    /// Records a new loan. The item is always out with no return date.
    pub async fn create(&self, draft: LoanDraft) -> Result<LoanId, LoanRepositoryError> {
        let model = loan::ActiveModel {
            borrower_name: Set(draft.borrower_name),
            item_name: Set(draft.item_name),
            quantity: Set(draft.quantity),
            loan_date: Set(draft.loan_date),
            return_date: Set(None),
            status: Set(LoanStatus::Borrowed.as_str().to_string()),
            ..Default::default()
        };

        let result = loan::Entity::insert(model).exec(&self.db).await?;
        Ok(LoanId::new(result.last_insert_id))
    }

    /// Overwrites a loan. The stored status always follows the return date.
    ///
    /// # Errors
    ///
    /// Returns [`LoanRepositoryError::NotFound`] if no row matches.
    pub async fn update(&self, id: LoanId, update: LoanUpdate) -> Result<(), LoanRepositoryError> {
        let LoanUpdate { details, state } = update;
        let model = loan::ActiveModel {
            borrower_name: Set(details.borrower_name),
            item_name: Set(details.item_name),
            quantity: Set(details.quantity),
            loan_date: Set(details.loan_date),
            return_date: Set(state.return_date()),
            status: Set(state.status().as_str().to_string()),
            ..Default::default()
        };

        let result = loan::Entity::update_many()
            .set(model)
            .filter(loan::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(LoanRepositoryError::NotFound(id));
        }
        Ok(())
    }

    /// Deletes a loan permanently. Deleting a missing id is not an error.
    ///
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: LoanId) -> Result<bool, LoanRepositoryError> {
        let result = loan::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
