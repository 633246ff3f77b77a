//! Schema bootstrap.
//!
//! The loan table is created from the entity definition for whichever
//! backend is connected. There are no versioned migrations.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entities::loan;

/// Creates the loan table if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(loan::Entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}
