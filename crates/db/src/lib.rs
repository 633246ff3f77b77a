//! Database layer with `SeaORM` entity and the loan record store.
//!
//! This crate provides:
//! - `SeaORM` entity definition for the loan table
//! - The loan repository
//! - Schema bootstrap for SQLite and PostgreSQL

pub mod entities;
pub mod repositories;
pub mod schema;

pub use repositories::{LoanRepository, LoanRepositoryError};
pub use schema::ensure_schema;

use peminjaman_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection to the configured database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    connect_url(&config.connection_url(), config.max_connections).await
}

/// Establishes a connection to a database URL.
///
/// One connection is kept open so an in-memory SQLite database survives
/// between queries.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_url(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    options
        .max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await
}
