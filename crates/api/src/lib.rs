//! HTTP layer with Axum routes, server-rendered pages and report downloads.
//!
//! This crate provides:
//! - Loan list, add, edit and delete pages
//! - PDF and XLSX report downloads
//! - Error pages mapped from [`AppError`]

pub mod error;
pub mod routes;
pub mod templates;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use peminjaman_db::LoanRepository;
use peminjaman_shared::AppError;

pub use templates::Templates;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loan record store.
    pub loans: LoanRepository,
    /// Compiled page templates.
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Builds the state around an open database connection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if an embedded template fails to compile.
    pub fn new(db: DatabaseConnection) -> Result<Self, AppError> {
        let templates = Templates::new()?;
        Ok(Self {
            loans: LoanRepository::new(db),
            templates: Arc::new(templates),
        })
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::app_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
