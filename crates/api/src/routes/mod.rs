//! Route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod loans;
pub mod reports;

/// Creates the application router with all routes.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(loans::routes())
        .merge(reports::routes())
}
