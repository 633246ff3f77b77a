//! Loan pages: list, add, edit and delete.
//!
//! Every successful mutation answers `303 See Other` back to the list.

use axum::{
    Form, Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use minijinja::context;
use serde::Deserialize;
use tracing::info;

use peminjaman_core::dates;
use peminjaman_core::loan::{LoanDraft, LoanUpdate, parse_loan_id};
use peminjaman_shared::{AppError, LoanId};

use crate::{
    AppState,
    error::error_response,
    views::{LoanFormView, LoanRowView},
};

/// Creates the loan routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_loans))
        .route("/add", get(add_form).post(add_loan))
        .route("/edit", get(edit_form).post(edit_loan))
        .route("/delete", post(delete_loan))
}

// ============================================================================
// Request Types
// ============================================================================

/// Submitted loan form.
///
/// Missing fields deserialize as empty strings so that validation errors
/// come from the loan parser rather than the extractor. Any `status` field
/// is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoanForm {
    /// Loan id, only sent by the edit form.
    pub id: String,
    /// Borrower.
    pub borrower_name: String,
    /// Item.
    pub item_name: String,
    /// Number of units.
    pub quantity: String,
    /// `YYYY-MM-DD`.
    pub loan_date: String,
    /// `YYYY-MM-DD`, or empty while the item is still out.
    pub return_date: String,
}

/// Query string or form carrying only an id.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdParams {
    /// Raw loan id.
    pub id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET `/` - List every loan, newest first.
async fn list_loans(State(state): State<AppState>) -> Response {
    let loans = match state.loans.list().await {
        Ok(loans) => loans,
        Err(e) => return error_response(&state.templates, &e.into()),
    };

    let rows: Vec<LoanRowView> = loans.iter().map(LoanRowView::from).collect();
    render(&state, "index.html", context! { loans => rows })
}

/// GET `/add` - Empty loan form.
async fn add_form(State(state): State<AppState>) -> Response {
    let today = dates::form_date(Some(Local::now().date_naive()));
    render(&state, "add.html", context! { today })
}

/// POST `/add` - Record a new loan.
async fn add_loan(State(state): State<AppState>, Form(form): Form<LoanForm>) -> Response {
    let draft = match LoanDraft::parse(
        &form.borrower_name,
        &form.item_name,
        &form.quantity,
        &form.loan_date,
    ) {
        Ok(draft) => draft,
        Err(e) => return error_response(&state.templates, &e.into()),
    };

    match state.loans.create(draft).await {
        Ok(id) => {
            info!(loan_id = %id, "Loan recorded");
            Redirect::to("/").into_response()
        }
        Err(e) => error_response(&state.templates, &e.into()),
    }
}

/// GET `/edit?id=N` - Loan form prefilled from the stored record.
async fn edit_form(State(state): State<AppState>, Query(params): Query<IdParams>) -> Response {
    let id = match parse_loan_id(&params.id) {
        Ok(id) => id,
        Err(e) => return error_response(&state.templates, &e.into()),
    };

    match state.loans.get(id).await {
        Ok(loan) => render(
            &state,
            "edit.html",
            context! { loan => LoanFormView::from(&loan) },
        ),
        Err(e) => error_response(&state.templates, &e.into()),
    }
}

/// POST `/edit` - Overwrite a loan.
///
/// The id comes from the form body, or from the query string when the body
/// has none.
async fn edit_loan(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    Form(form): Form<LoanForm>,
) -> Response {
    let (id, update) = match edit_request(&params, &form) {
        Ok(request) => request,
        Err(e) => return error_response(&state.templates, &e),
    };
    let status = update.state.status();

    match state.loans.update(id, update).await {
        Ok(()) => {
            info!(loan_id = %id, %status, "Loan updated");
            Redirect::to("/").into_response()
        }
        Err(e) => error_response(&state.templates, &e.into()),
    }
}

/// POST `/delete` - Remove a loan. A missing id still redirects.
async fn delete_loan(State(state): State<AppState>, Form(form): Form<IdParams>) -> Response {
    let id = match parse_loan_id(&form.id) {
        Ok(id) => id,
        Err(e) => return error_response(&state.templates, &e.into()),
    };

    match state.loans.delete(id).await {
        Ok(removed) => {
            info!(loan_id = %id, removed, "Loan delete requested");
            Redirect::to("/").into_response()
        }
        Err(e) => error_response(&state.templates, &e.into()),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn edit_request(params: &IdParams, form: &LoanForm) -> Result<(LoanId, LoanUpdate), AppError> {
    let raw_id = if form.id.trim().is_empty() {
        &params.id
    } else {
        &form.id
    };
    let id = parse_loan_id(raw_id)?;
    let update = LoanUpdate::parse(
        &form.borrower_name,
        &form.item_name,
        &form.quantity,
        &form.loan_date,
        &form.return_date,
    )?;
    Ok((id, update))
}

fn render<S: serde::Serialize>(state: &AppState, name: &str, ctx: S) -> Response {
    match state.templates.render(name, ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_response(&state.templates, &e),
    }
}
