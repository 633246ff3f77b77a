//! Error pages.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use tracing::{error, warn};

use peminjaman_shared::AppError;

use crate::Templates;

/// Renders an [`AppError`] as an HTML error page with its status code.
///
/// Server-side failures are logged with their full detail; the page only
/// carries [`AppError::public_message`]. If the error page itself cannot be
/// rendered the message is sent as plain text.
pub fn error_response(templates: &Templates, err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(code = err.error_code(), error = %err, "Request failed");
    } else {
        warn!(code = err.error_code(), error = %err, "Request rejected");
    }

    let message = err.public_message();
    match templates.render(
        "error.html",
        context! { status => status.as_u16(), code => err.error_code(), message => &message },
    ) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(render_err) => {
            error!(error = %render_err, "Failed to render error page");
            (status, message).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[tokio::test]
    async fn test_not_found_page() {
        let templates = Templates::new().unwrap();
        let response = error_response(&templates, &AppError::NotFound("Loan 7 not found".into()));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Loan 7 not found"));
    }

    #[tokio::test]
    async fn test_database_error_page_hides_detail() {
        let templates = Templates::new().unwrap();
        let response = error_response(
            &templates,
            &AppError::Database("no such table: loan".into()),
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(!html.contains("no such table"));
    }
}
