//! Report downloads.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::info;

use peminjaman_core::export::{DocumentExporter, ReportExporter, SpreadsheetExporter};
use peminjaman_shared::AppError;

use crate::{AppState, error::error_response};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/report/pdf", get(export_pdf))
        .route("/report/excel", get(export_excel))
}

/// GET `/report/pdf` - Paginated PDF of every loan.
async fn export_pdf(State(state): State<AppState>) -> Response {
    export_report(&state, DocumentExporter).await
}

/// GET `/report/excel` - XLSX workbook of every loan.
async fn export_excel(State(state): State<AppState>) -> Response {
    export_report(&state, SpreadsheetExporter).await
}

/// Loads every loan in ascending id order and streams the exported file back
/// as an attachment.
async fn export_report<E>(state: &AppState, exporter: E) -> Response
where
    E: ReportExporter + Send + 'static,
{
    let records = match state.loans.list_for_export().await {
        Ok(records) => records,
        Err(e) => return error_response(&state.templates, &e.into()),
    };
    let count = records.len();

    let exported =
        tokio::task::spawn_blocking(move || exporter.export(&records).map_err(AppError::from))
            .await;
    let file = match exported {
        Ok(Ok(file)) => file,
        Ok(Err(e)) => return error_response(&state.templates, &e),
        Err(e) => {
            return error_response(
                &state.templates,
                &AppError::Internal(format!("Export task failed: {e}")),
            );
        }
    };

    info!(
        filename = file.filename,
        records = count,
        bytes = file.bytes.len(),
        "Report exported"
    );

    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, file.content_disposition()),
        ],
        file.bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use crate::test_support::{body_bytes, get, post_form, send, test_state};

    fn header_value(response: &axum::response::Response, name: header::HeaderName) -> String {
        response
            .headers()
            .get(name)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_pdf_report_with_no_loans() {
        let app = crate::create_router(test_state().await);

        let response = send(&app, get("/report/pdf")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_value(&response, header::CONTENT_TYPE),
            "application/pdf"
        );
        assert_eq!(
            header_value(&response, header::CONTENT_DISPOSITION),
            "attachment; filename=\"loan_report.pdf\""
        );
        assert!(body_bytes(response).await.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_excel_report_with_loans() {
        let app = crate::create_router(test_state().await);
        for body in [
            "borrowerName=Alice&itemName=Microscope&quantity=2&loanDate=2024-03-01",
            "borrowerName=Bob&itemName=Tripod&quantity=1&loanDate=2024-03-02",
        ] {
            send(&app, post_form("/add", body)).await;
        }

        let response = send(&app, get("/report/excel")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_value(&response, header::CONTENT_TYPE),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(
            header_value(&response, header::CONTENT_DISPOSITION),
            "attachment; filename=\"loan_report.xlsx\""
        );
        // XLSX is a zip archive.
        assert!(body_bytes(response).await.starts_with(b"PK"));
    }
}
