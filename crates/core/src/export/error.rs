//! Export error types.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors that can occur while generating a report file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// PDF generation failed.
    #[error("Document generation failed: {0}")]
    Document(String),

    /// XLSX generation failed.
    #[error("Spreadsheet generation failed: {0}")]
    Spreadsheet(#[from] XlsxError),
}

impl From<printpdf::Error> for ExportError {
    fn from(err: printpdf::Error) -> Self {
        Self::Document(format!("{err:?}"))
    }
}

impl From<ExportError> for peminjaman_shared::AppError {
    fn from(err: ExportError) -> Self {
        Self::Render(err.to_string())
    }
}
