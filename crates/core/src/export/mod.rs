//! Downloadable loan reports.
//!
//! Two stateless serializers turn the full record list into a file:
//! - [`DocumentExporter`] - paginated PDF with a reduced column set
//! - [`SpreadsheetExporter`] - single-sheet XLSX with every column
//!
//! Both expect records ordered by ascending id and accept an empty slice.

pub mod document;
pub mod error;
pub mod spreadsheet;


pub use document::{DocumentExporter, DocumentLayout, DocumentPage};
pub use error::ExportError;
pub use spreadsheet::SpreadsheetExporter;

use crate::loan::LoanRecord;

/// A generated report ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Attachment filename.
    pub filename: &'static str,
    /// MIME type.
    pub content_type: &'static str,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Returns the `Content-Disposition` header value for this file.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// A serializer from loan records to a downloadable file.
pub trait ReportExporter {
    /// Serializes the records, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying document library fails.
    fn export(&self, records: &[LoanRecord]) -> Result<ExportedFile, ExportError>;
}
