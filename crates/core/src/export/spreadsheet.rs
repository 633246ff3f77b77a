//! Single-sheet XLSX report with every column.

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::{ExportError, ExportedFile, ReportExporter};
use crate::dates;
use crate::loan::LoanRecord;

/// Worksheet name. The workbook holds no other sheet.
pub const SHEET_NAME: &str = "Loans";
/// Attachment filename.
pub const SPREADSHEET_FILENAME: &str = "loan_report.xlsx";
/// MIME type.
pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Longest text a cell can hold.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Column headings.
pub const SPREADSHEET_HEADERS: [&str; 7] = [
    "ID",
    "Borrower",
    "Item",
    "Quantity",
    "Loan Date",
    "Return Date",
    "Status",
];

/// XLSX exporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetExporter;

impl SpreadsheetExporter {
    fn write_header(worksheet: &mut Worksheet) -> Result<(), ExportError> {
        let bold = Format::new().set_bold();
        for (col, header) in (0u16..).zip(SPREADSHEET_HEADERS) {
            worksheet.write_string_with_format(0, col, header, &bold)?;
        }
        Ok(())
    }

    fn write_record(
        worksheet: &mut Worksheet,
        row: u32,
        record: &LoanRecord,
    ) -> Result<(), ExportError> {
        worksheet.write_number(row, 0, record.id.into_inner())?;
        worksheet.write_string(row, 1, clip_cell(&record.borrower_name))?;
        worksheet.write_string(row, 2, clip_cell(&record.item_name))?;
        worksheet.write_number(row, 3, record.quantity)?;
        if record.loan_date.is_some() {
            worksheet.write_string(row, 4, dates::form_date(record.loan_date))?;
        }
        // Absent return date stays a blank cell.
        if let Some(return_date) = record.return_date() {
            worksheet.write_string(row, 5, dates::form_date(Some(return_date)))?;
        }
        worksheet.write_string(row, 6, record.status().as_str())?;
        Ok(())
    }
}

/// Cuts text down to [`MAX_CELL_CHARS`] characters.
fn clip_cell(text: &str) -> &str {
    text.char_indices()
        .nth(MAX_CELL_CHARS)
        .map_or(text, |(end, _)| &text[..end])
}

impl ReportExporter for SpreadsheetExporter {
    fn export(&self, records: &[LoanRecord]) -> Result<ExportedFile, ExportError> {
        let mut workbook = Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(SHEET_NAME)?;
            Self::write_header(worksheet)?;
            for (row, record) in (1u32..).zip(records) {
                Self::write_record(worksheet, row, record)?;
            }
            worksheet.autofit();
        }

        let bytes = workbook.save_to_buffer()?;
        Ok(ExportedFile {
            filename: SPREADSHEET_FILENAME,
            content_type: SPREADSHEET_CONTENT_TYPE,
            bytes,
        })
    }
}
