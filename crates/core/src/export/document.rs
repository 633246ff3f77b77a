//! Paginated PDF report.
//!
//! The report is laid out first as plain text rows and only then drawn with
//! `printpdf`, so pagination and truncation can be checked without reading
//! PDF bytes back.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::{ExportError, ExportedFile, ReportExporter};
use crate::dates;
use crate::loan::LoanRecord;

/// Report title, drawn at the top of the first page.
pub const DOCUMENT_TITLE: &str = "Equipment Loan Report";
/// Attachment filename.
pub const DOCUMENT_FILENAME: &str = "loan_report.pdf";
/// MIME type.
pub const DOCUMENT_CONTENT_TYPE: &str = "application/pdf";

const COLUMN_COUNT: usize = 6;

/// Column headings. Return date is left out of this report.
pub const DOCUMENT_HEADERS: [&str; COLUMN_COUNT] =
    ["ID", "Borrower", "Item", "Quantity", "Loan Date", "Status"];

/// Fixed column widths in millimetres.
const COLUMN_WIDTHS_MM: [f32; COLUMN_COUNT] = [15.0, 45.0, 55.0, 20.0, 30.0, 25.0];

// Helvetica at 10pt averages a little under 2mm per glyph.
const MM_PER_CHAR: f32 = 2.0;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const TITLE_HEIGHT_MM: f32 = 14.0;
const ROW_HEIGHT_MM: f32 = 7.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const TABLE_FONT_SIZE: f32 = 10.0;

/// Data rows per page, below the title and the repeated header row.
pub const ROWS_PER_PAGE: usize = 35;

/// One page of the report: the header row followed by its data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPage {
    /// Header cells, repeated on every page.
    pub header: [String; COLUMN_COUNT],
    /// Cell text, already truncated to the column widths.
    pub rows: Vec<[String; COLUMN_COUNT]>,
}

impl DocumentPage {
    fn new(rows: Vec<[String; COLUMN_COUNT]>) -> Self {
        Self {
            header: std::array::from_fn(|column| {
                fit_to_column(DOCUMENT_HEADERS[column], column)
            }),
            rows,
        }
    }
}

/// Text layout of the whole report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    /// Title line.
    pub title: String,
    /// Pages in order. Never empty.
    pub pages: Vec<DocumentPage>,
}

impl DocumentLayout {
    /// Lays out the records into pages.
    #[must_use]
    pub fn build(records: &[LoanRecord]) -> Self {
        let rows: Vec<[String; COLUMN_COUNT]> = records.iter().map(layout_row).collect();

        let mut pages: Vec<DocumentPage> = rows
            .chunks(ROWS_PER_PAGE)
            .map(|chunk| DocumentPage::new(chunk.to_vec()))
            .collect();
        if pages.is_empty() {
            pages.push(DocumentPage::new(Vec::new()));
        }

        Self {
            title: DOCUMENT_TITLE.to_string(),
            pages,
        }
    }

    /// Total number of data rows across all pages.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|page| page.rows.len()).sum()
    }

    /// Draws the layout into a PDF byte stream.
    ///
    /// # Errors
    ///
    /// Returns an error if `printpdf` cannot register fonts or serialize.
    pub fn render(&self) -> Result<Vec<u8>, ExportError> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            &self.title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let mut first = Some((first_page, first_layer));
        for (index, page) in self.pages.iter().enumerate() {
            let (page_index, layer_index) = match first.take() {
                Some(indices) => indices,
                None => doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1"),
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
            if index == 0 {
                layer.use_text(
                    self.title.clone(),
                    TITLE_FONT_SIZE,
                    Mm(MARGIN_MM),
                    Mm(y),
                    &bold,
                );
                y -= TITLE_HEIGHT_MM;
            }

            draw_row(&layer, &page.header, y, &bold);
            y -= ROW_HEIGHT_MM;
            for row in &page.rows {
                draw_row(&layer, row, y, &regular);
                y -= ROW_HEIGHT_MM;
            }
        }

        Ok(doc.save_to_bytes()?)
    }
}

fn draw_row(
    layer: &PdfLayerReference,
    cells: &[String; COLUMN_COUNT],
    y: f32,
    font: &IndirectFontRef,
) {
    let mut x = MARGIN_MM;
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS_MM) {
        layer.use_text(cell.clone(), TABLE_FONT_SIZE, Mm(x), Mm(y), font);
        x += width;
    }
}

fn layout_row(record: &LoanRecord) -> [String; COLUMN_COUNT] {
    let cells = [
        record.id.to_string(),
        record.borrower_name.clone(),
        record.item_name.clone(),
        record.quantity.to_string(),
        dates::document_date(record.loan_date),
        record.status().as_str().to_string(),
    ];
    std::array::from_fn(|column| fit_to_column(&cells[column], column))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn column_capacity(column: usize) -> usize {
    // One glyph of padding keeps adjacent columns apart.
    ((COLUMN_WIDTHS_MM[column] / MM_PER_CHAR) as usize).saturating_sub(1)
}

/// Clips text that would run into the next column.
fn fit_to_column(text: &str, column: usize) -> String {
    let capacity = column_capacity(column);
    if text.chars().count() <= capacity {
        return text.to_string();
    }
    let kept: String = text.chars().take(capacity.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// PDF exporter with the reduced column set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExporter;

impl ReportExporter for DocumentExporter {
    fn export(&self, records: &[LoanRecord]) -> Result<ExportedFile, ExportError> {
        let bytes = DocumentLayout::build(records).render()?;
        Ok(ExportedFile {
            filename: DOCUMENT_FILENAME,
            content_type: DOCUMENT_CONTENT_TYPE,
            bytes,
        })
    }
}
