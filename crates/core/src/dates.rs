//! Date normalization between form input, stored values, and display text.
//!
//! Three representations meet here:
//! - form input and edit-form values, `YYYY-MM-DD`
//! - whatever the storage engine hands back for a date column, which may be
//!   a plain date, a timestamp with or without an offset, or null
//! - display text, `DD Mon YYYY` in the list view
//!
//! The write path is strict: form dates must parse or the request is rejected.
//! The read path never fails: [`parse_optional_date`] treats anything it cannot
//! read as an absent date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::loan::LoanError;

/// Form and spreadsheet format.
pub const FORM_FORMAT: &str = "%Y-%m-%d";
/// List view format.
pub const DISPLAY_FORMAT: &str = "%d %b %Y";
/// Document report format.
pub const DOCUMENT_FORMAT: &str = "%d-%m-%Y";
/// Shown in the list view when an item has not come back.
pub const MISSING_RETURN_DATE: &str = "-";

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const OFFSET_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%#z";

/// Parses a required `YYYY-MM-DD` form field.
///
/// # Errors
///
/// Returns [`LoanError::MissingField`] for blank input and
/// [`LoanError::InvalidDate`] for anything that is not a calendar date.
pub fn parse_form_date(field: &'static str, raw: &str) -> Result<NaiveDate, LoanError> {
    parse_optional_form_date(field, raw)?.ok_or(LoanError::MissingField(field))
}

/// Parses an optional `YYYY-MM-DD` form field; blank input is `None`.
///
/// # Errors
///
/// Returns [`LoanError::InvalidDate`] for non-blank input that is not a
/// calendar date.
pub fn parse_optional_form_date(
    field: &'static str,
    raw: &str,
) -> Result<Option<NaiveDate>, LoanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, FORM_FORMAT)
        .map(Some)
        .map_err(|_| LoanError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Reads a stored date value. Never fails: null, blank, or unparsable input
/// is `None`.
///
/// Timestamps keep the calendar date they were written with; no time-zone
/// conversion is applied.
#[must_use]
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDate> {
    let value = raw.map(str::trim).filter(|value| !value.is_empty())?;

    if let Ok(date) = NaiveDate::parse_from_str(value, FORM_FORMAT) {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = DateTime::parse_from_str(value, OFFSET_TIMESTAMP_FORMAT) {
        return Some(timestamp.date_naive());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
}

/// List view text, `DD Mon YYYY`; empty when absent.
#[must_use]
pub fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

/// List view text for a return date, `-` when the item is still out.
#[must_use]
pub fn display_return_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || MISSING_RETURN_DATE.to_string(),
        |date| date.format(DISPLAY_FORMAT).to_string(),
    )
}

/// Edit form value, `YYYY-MM-DD`; empty when absent.
#[must_use]
pub fn form_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(FORM_FORMAT).to_string())
        .unwrap_or_default()
}

/// Document report text, `DD-MM-YYYY`; empty when absent.
#[must_use]
pub fn document_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DOCUMENT_FORMAT).to_string())
        .unwrap_or_default()
}
