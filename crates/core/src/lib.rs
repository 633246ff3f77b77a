//! Core loan logic for Peminjaman.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `loan` - Loan records, the borrowed/returned state, form coercion
//! - `dates` - Date normalization between form, storage, and display
//! - `export` - PDF and spreadsheet reports

pub mod dates;
pub mod export;
pub mod loan;
