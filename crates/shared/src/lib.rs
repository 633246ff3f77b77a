//! Shared errors, identifiers, and configuration for Peminjaman.
//!
//! This crate provides common types used across all other crates:
//! - Typed loan identifiers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, DatabaseEngine, ServerConfig};
pub use error::AppError;
pub use types::LoanId;
