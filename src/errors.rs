//! Unified application error type.
//! All modules (ingest, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Row-level problems (a punch missing a field, an unparseable check-in) are
//! NOT AppError: they are accumulated next to the partial result and reported
//! to the caller. Only run-level failures live here.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ingest
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Header row {0} not found in sheet")]
    HeaderRowNotFound(usize),

    #[error("Missing required column(s) {missing:?}; found {found:?}")]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid ISO week (expected YYYY-Wnn): {0}")]
    InvalidWeek(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
