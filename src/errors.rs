//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("InvalidQuery: {0}")]
    InvalidQuery(String),

    // ---------------------------
    // Chain engine errors
    // ---------------------------
    #[error("Invalid chain: {0}")]
    InvalidChain(String),

    #[error("Invalid date order: {0}")]
    InvalidDateOrder(String),

    #[error("Segment ordinal out of range: {0}")]
    OutOfRangeOrdinal(usize),

    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
