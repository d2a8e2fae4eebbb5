//! Unified application error type.
//! All modules (db, store, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown column '{column}' in table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("Column '{column}' of table {table} cannot be edited")]
    ReadOnlyColumn { table: String, column: String },

    #[error("No row with id '{id}' in table {table}")]
    RowNotFound { table: String, id: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid assignment '{0}' (expected column=value)")]
    InvalidAssignment(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Worker already exists: {0}")]
    DuplicateWorker(String),

    #[error("Unknown {kind} '{value}'. Known values: {known}")]
    UnknownLookup {
        kind: &'static str,
        value: String,
        known: String,
    },

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

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
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
