//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The aggregation engine itself has no error type: schema gaps and bad cells
//! degrade to sentinel values instead.

use thiserror::Error;

/// Errors that can occur while fetching a ledger snapshot
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Ledger source returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid ledger URL: {0}")]
    InvalidUrl(String),

    #[error("Ledger body could not be parsed: {0}")]
    Parse(#[from] ParseError),
}

/// Errors that can occur while loading CSV into a snapshot
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ledger has no header row")]
    EmptyInput,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
