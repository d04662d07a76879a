//! Output writers for ledger reports.
//!
//! This module handles:
//! - The versioned JSON report schema
//! - Writing and reading reports on disk
//! - Terminal text summaries

pub mod json;
pub mod report;
pub mod summary;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use report::{LedgerReport, SchemaSummary};
pub use summary::{generate_text_summary, render_ledger_table};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
