//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod models;
pub mod utils;
pub mod watch;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_args};
pub use models::{AnalyzeArgs, LedgerSource, WatchArgs};
pub use utils::{display_version, inspect_source, load_snapshot, validate_report_file};
pub use watch::{execute_watch, validate_watch_args};
