//! Ledger Lens
//!
//! Wallet balances, role inference and summary metrics for
//! published transaction ledgers (CSV exports of a spreadsheet).
//!
//! This crate provides the core implementation for the
//! `ledger-lens` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! ledger-lens analyze --file ledger.csv --summary
//! ledger-lens watch --url "https://docs.google.com/.../pub?output=csv"
//! ```
//!
//! Library users can run one aggregation pass directly:
//!
//! ```no_run
//! use ledger_lens::aggregator::{analyze, AnalysisOptions};
//! use ledger_lens::ledger::LedgerSnapshot;
//!
//! let snapshot = LedgerSnapshot::from_path("ledger.csv").unwrap();
//! let analysis = analyze(&snapshot, &AnalysisOptions::new());
//! println!("{}", analysis.metrics.summary());
//! ```

pub mod aggregator;
pub mod commands;
pub mod fetch;
pub mod format;
pub mod ledger;
pub mod output;
pub mod utils;
