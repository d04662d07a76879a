//! Ledger snapshots and schema discovery.
//!
//! This module handles:
//! - Loading CSV ledgers into untyped snapshots
//! - Locating the amount/from/to columns
//! - Coercing cells to numbers
//! - Profiling columns for inspection

pub mod coerce;
pub mod profile;
pub mod schema;
pub mod snapshot;

// Re-export main types
pub use coerce::{coerce_column, coerce_numeric, CoercedColumn};
pub use profile::{profile_columns, ColumnKind, ColumnProfile};
pub use schema::{resolve_schema, ColumnRef, ResolvedSchema};
pub use snapshot::{CellValue, LedgerSnapshot, TransactionRecord};
