//! Snapshot acquisition: HTTP fetch of published CSV ledgers plus a
//! caller-owned TTL cache.

pub mod cache;
pub mod client;

pub use cache::SnapshotCache;
pub use client::{validate_source_url, LedgerClient};
