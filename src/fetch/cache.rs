//! Time-boxed snapshot cache owned by the caller.
//!
//! There is no process-wide cache: whoever drives periodic refreshes holds a
//! `SnapshotCache` and passes the current instant in, which keeps expiry
//! testable without sleeping.

use crate::ledger::LedgerSnapshot;
use crate::utils::config::DEFAULT_CACHE_TTL;
use log::debug;
use std::time::{Duration, Instant};

struct CachedSnapshot {
    fetched_at: Instant,
    snapshot: LedgerSnapshot,
}

/// Holds the most recent snapshot for a fixed freshness window
pub struct SnapshotCache {
    ttl: Duration,
    entry: Option<CachedSnapshot>,
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// True when a snapshot exists and is younger than the TTL at `now`
    pub fn is_fresh(&self, now: Instant) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|entry| now.saturating_duration_since(entry.fetched_at) < self.ttl)
    }

    /// Return the cached snapshot while fresh, otherwise call `fetch`
    ///
    /// A failed fetch leaves the previous entry in place and returns the error.
    pub fn get_or_fetch<F, E>(&mut self, now: Instant, fetch: F) -> Result<&LedgerSnapshot, E>
    where
        F: FnOnce() -> Result<LedgerSnapshot, E>,
    {
        let entry = match self.entry.take() {
            Some(entry) if now.saturating_duration_since(entry.fetched_at) < self.ttl => {
                debug!("Snapshot cache hit");
                entry
            }
            stale => {
                debug!("Snapshot cache miss, fetching");
                match fetch() {
                    Ok(snapshot) => CachedSnapshot {
                        fetched_at: now,
                        snapshot,
                    },
                    Err(error) => {
                        self.entry = stale;
                        return Err(error);
                    }
                }
            }
        };

        Ok(&self.entry.insert(entry).snapshot)
    }

    /// Force the next `get_or_fetch` to refetch
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
