//! Configuration and constants for the CLI and the aggregation engine.

use std::time::Duration;

/// Default timeout for ledger fetch requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default freshness window for cached ledger snapshots
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Column discovery keywords. Amount tiers are checked in order:
// every column is scanned for "amount" before any is scanned for "value".
pub const AMOUNT_KEYWORDS: &[&str] = &["amount", "value", "total"];
pub const SENDER_KEYWORD: &str = "from";
pub const RECIPIENT_KEYWORD: &str = "to";

/// Cell contents treated as "no address" (compared case-insensitively)
pub const ABSENT_MARKERS: &[&str] = &["nan", "none", "null"];

// Ledger table display
pub const ABBREVIATED_COLUMN_KEYWORDS: &[&str] = &["hash", "from", "to"];
pub const LEDGER_HASH_CHARS: usize = 10;
pub const ADDRESS_FRONT_CHARS: usize = 6;
pub const ADDRESS_BACK_CHARS: usize = 4;

/// Column profile samples longer than this are cut and suffixed with "..."
pub const SAMPLE_MAX_CHARS: usize = 50;

/// Lower bound on histogram bins
pub const MIN_HISTOGRAM_BINS: usize = 5;

/// Upper bound on histogram bins, applied to both defaults and overrides
pub const MAX_HISTOGRAM_BINS: usize = 1000;
