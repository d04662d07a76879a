//! Aggregation of ledger snapshots into wallet balances and metrics.
//!
//! This module transforms a parsed ledger into:
//! - Per-wallet sent/received/balance with an inferred role
//! - Summary statistics over the amount column
//! - Histogram and cumulative volume series

pub mod analysis;
pub mod distribution;
pub mod metrics;
pub mod wallets;

// Re-export main types and functions
pub use analysis::{analyze, AnalysisOptions, LedgerAnalysis};
pub use distribution::{
    build_histogram, cumulative_volume, default_bin_count, describe_distribution, Distribution,
    HistogramBin,
};
pub use metrics::{aggregate, compute_metrics, LedgerMetrics, MissingAmountPolicy};
pub use wallets::{build_wallets, ranked_by_balance, WalletAccount, WalletLedger, WalletRole};
