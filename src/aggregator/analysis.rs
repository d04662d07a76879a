//! One full aggregation pass over a ledger snapshot.

use super::distribution::{describe_distribution, Distribution};
use super::metrics::{compute_metrics, LedgerMetrics, MissingAmountPolicy};
use super::wallets::{build_wallets, WalletLedger};
use crate::ledger::{resolve_schema, LedgerSnapshot, ResolvedSchema};
use log::{debug, info};

/// Options for an aggregation pass
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub missing_amounts: MissingAmountPolicy,

    /// Histogram bin override (default: half the sample, at least 5)
    pub histogram_bins: Option<usize>,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_amounts(mut self, policy: MissingAmountPolicy) -> Self {
        self.missing_amounts = policy;
        self
    }

    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }
}

/// Everything derived from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerAnalysis {
    pub schema: ResolvedSchema,
    pub wallets: WalletLedger,
    pub metrics: LedgerMetrics,
    pub distribution: Option<Distribution>,
}

/// Run schema discovery, wallet accounting and metrics over a snapshot
///
/// **Public** - main entry point for the aggregation engine
///
/// Pure function of the snapshot: no state is kept between calls, so the
/// same snapshot always yields the same analysis.
pub fn analyze(snapshot: &LedgerSnapshot, options: &AnalysisOptions) -> LedgerAnalysis {
    debug!(
        "Analyzing snapshot: {} columns, {} rows",
        snapshot.column_count(),
        snapshot.row_count()
    );

    let schema = resolve_schema(&snapshot.columns);
    let wallets = build_wallets(&snapshot.rows, &schema);
    let metrics = compute_metrics(
        &snapshot.rows,
        &schema,
        wallets.len(),
        options.missing_amounts,
    );
    let distribution = describe_distribution(&metrics, options.histogram_bins);

    info!("Ledger metrics: {}", metrics.summary());

    LedgerAnalysis {
        schema,
        wallets,
        metrics,
        distribution,
    }
}
