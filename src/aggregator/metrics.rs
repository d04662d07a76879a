//! Summary statistics over the ledger's amount column.
//!
//! Statistics are reported as `None` ("unavailable") when the ledger has no
//! amount column or no amount parses, so callers can tell "no numeric data"
//! apart from "numeric data that sums to zero".

use super::wallets::build_wallets;
use crate::format::format_magnitude;
use crate::ledger::{coerce_column, ResolvedSchema, TransactionRecord};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// How rows with a missing or unparseable amount enter the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAmountPolicy {
    /// Count the row with amount 0 (pulls average and median down)
    #[default]
    ZeroFill,

    /// Leave the row out of the statistics sample
    Exclude,
}

/// Aggregate metrics of one ledger snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerMetrics {
    /// Number of rows, regardless of amount availability
    pub transaction_count: usize,

    pub total_volume: Option<f64>,
    pub average_amount: Option<f64>,
    pub median_amount: Option<f64>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,

    /// Sample standard deviation; needs at least two values
    pub standard_deviation: Option<f64>,

    pub unique_wallet_count: usize,

    /// The values the statistics were computed over, in ledger order
    pub amounts: Vec<f64>,
}

impl LedgerMetrics {
    /// True when numeric amount statistics were computed
    pub fn has_amounts(&self) -> bool {
        self.total_volume.is_some()
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let show = |value: Option<f64>| value.map(format_magnitude).unwrap_or_else(|| "n/a".to_string());
        format!(
            "Transactions: {} | Wallets: {} | Volume: {} | Avg: {} | Median: {} | Max: {}",
            self.transaction_count,
            self.unique_wallet_count,
            show(self.total_volume),
            show(self.average_amount),
            show(self.median_amount),
            show(self.max_amount)
        )
    }
}

/// Compute ledger metrics, building the wallet map for the unique wallet count
///
/// **Public** - standalone entry point; `analyze` uses `compute_metrics`
/// directly so the wallet map is built once per pass
pub fn aggregate(
    rows: &[TransactionRecord],
    schema: &ResolvedSchema,
    policy: MissingAmountPolicy,
) -> LedgerMetrics {
    let unique_wallet_count = build_wallets(rows, schema).len();
    compute_metrics(rows, schema, unique_wallet_count, policy)
}

/// Compute ledger metrics given an already-known wallet count
///
/// # Arguments
/// * `rows` - Ledger rows
/// * `schema` - Resolved columns (only the amount column is read)
/// * `unique_wallet_count` - Size of the wallet map for this snapshot
/// * `policy` - Treatment of missing amounts
pub fn compute_metrics(
    rows: &[TransactionRecord],
    schema: &ResolvedSchema,
    unique_wallet_count: usize,
    policy: MissingAmountPolicy,
) -> LedgerMetrics {
    let unavailable = LedgerMetrics {
        transaction_count: rows.len(),
        unique_wallet_count,
        ..Default::default()
    };

    let Some(amount_col) = &schema.amount else {
        debug!("No amount column, amount statistics unavailable");
        return unavailable;
    };

    let coerced = coerce_column(rows, amount_col);

    if coerced.failures > 0 {
        warn!(
            "{} of {} '{}' values are not numeric ({:?})",
            coerced.failures,
            rows.len(),
            amount_col.name,
            policy
        );
    }

    if !coerced.has_numeric() {
        debug!("No parseable values in '{}', amount statistics unavailable", amount_col.name);
        return unavailable;
    }

    let amounts = match policy {
        MissingAmountPolicy::ZeroFill => coerced.zero_filled(),
        MissingAmountPolicy::Exclude => coerced.parsed(),
    };

    // Sequential sum keeps results bit-identical between runs
    let total: f64 = amounts.iter().sum();
    let mean = total / amounts.len() as f64;

    LedgerMetrics {
        transaction_count: rows.len(),
        total_volume: Some(total),
        average_amount: Some(mean),
        median_amount: Some(median(&amounts)),
        min_amount: amounts.iter().copied().reduce(f64::min),
        max_amount: amounts.iter().copied().reduce(f64::max),
        standard_deviation: sample_std_dev(&amounts, mean),
        unique_wallet_count,
        amounts,
    }
}

/// Median of a non-empty sequence
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let squared: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((squared / (values.len() - 1) as f64).sqrt())
}
