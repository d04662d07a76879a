//! Output JSON schema definitions for ledger reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{Distribution, LedgerAnalysis, LedgerMetrics, WalletLedger};
use crate::ledger::{ColumnProfile, ResolvedSchema};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the snapshot came from (URL or file path)
    pub source: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Per-column profile of the snapshot
    pub columns: Vec<ColumnProfile>,

    /// Resolved amount/from/to column names
    pub schema: SchemaSummary,

    pub metrics: LedgerMetrics,

    /// Address → account
    pub wallets: WalletLedger,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distribution: Option<Distribution>,
}

/// Column names chosen for each role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSummary {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl From<&ResolvedSchema> for SchemaSummary {
    fn from(schema: &ResolvedSchema) -> Self {
        Self {
            amount: schema.amount.as_ref().map(|c| c.name.clone()),
            from: schema.from.as_ref().map(|c| c.name.clone()),
            to: schema.to.as_ref().map(|c| c.name.clone()),
        }
    }
}

impl LedgerReport {
    /// Assemble a report from one analysis pass
    pub fn new(
        source: impl Into<String>,
        columns: Vec<ColumnProfile>,
        analysis: LedgerAnalysis,
    ) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            columns,
            schema: SchemaSummary::from(&analysis.schema),
            metrics: analysis.metrics,
            wallets: analysis.wallets,
            distribution: analysis.distribution,
        }
    }
}
