use super::models::LedgerSource;
use crate::fetch::LedgerClient;
use crate::ledger::{profile_columns, resolve_schema, LedgerSnapshot};
use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Load a snapshot from a URL or a local CSV file
pub fn load_snapshot(source: &LedgerSource) -> Result<LedgerSnapshot> {
    match source {
        LedgerSource::Url(url) => {
            let client = LedgerClient::new(url).context("Failed to create ledger client")?;
            client
                .fetch_snapshot()
                .with_context(|| format!("Failed to fetch ledger from {}", url))
        }
        LedgerSource::File(path) => LedgerSnapshot::from_path(path)
            .with_context(|| format!("Failed to read ledger file {}", path.display())),
    }
}

/// Print the column profile and resolved schema of a ledger
pub fn inspect_source(source: &LedgerSource) -> Result<()> {
    let snapshot = load_snapshot(source)?;
    let profile = profile_columns(&snapshot);
    let schema = resolve_schema(&snapshot.columns);

    println!("Ledger: {}", source.describe());
    println!("Rows: {}  Columns: {}", snapshot.row_count(), snapshot.column_count());
    println!();
    println!("  {:<24} {:<8} {:>8}  Sample", "Column", "Type", "Non-Null");
    for column in &profile {
        println!(
            "  {:<24} {:<8} {:>8}  {}",
            column.name,
            format!("{:?}", column.kind).to_lowercase(),
            column.non_null,
            column.sample
        );
    }

    println!();
    println!("Resolved schema:");
    let show = |name: Option<&String>| name.cloned().unwrap_or_else(|| "(not found)".to_string());
    println!("  amount: {}", show(schema.amount.as_ref().map(|c| &c.name)));
    println!("  from:   {}", show(schema.from.as_ref().map(|c| &c.name)));
    println!("  to:     {}", show(schema.to.as_ref().map(|c| &c.name)));

    if !schema.is_complete() {
        println!();
        println!(
            "Wallet balances need amount, from and to columns; missing: {}",
            schema.missing_roles().join(", ")
        );
    }

    Ok(())
}

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != REPORT_SCHEMA_VERSION {
        println!(
            "⚠ Report schema v{} differs from current v{}",
            report.version, REPORT_SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Generated: {}", report.generated_at);
    println!("  Transactions: {}", report.metrics.transaction_count);
    println!("  Wallets: {}", report.wallets.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Ledger Lens v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Wallet balances, roles and summary metrics for published transaction ledgers.");
}
