//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the ledger snapshot (URL or file)
//! 2. Resolves the schema and builds wallet balances and metrics
//! 3. Assembles the versioned report
//! 4. Writes the JSON report and prints the summary

use super::models::{AnalyzeArgs, LedgerSource};
use super::utils::load_snapshot;
use crate::aggregator::{analyze, AnalysisOptions};
use crate::fetch::validate_source_url;
use crate::format::CellDisplay;
use crate::ledger::profile_columns;
use crate::output::{generate_text_summary, render_ledger_table, write_report, LedgerReport};
use crate::utils::config::{LEDGER_HASH_CHARS, MAX_HISTOGRAM_BINS};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written/printed
///
/// # Errors
/// * Fetch or file read failures
/// * CSV parse errors
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<LedgerReport> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.source.describe());

    info!("Step 1/4: Loading ledger snapshot...");
    let snapshot = load_snapshot(&args.source)?;

    if snapshot.is_empty() {
        warn!("No transaction data found in the ledger");
    }

    info!("Step 2/4: Aggregating wallets and metrics...");
    let mut options = AnalysisOptions::new().with_missing_amounts(args.missing_amounts);
    if let Some(bins) = args.histogram_bins {
        options = options.with_histogram_bins(bins);
    }
    let analysis = analyze(&snapshot, &options);

    debug!(
        "Resolved schema complete: {}, {} wallets",
        analysis.schema.is_complete(),
        analysis.wallets.len()
    );

    let summary = args
        .print_summary
        .then(|| generate_text_summary(&analysis, args.top_wallets));

    info!("Step 3/4: Building report...");
    let report = LedgerReport::new(args.source.describe(), profile_columns(&snapshot), analysis);

    info!("Step 4/4: Writing outputs...");
    if let Some(output_path) = &args.output_json {
        write_report(&report, output_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", output_path.display());
    } else {
        info!("Skipping report file (no output path)");
    }

    if let Some(summary) = summary {
        println!("\n{}", "=".repeat(80));
        println!("LEDGER SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source: {}", report.source);
        println!("Columns: {}", snapshot.column_count());
        println!("\n{}", summary);

        if args.ledger_rows > 0 {
            let display = CellDisplay::new(args.full_hashes, LEDGER_HASH_CHARS);
            println!("\n{}", render_ledger_table(&snapshot, args.ledger_rows, display));
        }
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    match &args.source {
        LedgerSource::Url(url) => validate_source_url(url)?,
        LedgerSource::File(path) => {
            if !path.exists() {
                anyhow::bail!("Ledger file not found: {}", path.display());
            }
        }
    }

    if let Some(bins) = args.histogram_bins {
        if bins == 0 {
            anyhow::bail!("bins must be greater than 0");
        }
        if bins > MAX_HISTOGRAM_BINS {
            anyhow::bail!("bins is too large (max {})", MAX_HISTOGRAM_BINS);
        }
    }

    if args.top_wallets == 0 {
        anyhow::bail!("top_wallets must be greater than 0");
    }

    if args.top_wallets > 1000 {
        anyhow::bail!("top_wallets is too large (max 1000)");
    }

    if args.output_json.is_none() && !args.print_summary {
        anyhow::bail!("Nothing to do: pass an output path or --summary");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn ledger_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_args_valid_url() {
        let args = AnalyzeArgs {
            source: LedgerSource::Url("https://example.com/pub?output=csv".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_invalid_url_scheme() {
        let args = AnalyzeArgs {
            source: LedgerSource::Url("ftp://example.com/ledger.csv".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_file() {
        let args = AnalyzeArgs {
            source: LedgerSource::File(PathBuf::from("/definitely/not/here.csv")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_bins() {
        let args = AnalyzeArgs {
            source: LedgerSource::Url("https://example.com/ledger.csv".to_string()),
            histogram_bins: Some(0),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bins_upper_bound() {
        let at_limit = AnalyzeArgs {
            source: LedgerSource::Url("https://example.com/ledger.csv".to_string()),
            histogram_bins: Some(MAX_HISTOGRAM_BINS),
            ..Default::default()
        };
        assert!(validate_args(&at_limit).is_ok());

        let huge = AnalyzeArgs {
            histogram_bins: Some(usize::MAX),
            ..at_limit
        };
        assert!(validate_args(&huge).is_err());
    }

    #[test]
    fn test_validate_args_top_wallets_bounds() {
        let zero = AnalyzeArgs {
            source: LedgerSource::Url("https://example.com/ledger.csv".to_string()),
            top_wallets: 0,
            ..Default::default()
        };
        assert!(validate_args(&zero).is_err());

        let huge = AnalyzeArgs {
            top_wallets: 2000,
            ..zero
        };
        assert!(validate_args(&huge).is_err());
    }

    #[test]
    fn test_validate_args_nothing_to_do() {
        let args = AnalyzeArgs {
            source: LedgerSource::Url("https://example.com/ledger.csv".to_string()),
            output_json: None,
            print_summary: false,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_analyze_from_file() {
        let ledger = ledger_file("From,To,Amount\nA,B,100\nB,A,40\n");
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("report.json");

        let args = AnalyzeArgs {
            source: LedgerSource::File(ledger.path().to_path_buf()),
            output_json: Some(output.clone()),
            ..Default::default()
        };

        let report = execute_analyze(args).unwrap();

        assert!(output.exists());
        assert_eq!(report.metrics.transaction_count, 2);
        assert_eq!(report.metrics.total_volume, Some(140.0));
        assert_eq!(report.schema.amount.as_deref(), Some("Amount"));
        assert_eq!(report.wallets.len(), 2);
    }
}
