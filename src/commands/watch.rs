//! Watch command: periodic refresh of a published ledger.
//!
//! Each cycle asks the snapshot cache for the ledger (refetching once the TTL
//! has passed), runs a full aggregation pass, and prints the summary. A failed
//! fetch is reported and the cycle is skipped; the engine never sees it.

use super::models::WatchArgs;
use crate::aggregator::{analyze, AnalysisOptions};
use crate::fetch::{validate_source_url, LedgerClient, SnapshotCache};
use crate::output::generate_text_summary;
use anyhow::{Context, Result};
use chrono::Local;
use log::{error, info};
use std::time::{Duration, Instant};

/// Execute the watch command
///
/// **Public** - main entry point called from main.rs
pub fn execute_watch(args: WatchArgs) -> Result<()> {
    let client = LedgerClient::new(&args.source_url).context("Failed to create ledger client")?;
    let mut cache = SnapshotCache::new(args.ttl);
    let options = AnalysisOptions::new().with_missing_amounts(args.missing_amounts);

    info!(
        "Watching {} every {}s (cache TTL {}s)",
        client.source_url(),
        args.interval.as_secs(),
        cache.ttl().as_secs()
    );

    let mut cycle = 0usize;
    loop {
        cycle += 1;

        match cache.get_or_fetch(Instant::now(), || client.fetch_snapshot()) {
            Ok(snapshot) => {
                let analysis = analyze(snapshot, &options);
                println!("\n{}", "=".repeat(80));
                println!(
                    "✅ Connected to ledger • {} transactions loaded • {}",
                    snapshot.row_count(),
                    Local::now().format("%H:%M:%S")
                );
                println!("{}", "=".repeat(80));
                println!("{}", generate_text_summary(&analysis, args.top_wallets));
            }
            Err(e) => {
                error!("Ledger refresh failed: {}", e);
                eprintln!("❌ Failed to load data: {}", e);
            }
        }

        if args.iterations.is_some_and(|limit| cycle >= limit) {
            info!("Stopping after {} refresh cycle(s)", cycle);
            break;
        }

        std::thread::sleep(args.interval);
    }

    Ok(())
}

/// Validate watch arguments
pub fn validate_watch_args(args: &WatchArgs) -> Result<()> {
    validate_source_url(&args.source_url)?;

    if args.interval == Duration::ZERO {
        anyhow::bail!("interval must be greater than 0 seconds");
    }

    if args.iterations == Some(0) {
        anyhow::bail!("iterations must be greater than 0");
    }

    if args.top_wallets == 0 {
        anyhow::bail!("top_wallets must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> WatchArgs {
        WatchArgs {
            source_url: "https://example.com/pub?output=csv".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_watch_args_valid() {
        assert!(validate_watch_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_watch_args_empty_url() {
        let args = WatchArgs {
            source_url: String::new(),
            ..valid_args()
        };
        assert!(validate_watch_args(&args).is_err());
    }

    #[test]
    fn test_validate_watch_args_zero_interval() {
        let args = WatchArgs {
            interval: Duration::ZERO,
            ..valid_args()
        };
        assert!(validate_watch_args(&args).is_err());
    }

    #[test]
    fn test_validate_watch_args_zero_iterations() {
        let args = WatchArgs {
            iterations: Some(0),
            ..valid_args()
        };
        assert!(validate_watch_args(&args).is_err());
    }
}
