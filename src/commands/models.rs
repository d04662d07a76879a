use crate::aggregator::MissingAmountPolicy;
use crate::utils::config::DEFAULT_CACHE_TTL;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Where a ledger snapshot is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerSource {
    Url(String),
    File(PathBuf),
}

impl LedgerSource {
    /// Exactly one of `url` / `file` must be given
    pub fn from_options(url: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (url, file) {
            (Some(url), None) => Ok(LedgerSource::Url(url)),
            (None, Some(file)) => Ok(LedgerSource::File(file)),
            (Some(_), Some(_)) => anyhow::bail!("Use either --url or --file, not both"),
            (None, None) => anyhow::bail!("A ledger source is required (--url or --file)"),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            LedgerSource::Url(url) => url.clone(),
            LedgerSource::File(path) => path.display().to_string(),
        }
    }
}

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub source: LedgerSource,

    /// Output path for the JSON report (None = no file)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    pub missing_amounts: MissingAmountPolicy,

    /// Histogram bin override
    pub histogram_bins: Option<usize>,

    /// Wallet rows shown in the summary
    pub top_wallets: usize,

    /// Ledger rows shown in the summary (0 = none)
    pub ledger_rows: usize,

    /// Show hashes and addresses in full in the ledger table
    pub full_hashes: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            source: LedgerSource::File(PathBuf::from("ledger.csv")),
            output_json: Some(PathBuf::from("artifacts/report.json")),
            print_summary: false,
            missing_amounts: MissingAmountPolicy::ZeroFill,
            histogram_bins: None,
            top_wallets: 10,
            ledger_rows: 0,
            full_hashes: false,
        }
    }
}

/// Arguments for the watch command
#[derive(Debug, Clone)]
pub struct WatchArgs {
    pub source_url: String,

    /// Pause between refresh cycles
    pub interval: Duration,

    /// Freshness window of the snapshot cache
    pub ttl: Duration,

    /// Stop after this many cycles (None = run until interrupted)
    pub iterations: Option<usize>,

    pub top_wallets: usize,
    pub missing_amounts: MissingAmountPolicy,
}

impl Default for WatchArgs {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            interval: DEFAULT_CACHE_TTL,
            ttl: DEFAULT_CACHE_TTL,
            iterations: None,
            top_wallets: 10,
            missing_amounts: MissingAmountPolicy::ZeroFill,
        }
    }
}
