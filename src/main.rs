//! Ledger Lens CLI
//!
//! Loads a published transaction ledger, derives per-wallet balances and
//! roles, and reports summary metrics as JSON and terminal text.

use anyhow::Result;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use ledger_lens::aggregator::MissingAmountPolicy;
use ledger_lens::commands::{
    display_version, execute_analyze, execute_watch, inspect_source, validate_args,
    validate_report_file, validate_watch_args, AnalyzeArgs, LedgerSource, WatchArgs,
};

/// Ledger Lens - wallet balances and metrics for published ledgers
#[derive(Parser, Debug)]
#[command(name = "ledger-lens")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Ledger location shared by analyze and inspect
#[derive(Args, Debug)]
struct SourceOpts {
    /// Published CSV URL
    #[arg(short, long, env = "LEDGER_CSV_URL")]
    url: Option<String>,

    /// Local CSV file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

/// Build the ledger source for `subcommand`
///
/// **Private** - an explicit `--file` wins over a URL taken from
/// `LEDGER_CSV_URL`; an explicit `--url` together with `--file` is an error.
fn resolve_source(
    source: SourceOpts,
    matches: &ArgMatches,
    subcommand: &str,
) -> Result<LedgerSource> {
    let url_from_env = matches
        .subcommand_matches(subcommand)
        .and_then(|sub| sub.value_source("url"))
        == Some(ValueSource::EnvVariable);

    let url = if url_from_env && source.file.is_some() {
        None
    } else {
        source.url
    };

    LedgerSource::from_options(url, source.file)
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a ledger snapshot
    Analyze {
        #[command(flatten)]
        source: SourceOpts,

        /// Output path for the JSON report (omit to only print the summary)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Leave missing amounts out of metrics instead of counting them as 0
        #[arg(long)]
        exclude_missing: bool,

        /// Number of histogram bins (default: max(5, n/2))
        #[arg(long)]
        bins: Option<usize>,

        /// Number of wallets shown in the summary
        #[arg(long, default_value = "10")]
        top_wallets: usize,

        /// Number of ledger rows shown in the summary
        #[arg(long, default_value = "0")]
        ledger_rows: usize,

        /// Show hashes and addresses unabbreviated
        #[arg(long)]
        full_hashes: bool,
    },

    /// Periodically refresh a published ledger and print its summary
    Watch {
        /// Published CSV URL
        #[arg(short, long, env = "LEDGER_CSV_URL")]
        url: String,

        /// Seconds between refresh cycles
        #[arg(long, default_value = "60")]
        interval: u64,

        /// Seconds a fetched snapshot stays fresh
        #[arg(long, default_value = "60")]
        ttl: u64,

        /// Stop after N cycles
        #[arg(long)]
        iterations: Option<usize>,

        /// Number of wallets shown per cycle
        #[arg(long, default_value = "10")]
        top_wallets: usize,

        /// Leave missing amounts out of metrics instead of counting them as 0
        #[arg(long)]
        exclude_missing: bool,
    },

    /// Show the column profile and resolved schema of a ledger
    Inspect {
        #[command(flatten)]
        source: SourceOpts,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn missing_amount_policy(exclude_missing: bool) -> MissingAmountPolicy {
    if exclude_missing {
        MissingAmountPolicy::Exclude
    } else {
        MissingAmountPolicy::ZeroFill
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments; the raw matches tell where each value came from
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            source,
            output,
            summary,
            exclude_missing,
            bins,
            top_wallets,
            ledger_rows,
            full_hashes,
        } => {
            let args = AnalyzeArgs {
                source: resolve_source(source, &matches, "analyze")?,
                output_json: output,
                print_summary: summary,
                missing_amounts: missing_amount_policy(exclude_missing),
                histogram_bins: bins,
                top_wallets,
                ledger_rows,
                full_hashes,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Watch {
            url,
            interval,
            ttl,
            iterations,
            top_wallets,
            exclude_missing,
        } => {
            let args = WatchArgs {
                source_url: url,
                interval: Duration::from_secs(interval),
                ttl: Duration::from_secs(ttl),
                iterations,
                top_wallets,
                missing_amounts: missing_amount_policy(exclude_missing),
            };

            validate_watch_args(&args)?;

            execute_watch(args)?;
        }

        Commands::Inspect { source } => {
            let source = resolve_source(source, &matches, "inspect")?;
            inspect_source(&source)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
