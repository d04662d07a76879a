//! Terminal text summary of a ledger analysis.

use crate::aggregator::{ranked_by_balance, LedgerAnalysis, WalletRole};
use crate::format::{format_address, format_magnitude, group_thousands, CellDisplay};
use crate::ledger::LedgerSnapshot;
use crate::utils::config::{ADDRESS_BACK_CHARS, ADDRESS_FRONT_CHARS};

const RESET: &str = "\x1b[0m";
const HISTOGRAM_BAR_WIDTH: usize = 40;

fn role_ansi_color(role: WalletRole) -> &'static str {
    match role {
        WalletRole::TreasuryMint => "\x1b[36m",
        WalletRole::NetRecipient => "\x1b[32m",
        WalletRole::NetSender => "\x1b[33m",
    }
}

fn show(value: Option<f64>) -> String {
    value.map(group_thousands).unwrap_or_else(|| "n/a".to_string())
}

/// Create a text summary: overview, statistics, wallet table, histogram
pub fn generate_text_summary(analysis: &LedgerAnalysis, top_wallets: usize) -> String {
    let metrics = &analysis.metrics;
    let mut lines = Vec::new();

    lines.push("  📊 OVERVIEW".to_string());
    lines.push(format!("  Transactions:   {}", metrics.transaction_count));
    lines.push(format!("  Unique Wallets: {}", metrics.unique_wallet_count));

    if metrics.has_amounts() {
        let compact = |value: Option<f64>| value.map(format_magnitude).unwrap_or_default();
        lines.push(format!("  Total Volume:   {}", compact(metrics.total_volume)));
        lines.push(format!("  Avg Transaction: {}", compact(metrics.average_amount)));
        lines.push(format!("  Largest Tx:     {}", compact(metrics.max_amount)));

        lines.push(String::new());
        lines.push("  📈 SUMMARY STATISTICS".to_string());
        lines.push(format!(
            "  Total:   {:>16}   Minimum: {:>16}",
            show(metrics.total_volume),
            show(metrics.min_amount)
        ));
        lines.push(format!(
            "  Average: {:>16}   Maximum: {:>16}",
            show(metrics.average_amount),
            show(metrics.max_amount)
        ));
        lines.push(format!(
            "  Median:  {:>16}   Std Dev: {:>16}",
            show(metrics.median_amount),
            show(metrics.standard_deviation)
        ));
    } else {
        lines.push("  Amount statistics unavailable (no numeric amount column)".to_string());
    }

    lines.push(String::new());
    if analysis.wallets.is_empty() {
        let missing = analysis.schema.missing_roles();
        if missing.is_empty() {
            lines.push("  👛 No wallet activity in this ledger".to_string());
        } else {
            lines.push(format!(
                "  👛 Wallet balances skipped (no {} column)",
                missing.join("/")
            ));
        }
    } else {
        lines.extend(render_wallet_table(analysis, top_wallets));
    }

    if let Some(distribution) = &analysis.distribution {
        lines.push(String::new());
        lines.push("  📊 VALUE DISTRIBUTION".to_string());

        let peak = distribution
            .histogram
            .iter()
            .map(|bin| bin.count)
            .max()
            .unwrap_or(0)
            .max(1);

        for bin in &distribution.histogram {
            let bar = "█".repeat(bin.count * HISTOGRAM_BAR_WIDTH / peak);
            lines.push(format!(
                "  {:>10} – {:<10} {:<width$} {}",
                format_magnitude(bin.lower),
                format_magnitude(bin.upper),
                bar,
                bin.count,
                width = HISTOGRAM_BAR_WIDTH
            ));
        }
    }

    lines.join("\n")
}

fn render_wallet_table(analysis: &LedgerAnalysis, top_wallets: usize) -> Vec<String> {
    let ranked = ranked_by_balance(&analysis.wallets);
    let mut lines = Vec::new();

    lines.push("  👛 WALLET BALANCES".to_string());
    lines.push("  ┏━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:<15} ┃ {:^12} ┃ {:^12} ┃ {:^12} ┃ {:^14} ┃",
        "Address", "SENT", "RECEIVED", "BALANCE", "ROLE"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━━━┫".to_string());

    for (address, account) in ranked.iter().take(top_wallets) {
        let color = role_ansi_color(account.role);
        lines.push(format!(
            "  ┃ {:<15} ┃ {:>12} ┃ {:>12} ┃ {:>12} ┃ {}{:<14}{} ┃",
            format_address(address, ADDRESS_FRONT_CHARS, ADDRESS_BACK_CHARS),
            format_magnitude(account.sent),
            format_magnitude(account.received),
            format_magnitude(account.balance),
            color,
            account.role.label(),
            RESET
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━┛".to_string());

    if ranked.len() > top_wallets {
        lines.push(format!(
            "   (Showing top {} of {} wallets)",
            top_wallets,
            ranked.len()
        ));
    }

    lines
}

/// Render the first `max_rows` ledger rows as an aligned table
///
/// Hash, sender and recipient columns are abbreviated unless
/// `display.full_hashes` is set.
pub fn render_ledger_table(snapshot: &LedgerSnapshot, max_rows: usize, display: CellDisplay) -> String {
    let rows: Vec<Vec<String>> = snapshot
        .rows
        .iter()
        .take(max_rows)
        .map(|row| {
            snapshot
                .columns
                .iter()
                .enumerate()
                .map(|(index, column)| display.format(column, row.get(index)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = snapshot
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .map(|cells| cells[index].chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("  {}", padded.join("  ").trim_end())
    };

    let mut lines = vec!["  📋 TRANSACTION LEDGER".to_string()];
    lines.push(format_line(&snapshot.columns));
    lines.extend(rows.iter().map(|cells| format_line(cells)));

    if snapshot.row_count() > max_rows {
        lines.push(format!(
            "   (Showing first {} of {} transactions)",
            max_rows,
            snapshot.row_count()
        ));
    }

    lines.join("\n")
}
