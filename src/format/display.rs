//! Compact human-readable rendering of amounts, addresses and hashes.
//!
//! All functions are total: any input yields a displayable string.

use crate::ledger::CellValue;
use crate::utils::config::ABBREVIATED_COLUMN_KEYWORDS;

/// Placeholder for cells with nothing to show
pub const EMPTY_CELL: &str = "—";

/// Format an amount compactly: `1.50K`, `2.50M`, `999.50`
///
/// Zero, NaN and infinities render as `"0"`.
pub fn format_magnitude(n: f64) -> String {
    if n == 0.0 || !n.is_finite() {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        group_thousands(n)
    }
}

/// Two-decimal number with comma-grouped integer digits: `1,234,567.89`
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" would read oddly once rounded away
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Abbreviate an address to `front...back` when it is longer than both parts
pub fn format_address(addr: &str, front_chars: usize, back_chars: usize) -> String {
    let char_count = addr.chars().count();
    if char_count <= front_chars + back_chars {
        return addr.to_string();
    }

    let front: String = addr.chars().take(front_chars).collect();
    let back: String = addr.chars().skip(char_count - back_chars).collect();
    format!("{}...{}", front, back)
}

/// Render a hash-like ledger cell, keeping `length` chars on each side
///
/// Missing and numeric cells have no hash to show and render as `—`.
pub fn format_hash(cell: &CellValue, length: usize) -> String {
    match cell {
        CellValue::Text(text) => format_address(text, length, length),
        CellValue::Missing | CellValue::Number(_) => EMPTY_CELL.to_string(),
    }
}

/// Columns whose values are abbreviated in the ledger table
pub fn is_abbreviated_column(name: &str) -> bool {
    let lowered = name.to_lowercase();
    ABBREVIATED_COLUMN_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Switch between abbreviated and full ledger cells
#[derive(Debug, Clone, Copy)]
pub struct CellDisplay {
    pub full_hashes: bool,
    pub hash_chars: usize,
}

impl CellDisplay {
    pub fn new(full_hashes: bool, hash_chars: usize) -> Self {
        Self {
            full_hashes,
            hash_chars,
        }
    }

    pub fn format(&self, column: &str, cell: &CellValue) -> String {
        if !self.full_hashes && is_abbreviated_column(column) {
            if let CellValue::Text(_) = cell {
                return format_hash(cell, self.hash_chars);
            }
        }
        cell.as_text().unwrap_or_else(|| EMPTY_CELL.to_string())
    }
}
