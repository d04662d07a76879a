//! Ledger snapshot model and CSV loader.
//!
//! A snapshot is one immutable fetch of the transaction table. Cells are kept
//! untyped until the aggregation pass decides how to read them.

use super::schema::ColumnRef;
use crate::utils::config::ABSENT_MARKERS;
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

static MISSING_CELL: CellValue = CellValue::Missing;

/// One raw ledger cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Build a cell from raw CSV text. Blank text is `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Stringified raw value, `None` for a missing cell
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Number(n) => Some(n.to_string()),
        }
    }

    /// Read the cell as a wallet address.
    ///
    /// Blank cells, NaN and the literal absent markers (`nan`, `none`, `null`)
    /// are not addresses.
    pub fn as_address(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            CellValue::Number(n) if n.is_nan() => None,
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || is_absent_marker(trimmed) {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(raw: &str) -> Self {
        CellValue::from_raw(raw)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

fn is_absent_marker(text: &str) -> bool {
    ABSENT_MARKERS
        .iter()
        .any(|marker| text.eq_ignore_ascii_case(marker))
}

/// One ledger row, cells aligned with the snapshot's columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionRecord {
    cells: Vec<CellValue>,
}

impl TransactionRecord {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Cell at a column position. Short rows read as `Missing`.
    pub fn get(&self, index: usize) -> &CellValue {
        self.cells.get(index).unwrap_or(&MISSING_CELL)
    }

    pub fn cell(&self, column: &ColumnRef) -> &CellValue {
        self.get(column.index)
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

/// An immutable ledger snapshot: ordered column names plus ordered rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LedgerSnapshot {
    pub columns: Vec<String>,
    pub rows: Vec<TransactionRecord>,
}

impl LedgerSnapshot {
    /// Create a snapshot, trimming surrounding whitespace from column names
    pub fn new(columns: Vec<String>, rows: Vec<TransactionRecord>) -> Self {
        let columns = columns.into_iter().map(|c| c.trim().to_string()).collect();
        Self { columns, rows }
    }

    /// Convenience constructor for in-memory ledgers
    pub fn from_cells(columns: &[&str], rows: Vec<Vec<CellValue>>) -> Self {
        Self::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.into_iter().map(TransactionRecord::new).collect(),
        )
    }

    /// Parse CSV with a header row from any reader
    ///
    /// # Errors
    /// * `ParseError::EmptyInput` - no header row
    /// * `ParseError::Csv` - malformed CSV
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(TransactionRecord::new(
                record.iter().map(CellValue::from_raw).collect(),
            ));
        }

        debug!("Loaded ledger: {} columns, {} rows", headers.len(), rows.len());

        Ok(Self::new(
            headers.iter().map(str::to_string).collect(),
            rows,
        ))
    }

    pub fn from_csv_str(csv_text: &str) -> Result<Self, ParseError> {
        Self::from_reader(csv_text.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!("Reading ledger from: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_trims_headers_and_cells() {
        let snapshot =
            LedgerSnapshot::from_csv_str(" From , To ,Amount\n A , B ,100\nB,A,\n").unwrap();

        assert_eq!(snapshot.columns, vec!["From", "To", "Amount"]);
        assert_eq!(snapshot.row_count(), 2);
        assert_eq!(snapshot.rows[0].get(0), &CellValue::Text("A".to_string()));
        assert_eq!(snapshot.rows[1].get(2), &CellValue::Missing);
    }

    #[test]
    fn test_short_rows_read_as_missing() {
        let snapshot = LedgerSnapshot::from_csv_str("a,b,c\n1\n").unwrap();
        assert_eq!(snapshot.rows[0].get(0), &CellValue::Text("1".to_string()));
        assert!(snapshot.rows[0].get(2).is_missing());
        assert!(snapshot.rows[0].get(99).is_missing());
    }

    #[test]
    fn test_empty_input_is_error() {
        let result = LedgerSnapshot::from_csv_str("");
        assert!(matches!(result, Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_header_only_is_empty_snapshot() {
        let snapshot = LedgerSnapshot::from_csv_str("from,to,amount\n").unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.column_count(), 3);
    }

    #[test]
    fn test_as_address_rejects_absent_markers() {
        assert_eq!(CellValue::from("NaN").as_address(), None);
        assert_eq!(CellValue::from("null").as_address(), None);
        assert_eq!(CellValue::from("None").as_address(), None);
        assert_eq!(CellValue::from("   ").as_address(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_address(), None);
        assert_eq!(CellValue::from("0xabc").as_address(), Some("0xabc".to_string()));
        assert_eq!(CellValue::Number(42.0).as_address(), Some("42".to_string()));
    }
}
