//! Numeric coercion of heterogeneous ledger cells.
//!
//! Coercion is total: a cell either yields a finite number or is missing.
//! Callers decide whether missing means zero or "excluded".

use super::schema::ColumnRef;
use super::snapshot::{CellValue, TransactionRecord};
use log::debug;

/// Read a cell as a finite number
pub fn coerce_numeric(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Missing => None,
        CellValue::Number(n) => Some(*n).filter(|v| v.is_finite()),
        CellValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite()),
    }
}

/// One column coerced to numbers, in row order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoercedColumn {
    pub values: Vec<Option<f64>>,

    /// Non-blank cells that failed to parse
    pub failures: usize,
}

impl CoercedColumn {
    pub fn parsed_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn has_numeric(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }

    /// Every row, with missing amounts as zero
    pub fn zero_filled(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(0.0)).collect()
    }

    /// Only the rows that parsed
    pub fn parsed(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }
}

/// Coerce one column across all rows
pub fn coerce_column(rows: &[TransactionRecord], column: &ColumnRef) -> CoercedColumn {
    let mut failures = 0;
    let values = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let cell = row.cell(column);
            let value = coerce_numeric(cell);
            if value.is_none() && !cell.is_missing() {
                failures += 1;
                debug!(
                    "Row {}: '{}' value {:?} is not numeric, treating as missing",
                    row_index, column.name, cell
                );
            }
            value
        })
        .collect();

    CoercedColumn { values, failures }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric_values() {
        assert_eq!(coerce_numeric(&CellValue::from("100")), Some(100.0));
        assert_eq!(coerce_numeric(&CellValue::from(" 2.5 ")), Some(2.5));
        assert_eq!(coerce_numeric(&CellValue::from("-40")), Some(-40.0));
        assert_eq!(coerce_numeric(&CellValue::Number(7.0)), Some(7.0));
    }

    #[test]
    fn test_coerce_numeric_failures() {
        assert_eq!(coerce_numeric(&CellValue::from("N/A")), None);
        assert_eq!(coerce_numeric(&CellValue::from("1,000")), None);
        assert_eq!(coerce_numeric(&CellValue::from("inf")), None);
        assert_eq!(coerce_numeric(&CellValue::Number(f64::NAN)), None);
        assert_eq!(coerce_numeric(&CellValue::Missing), None);
    }

    #[test]
    fn test_coerce_column_counts_failures() {
        let rows = vec![
            TransactionRecord::new(vec![CellValue::from("10")]),
            TransactionRecord::new(vec![CellValue::from("N/A")]),
            TransactionRecord::new(vec![CellValue::Missing]),
        ];
        let column = ColumnRef { index: 0, name: "amount".to_string() };

        let coerced = coerce_column(&rows, &column);

        assert_eq!(coerced.values, vec![Some(10.0), None, None]);
        assert_eq!(coerced.failures, 1);
        assert_eq!(coerced.parsed_count(), 1);
        assert_eq!(coerced.zero_filled(), vec![10.0, 0.0, 0.0]);
        assert_eq!(coerced.parsed(), vec![10.0]);
    }
}
