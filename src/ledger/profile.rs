//! Per-column profile of a snapshot (type, non-null count, sample).

use super::coerce::coerce_numeric;
use super::snapshot::LedgerSnapshot;
use crate::utils::config::SAMPLE_MAX_CHARS;
use serde::{Deserialize, Serialize};

/// Inferred content kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Number,
    Text,
    Empty,
}

/// Summary of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub non_null: usize,
    pub sample: String,
}

/// Profile every column in snapshot order
pub fn profile_columns(snapshot: &LedgerSnapshot) -> Vec<ColumnProfile> {
    snapshot
        .columns
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let cells = snapshot.rows.iter().map(|row| row.get(index));

            let mut non_null = 0;
            let mut all_numeric = true;
            for cell in cells {
                if cell.is_missing() {
                    continue;
                }
                non_null += 1;
                if coerce_numeric(cell).is_none() {
                    all_numeric = false;
                }
            }

            let kind = match (non_null, all_numeric) {
                (0, _) => ColumnKind::Empty,
                (_, true) => ColumnKind::Number,
                (_, false) => ColumnKind::Text,
            };

            let sample = snapshot
                .rows
                .first()
                .and_then(|row| row.get(index).as_text())
                .map(|text| truncate_sample(&text))
                .unwrap_or_default();

            ColumnProfile {
                name: name.clone(),
                kind,
                non_null,
                sample,
            }
        })
        .collect()
}

fn truncate_sample(text: &str) -> String {
    if text.chars().count() > SAMPLE_MAX_CHARS {
        let head: String = text.chars().take(SAMPLE_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
