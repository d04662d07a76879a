//! Column discovery for loosely-labelled ledger sheets.
//!
//! Published ledgers name their columns freely ("Amount (CC)", "From Wallet",
//! "to_address", ...). We locate the amount, sender and recipient columns by
//! case-insensitive substring match, first match wins.

use crate::utils::config::{AMOUNT_KEYWORDS, RECIPIENT_KEYWORD, SENDER_KEYWORD};
use log::debug;
use serde::{Deserialize, Serialize};

/// A resolved column: its position in the snapshot and its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub index: usize,
    pub name: String,
}

/// Which columns carry amount, sender and recipient (if any)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSchema {
    pub amount: Option<ColumnRef>,
    pub from: Option<ColumnRef>,
    pub to: Option<ColumnRef>,
}

impl ResolvedSchema {
    /// True when amount, sender and recipient are all resolved
    pub fn is_complete(&self) -> bool {
        self.amount.is_some() && self.from.is_some() && self.to.is_some()
    }

    /// Names of the roles that could not be resolved
    pub fn missing_roles(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.from.is_none() {
            missing.push("from");
        }
        if self.to.is_none() {
            missing.push("to");
        }
        missing
    }
}

/// Resolve the amount/from/to columns from ordered column names
///
/// **Public** - main entry point for schema discovery
///
/// # Algorithm
/// 1. Amount: first column containing "amount", else "value", else "total"
/// 2. Sender: first column containing "from"
/// 3. Recipient: first column containing "to", skipping the sender column
pub fn resolve_schema<S: AsRef<str>>(columns: &[S]) -> ResolvedSchema {
    let lowered: Vec<String> = columns
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();

    let amount = AMOUNT_KEYWORDS
        .iter()
        .find_map(|keyword| find_column(&lowered, keyword, None));
    let from = find_column(&lowered, SENDER_KEYWORD, None);
    let to = find_column(&lowered, RECIPIENT_KEYWORD, from);

    let column_ref = |index: usize| ColumnRef {
        index,
        name: columns[index].as_ref().to_string(),
    };

    let schema = ResolvedSchema {
        amount: amount.map(column_ref),
        from: from.map(column_ref),
        to: to.map(column_ref),
    };

    debug!(
        "Resolved schema: amount={:?} from={:?} to={:?}",
        schema.amount.as_ref().map(|c| &c.name),
        schema.from.as_ref().map(|c| &c.name),
        schema.to.as_ref().map(|c| &c.name)
    );

    schema
}

fn find_column(lowered: &[String], keyword: &str, skip: Option<usize>) -> Option<usize> {
    lowered
        .iter()
        .enumerate()
        .find(|(index, name)| Some(*index) != skip && name.contains(keyword))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_basic_columns() {
        let schema = resolve_schema(&["Hash", "From", "To", "Amount"]);

        assert_eq!(schema.amount.unwrap().name, "Amount");
        assert_eq!(schema.from.unwrap().index, 1);
        assert_eq!(schema.to.unwrap().index, 2);
    }

    #[test]
    fn test_amount_tier_priority() {
        // "amount" wins even though "total" and "value" come first
        let schema = resolve_schema(&["total", "value", "Amount (CC)"]);
        assert_eq!(schema.amount.unwrap().name, "Amount (CC)");

        let schema = resolve_schema(&["Grand Total", "Value"]);
        assert_eq!(schema.amount.unwrap().name, "Value");
    }

    #[test]
    fn test_from_is_checked_before_to() {
        let schema = resolve_schema(&["from_to", "to_wallet", "amount"]);
        assert_eq!(schema.from.as_ref().unwrap().name, "from_to");
        assert_eq!(schema.to.as_ref().unwrap().name, "to_wallet");
    }

    #[test]
    fn test_missing_columns_are_absent() {
        let schema = resolve_schema(&["id", "note"]);
        assert!(!schema.is_complete());
        assert_eq!(schema.missing_roles(), vec!["amount", "from", "to"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let columns = vec!["Sender From".to_string(), "Receiver To".to_string(), "Value".to_string()];
        assert_eq!(resolve_schema(&columns), resolve_schema(&columns));
    }
}
