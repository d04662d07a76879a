//! Build per-wallet balances from an unordered stream of transfers.
//!
//! Each row moves `amount` from the sender to the recipient. Accounts are
//! created lazily the first time an address appears on either side, and the
//! whole map is rebuilt from scratch on every pass.

use crate::ledger::{coerce_numeric, ResolvedSchema, TransactionRecord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Address → account, ordered by address
pub type WalletLedger = BTreeMap<String, WalletAccount>;

/// Net flow pattern of an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletRole {
    /// Received funds but never sent any
    #[serde(rename = "Treasury/Mint")]
    TreasuryMint,

    #[serde(rename = "Net Recipient")]
    NetRecipient,

    #[serde(rename = "Net Sender")]
    NetSender,
}

impl WalletRole {
    /// Classify by exact precedence; ties resolve to `NetSender`
    pub fn classify(sent: f64, received: f64) -> Self {
        if sent == 0.0 && received > 0.0 {
            WalletRole::TreasuryMint
        } else if received > sent {
            WalletRole::NetRecipient
        } else {
            WalletRole::NetSender
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WalletRole::TreasuryMint => "Treasury/Mint",
            WalletRole::NetRecipient => "Net Recipient",
            WalletRole::NetSender => "Net Sender",
        }
    }
}

impl fmt::Display for WalletRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated flows of one address
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub sent: f64,
    pub received: f64,

    /// `received - sent`
    pub balance: f64,

    pub role: WalletRole,
}

impl WalletAccount {
    fn empty() -> Self {
        Self {
            sent: 0.0,
            received: 0.0,
            balance: 0.0,
            role: WalletRole::NetSender,
        }
    }

    fn settle(&mut self) {
        self.balance = self.received - self.sent;
        self.role = WalletRole::classify(self.sent, self.received);
    }
}

/// Build wallet accounts from ledger rows
///
/// **Public** - main entry point for balance accounting
///
/// # Arguments
/// * `rows` - Ledger rows in ledger order
/// * `schema` - Resolved columns; all three of amount/from/to are required
///
/// # Returns
/// Address → account map. Empty when the schema is incomplete.
///
/// # Algorithm
/// 1. Walk rows once, in order
/// 2. Coerce the amount (unparseable → 0)
/// 3. Credit `sent` on the sender and `received` on the recipient,
///    skipping whichever side has no address
/// 4. Settle balance and role for every account
pub fn build_wallets(rows: &[TransactionRecord], schema: &ResolvedSchema) -> WalletLedger {
    let (Some(amount_col), Some(from_col), Some(to_col)) =
        (&schema.amount, &schema.from, &schema.to)
    else {
        debug!(
            "Schema incomplete (missing {:?}), skipping wallet balances",
            schema.missing_roles()
        );
        return WalletLedger::new();
    };

    let mut wallets = WalletLedger::new();
    let mut zero_filled = 0usize;

    for row in rows {
        let amount_cell = row.cell(amount_col);
        let amount = match coerce_numeric(amount_cell) {
            Some(value) => value,
            None => {
                if !amount_cell.is_missing() {
                    zero_filled += 1;
                }
                0.0
            }
        };

        if let Some(sender) = row.cell(from_col).as_address() {
            wallets.entry(sender).or_insert_with(WalletAccount::empty).sent += amount;
        }

        if let Some(recipient) = row.cell(to_col).as_address() {
            wallets
                .entry(recipient)
                .or_insert_with(WalletAccount::empty)
                .received += amount;
        }
    }

    for account in wallets.values_mut() {
        account.settle();
    }

    if zero_filled > 0 {
        debug!(
            "{} row(s) had a non-numeric '{}' value and were counted as 0",
            zero_filled, amount_col.name
        );
    }

    debug!("Built {} wallet accounts from {} rows", wallets.len(), rows.len());

    wallets
}

/// Accounts ordered by balance, largest first (ties by address)
pub fn ranked_by_balance(wallets: &WalletLedger) -> Vec<(&str, &WalletAccount)> {
    let mut ranked: Vec<(&str, &WalletAccount)> = wallets
        .iter()
        .map(|(address, account)| (address.as_str(), account))
        .collect();

    ranked.sort_by(|a, b| b.1.balance.total_cmp(&a.1.balance).then_with(|| a.0.cmp(b.0)));
    ranked
}
