//! Extracted transaction records.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::date::DateText;

/// Statement shape: running balance with separate withdrawal/deposit columns
/// vs a flat signed amount per transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    BankAccount,
    CreditCard,
}

/// One transaction, built incrementally from its opening row and any
/// absorbed continuation rows, immutable once emitted.
///
/// Field presence follows the statement shape: bank accounts populate
/// withdrawal/deposit/balance, credit cards the single amount. `None` means
/// the statement has no such column; [`Amount::Unparsed`] means the column
/// exists but the cell did not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateText>,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Withdrawal", skip_serializing_if = "Option::is_none")]
    pub withdrawal: Option<Amount>,
    #[serde(rename = "Deposit", skip_serializing_if = "Option::is_none")]
    pub deposit: Option<Amount>,
    #[serde(rename = "Balance", skip_serializing_if = "Option::is_none")]
    pub balance: Option<Amount>,
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl Transaction {
    /// Append continuation text to the description, space-separated.
    pub fn append_description(&mut self, extra: &str) {
        if extra.is_empty() {
            return;
        }
        if self.description.is_empty() {
            self.description = extra.to_string();
        } else {
            self.description.push(' ');
            self.description.push_str(extra);
        }
    }
}
