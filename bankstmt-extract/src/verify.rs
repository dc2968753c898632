//! Reconciliation: sanity-check extracted totals against recorded balances.

use bankstmt_core::Transaction;
use serde::Serialize;

/// Computed balance must agree with the recorded one within this tolerance.
const BALANCE_TOLERANCE: f64 = 0.01;

/// Verification summary over the emitted records. Shape follows the
/// statement kind: credit cards get spend totals, bank accounts a full
/// balance reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VerificationSummary {
    CreditCard {
        total_credit: f64,
        total_debit: f64,
        net_spend: f64,
    },
    BankAccount {
        total_deposits: f64,
        total_withdrawals: f64,
        starting_balance: Option<f64>,
        ending_balance_from_file: Option<f64>,
        ending_balance_from_calculations: Option<f64>,
        balance_matches: Option<bool>,
    },
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn field(amount: &Option<bankstmt_core::Amount>) -> f64 {
    amount.as_ref().and_then(|a| a.value()).unwrap_or(0.0)
}

/// Verify the extracted transactions.
///
/// Records are treated as a bank account when any of them carries a balance
/// field. A reconciliation mismatch is reported as a flag, never an error,
/// and never suppresses the transactions themselves.
pub fn verify_transactions(transactions: &[Transaction]) -> VerificationSummary {
    let is_bank_account = transactions.iter().any(|t| t.balance.is_some());

    if !is_bank_account {
        let amounts = transactions.iter().map(|t| field(&t.amount));
        let total_credit: f64 = amounts.clone().filter(|a| *a < 0.0).sum();
        let total_debit: f64 = amounts.filter(|a| *a > 0.0).sum();
        return VerificationSummary::CreditCard {
            total_credit: round2(total_credit),
            total_debit: round2(total_debit),
            net_spend: round2(total_debit + total_credit),
        };
    }

    let total_deposits: f64 = transactions.iter().map(|t| field(&t.deposit)).sum();
    let total_withdrawals: f64 = transactions.iter().map(|t| field(&t.withdrawal)).sum();

    let parsed_balance =
        |t: &Transaction| t.balance.as_ref().and_then(|b| b.value());
    let first_balance = transactions.iter().find_map(parsed_balance);
    let last_balance = transactions.iter().rev().find_map(parsed_balance);

    let (starting_balance, calculated_last, balance_matches) =
        match (first_balance, last_balance, transactions.first()) {
            (Some(first), Some(last), Some(first_txn)) => {
                // The first recorded balance already includes the first
                // transaction; reverse it out to get the opening balance.
                let starting =
                    first - field(&first_txn.deposit) + field(&first_txn.withdrawal);
                let calculated = starting + total_deposits - total_withdrawals;
                let matches = (calculated - last).abs() < BALANCE_TOLERANCE;
                (Some(starting), Some(calculated), Some(matches))
            }
            _ => (None, None, None),
        };

    VerificationSummary::BankAccount {
        total_deposits: round2(total_deposits),
        total_withdrawals: round2(total_withdrawals),
        starting_balance: starting_balance.map(round2),
        ending_balance_from_file: last_balance.map(round2),
        ending_balance_from_calculations: calculated_last.map(round2),
        balance_matches,
    }
}
