//! Transaction extraction for running-balance (bank account) statements.

use bankstmt_core::{
    CountryIndex, Table, Transaction, clean_text, is_header_row, is_transaction_row, parse_amount,
    standardize_date,
};
use log::debug;

use crate::context::StatementContext;
use crate::continuation::additional_description;

/// Header-resolved column positions for the named record fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeaderColumns {
    date: Option<usize>,
    withdrawal: Option<usize>,
    deposit: Option<usize>,
    balance: Option<usize>,
    description: Option<usize>,
}

/// Map header cells to fields left to right. Each cell lands on at most one
/// field (first matching rule wins for the cell); a later cell matching the
/// same field overrides an earlier one, which is what routes side-by-side
/// transaction/value date columns to the value date.
fn map_header_columns(header: &[String]) -> HeaderColumns {
    let mut columns = HeaderColumns::default();
    for (i, cell) in header.iter().enumerate() {
        let cell = cell.to_lowercase();
        if cell.contains("date") {
            columns.date = Some(i);
        } else if cell.contains("withdrawal") || cell.contains("debit") {
            columns.withdrawal = Some(i);
        } else if cell.contains("deposit") || cell.contains("credit") {
            columns.deposit = Some(i);
        } else if cell.contains("balance") {
            columns.balance = Some(i);
        } else if cell.contains("description")
            || cell.contains("transaction")
            || cell.contains("particulars")
        {
            columns.description = Some(i);
        }
    }
    columns
}

fn cell<'a>(row: &'a [String], col: Option<usize>) -> Option<&'a str> {
    col.and_then(|c| row.get(c)).map(String::as_str)
}

/// Extract transactions from aligned bank-account tables.
///
/// Tables whose header row cannot be located are skipped whole rather than
/// producing partially mapped records.
pub fn extract_bank_account_transactions(
    tables: &[Table],
    ctx: &StatementContext,
    countries: &CountryIndex,
) -> Vec<Transaction> {
    let mut transactions = Vec::new();

    for table in tables {
        let Some(header) = table.rows.iter().find(|row| is_header_row(row)) else {
            debug!("skipping table without header row");
            continue;
        };
        let columns = map_header_columns(header);

        let mut open: Option<Transaction> = None;
        for (idx, row) in table.rows.iter().enumerate() {
            if !is_transaction_row(row) {
                continue;
            }
            if let Some(done) = open.take() {
                transactions.push(done);
            }

            let mut txn = Transaction::default();
            if let Some(value) = cell(row, columns.date) {
                txn.date = Some(standardize_date(&clean_text(value), ctx.year, ctx.current_year));
            }
            if let Some(value) = cell(row, columns.withdrawal) {
                txn.withdrawal = Some(parse_amount(&clean_text(value)));
            }
            if let Some(value) = cell(row, columns.deposit) {
                txn.deposit = Some(parse_amount(&clean_text(value)));
            }
            if let Some(value) = cell(row, columns.balance) {
                txn.balance = Some(parse_amount(&clean_text(value)));
            }
            if let Some(value) = cell(row, columns.description) {
                txn.description = clean_text(value);
            }

            txn.append_description(&additional_description(&table.rows[idx + 1..], countries));
            open = Some(txn);
        }
        if let Some(done) = open.take() {
            transactions.push(done);
        }
    }

    debug!("extracted {} bank account transaction(s)", transactions.len());
    transactions
}
