//! Transaction extraction for flat (credit card) statements.

use std::sync::LazyLock;

use bankstmt_core::{
    CountryIndex, Table, Transaction, clean_text, is_transaction_row, parse_amount,
    standardize_date, tokens,
};
use log::debug;
use regex::Regex;

use crate::context::StatementContext;
use crate::continuation::additional_description;

// Recurring auto-payment and GIRO reference lines are statement plumbing,
// not spending.
static EXCLUDED_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AUTO-PYT FROM ACCT#\d+ REF NO: \d+|PAYMENT BY GIRO").unwrap()
});

/// Extract transactions from aligned credit-card tables.
///
/// No header mapping exists here: per opening row the first date-shaped cell
/// becomes the date, the first cell containing a monetary token becomes the
/// amount, and every other non-empty, non-location cell joins the
/// description.
pub fn extract_credit_card_transactions(
    tables: &[Table],
    ctx: &StatementContext,
    countries: &CountryIndex,
) -> Vec<Transaction> {
    let mut transactions = Vec::new();

    for table in tables {
        let mut open: Option<Transaction> = None;
        for (idx, row) in table.rows.iter().enumerate() {
            if !is_transaction_row(row) {
                continue;
            }
            if let Some(done) = open.take() {
                transactions.push(done);
            }

            let mut txn = Transaction::default();
            let mut fragments: Vec<String> = Vec::new();
            let mut date_found = false;
            let mut amount_found = false;

            for cell in row {
                let value = clean_text(cell);
                if !date_found && tokens::is_date(&value) {
                    txn.date = Some(standardize_date(&value, ctx.year, ctx.current_year));
                    date_found = true;
                } else if !amount_found && tokens::contains_currency(&value) {
                    txn.amount = Some(parse_amount(&value));
                    amount_found = true;
                } else if !value.is_empty() && !countries.is_location(&value) {
                    fragments.push(value);
                }
            }
            txn.description = fragments.join(" ");

            txn.append_description(&additional_description(&table.rows[idx + 1..], countries));

            if EXCLUDED_DESCRIPTION.is_match(&txn.description) {
                debug!("dropping excluded transaction: {}", txn.description);
                continue;
            }
            open = Some(txn);
        }
        if let Some(done) = open.take() {
            transactions.push(done);
        }
    }

    debug!("extracted {} credit card transaction(s)", transactions.len());
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankstmt_core::Amount;

    fn ctx(year: i32) -> StatementContext {
        StatementContext {
            statement_date: None,
            year: Some(year),
            current_year: 2026,
        }
    }

    fn extract(table: Table, year: i32) -> Vec<Transaction> {
        extract_credit_card_transactions(&[table], &ctx(year), CountryIndex::global())
    }

    #[test]
    fn test_location_cells_stay_out_of_description() {
        let table = Table::from_rows(&[
            &["24/04", "AMAZE* GRAB A-6AR2I", "SINGAPORE", "SGP", "2.00", ""],
            &["26/04", "-7758 BUS/MRT 429799071", "SINGAPORE", "SGP", "15.00", ""],
            &["02/05", "GOJEK", "31353135", "SGP", "25.00", ""],
        ]);
        let txns = extract(table, 2025);
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].date.as_ref().unwrap().as_str(), "24 April 2025");
        assert_eq!(txns[0].description, "AMAZE* GRAB A-6AR2I");
        assert_eq!(txns[0].amount, Some(Amount::Parsed(2.0)));
        assert_eq!(txns[1].description, "-7758 BUS/MRT 429799071");
        // Non-location digits are kept as description fragments.
        assert_eq!(txns[2].description, "GOJEK 31353135");
    }

    #[test]
    fn test_split_parenthesis_refund() {
        let table = Table::from_rows(&[
            &["30/04", "AMAZE* CTCPPT BDS V", "SINGAPORE", "SGP", "(50.00", ")"],
            &["30/04", "-4887 BUS/MRT 431965453", "SINGAPORE", "SGP", "6.00", ""],
        ]);
        let txns = extract(table, 2025);
        assert_eq!(txns.len(), 2);
        // The open parenthesis marks the refund negative; the stray closer
        // lands in the description.
        assert_eq!(txns[0].amount, Some(Amount::Parsed(-50.0)));
        assert_eq!(txns[0].description, "AMAZE* CTCPPT BDS V )");
    }

    #[test]
    fn test_giro_and_auto_payment_rows_are_excluded() {
        let table = Table::from_rows(&[
            &["17/05", "PAYMENT BY GIRO", "", "", "(754.15", ")"],
            &["24/04", "AMAZE* HUMVENTURES", "SINGAPORE", "SGP", "60.00", ""],
        ]);
        let txns = extract(table, 2025);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "AMAZE* HUMVENTURES");

        let table = Table::from_rows(&[
            &["20 MAY", "AUTO-PYT FROM ACCT#123456789012345", "10,500.00 CR"],
            &["", "REF NO: 11689999398715999971650", ""],
            &["", "NEW TRANSACTIONS JOHN DOE", ""],
            &["23 APR", "CUSTOMER.IO EMAIL MARK HTTPSCUSTOMER OR", "150.75"],
            &["", "U. S. DOLLAR 100.00", ""],
        ]);
        let txns = extract(table, 2024);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date.as_ref().unwrap().as_str(), "23 April 2024");
        assert_eq!(
            txns[0].description,
            "CUSTOMER.IO EMAIL MARK HTTPSCUSTOMER OR U. S. DOLLAR 100.00"
        );
        assert_eq!(txns[0].amount, Some(Amount::Parsed(150.75)));
    }

    #[test]
    fn test_conversion_fee_continuation() {
        let table = Table::from_rows(&[
            &["02/06", "-5250 AIRBNB * HMNEHEPE 653-163-1004", "", "", "200.17", ""],
            &["02/06", "CCY CONVERSION FEE", "", "", "2.00", "FOR: 200.17 SGD"],
        ]);
        let txns = extract(table, 2024);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "-5250 AIRBNB * HMNEHEPE 653-163-1004");
        assert_eq!(txns[0].amount, Some(Amount::Parsed(200.17)));
        assert_eq!(txns[1].description, "CCY CONVERSION FEE FOR: 200.17 SGD");
        assert_eq!(txns[1].amount, Some(Amount::Parsed(2.0)));
    }
}
