//! Row and table classification.

use crate::grid::Table;
use crate::tokens;

const BANK_ACCOUNT_HEADER_KEYWORDS: [&str; 5] =
    ["date", "description", "withdrawal", "deposit", "balance"];
const CREDIT_CARD_HEADER_KEYWORDS: [&str; 3] = ["date", "description", "amount"];

/// Rows inspected when deciding whether a table is a running-balance
/// statement.
const KIND_SCAN_ROWS: usize = 10;

/// A row is a header row when its lower-cased cells jointly contain either
/// the full bank-account keyword set or the credit-card one, scattered
/// across any cells in any order.
pub fn is_header_row(row: &[String]) -> bool {
    let cells: Vec<String> = row.iter().map(|c| c.to_lowercase()).collect();
    let has_all =
        |keywords: &[&str]| keywords.iter().all(|k| cells.iter().any(|c| c.contains(k)));
    has_all(&BANK_ACCOUNT_HEADER_KEYWORDS) || has_all(&CREDIT_CARD_HEADER_KEYWORDS)
}

/// Greedy left-to-right scan for date, then description, then currency.
///
/// A cell that fails the currently sought class is skipped and never
/// reconsidered; the row opens a transaction iff all three classes fire in
/// that order.
pub fn is_transaction_row(row: &[String]) -> bool {
    let mut found_date = false;
    let mut found_description = false;
    let mut found_currency = false;

    for cell in row {
        if !found_date && tokens::is_date(cell) {
            found_date = true;
            continue;
        }
        if found_date && !found_description && tokens::is_description(cell) {
            found_description = true;
            continue;
        }
        if found_description && !found_currency && tokens::is_currency(cell) {
            found_currency = true;
            break;
        }
    }

    found_date && found_description && found_currency
}

/// A table is a running-balance (bank account) statement when withdrawal,
/// deposit and balance all appear somewhere in its first rows.
pub fn is_bank_account_table(table: &Table) -> bool {
    let scan = &table.rows[..table.rows.len().min(KIND_SCAN_ROWS)];
    ["withdrawal", "deposit", "balance"].iter().all(|keyword| {
        scan.iter()
            .flatten()
            .any(|cell| cell.to_lowercase().contains(keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_is_transaction_row() {
        let cases: &[(&[&str], bool)] = &[
            (&["17/08", "MERCHANT* FOOD A-123", "CITYVILLE", "ABC", "1.68"], true),
            (&["21/08", "-0315 ONLINE *SERVICE S", "TECHCITY", "XYZ", "27.06"], true),
            (&["SUBTOTAL", "", "", "3,000.24"], false),
            (&["FOREIGN CURRENCY USD 20.00", "", "", ""], false),
            (&["30 JUL", "30 JUL", "FUND TRANSFER", "", "3.90", "", "556,713.42"], true),
            (&["", "", "BALANCE C/F", "", "", "", "556,736.96"], false),
        ];
        for (cells, expected) in cases {
            assert_eq!(is_transaction_row(&row(cells)), *expected, "row {cells:?}");
        }
    }

    #[test]
    fn test_transaction_row_requires_class_order() {
        // Currency before any date never fires; the scan does not backtrack.
        assert!(!is_transaction_row(&row(&["700.00", "FAST PAYMENT"])));
        assert!(!is_transaction_row(&row(&["01 JUL", "700.00"])));
        assert!(is_transaction_row(&row(&["01 JUL", "FAST PAYMENT", "700.00"])));
    }

    #[test]
    fn test_is_header_row() {
        let cases: &[(&[&str], bool)] = &[
            (&["Date", "Description", "Withdrawal", "Deposit", "Balance"], true),
            (&["Transaction Date", "Value Date", "Description", "Amount"], true),
            (&["01 JUL", "FAST PAYMENT", "700.00", "", "577,169.97"], false),
            (&["DATE", "DESCRIPTION", "AMOUNT (S$)"], true),
            (&["20 MAY", "AUTO-PYT FROM ACCT#123456789012345", "15,909.03 CR"], false),
        ];
        for (cells, expected) in cases {
            assert_eq!(is_header_row(&row(cells)), *expected, "row {cells:?}");
        }
    }

    #[test]
    fn test_is_bank_account_table() {
        let bank = Table::from_rows(&[
            &["SAVINGS ACCOUNT", ""],
            &["Date", "Description", "Withdrawal", "Deposit", "Balance"],
        ]);
        assert!(is_bank_account_table(&bank));

        let card = Table::from_rows(&[&["DATE", "DESCRIPTION", "AMOUNT (S$)"]]);
        assert!(!is_bank_account_table(&card));

        // Keywords beyond the scan window are ignored.
        let mut rows: Vec<Vec<String>> = (0..KIND_SCAN_ROWS).map(|_| vec![String::new()]).collect();
        rows.push(row(&["Withdrawal", "Deposit", "Balance"]));
        assert!(!is_bank_account_table(&Table::new(rows)));
    }
}
