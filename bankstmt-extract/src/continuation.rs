//! Continuation-row absorption: overflow description text that the
//! extractor emitted as rows of their own.

use bankstmt_core::{CountryIndex, clean_text, is_transaction_row};

/// Absorption examines at most this many rows past a transaction-opening
/// row, i.e. `min(CONTINUATION_LOOKAHEAD_ROWS, rows_remaining)`.
pub const CONTINUATION_LOOKAHEAD_ROWS: usize = 10;

/// Summary/carry-forward markers: a row containing one of these never
/// belongs to the preceding transaction.
const NON_TRANSACTION_MARKERS: [&str; 7] = [
    "SUB-TOTAL",
    "SUBTOTAL",
    "TOTAL",
    "NEW TRANSACTIONS",
    "BALANCE B/F",
    "BALANCE C/F",
    "TOTAL BALANCE CARRIED FORWARD",
];

fn is_marker_row(row: &[String]) -> bool {
    row.iter().any(|cell| {
        let upper = clean_text(cell).to_uppercase();
        NON_TRANSACTION_MARKERS.iter().any(|m| upper.contains(m))
    })
}

/// Collect overflow description text from the rows following a
/// transaction-opening row.
///
/// Stops at the first row that opens a transaction itself or carries a
/// non-transaction marker. Location tokens are dropped, and rows made up
/// solely of single-character tokens are discarded as extraction noise.
pub fn additional_description(rows: &[Vec<String>], countries: &CountryIndex) -> String {
    let mut collected: Vec<String> = Vec::new();

    for row in rows.iter().take(CONTINUATION_LOOKAHEAD_ROWS) {
        if is_transaction_row(row) || is_marker_row(row) {
            break;
        }

        let row_text = row
            .iter()
            .map(|cell| clean_text(cell))
            .filter(|cell| !cell.is_empty() && !countries.is_location(cell))
            .collect::<Vec<_>>()
            .join(" ");

        if !row_text.is_empty() && !row_text.split_whitespace().all(|w| w.chars().count() == 1) {
            collected.push(row_text);
        }
    }

    collected.join(" ")
}
