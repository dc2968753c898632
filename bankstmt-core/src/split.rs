//! Merged-cell splitting: rebuild a column-aligned grid from a raw grid
//! whose cells may hold newline-joined values.
//!
//! The upstream extractor sometimes folds two or three logically distinct
//! columns into one cell. Splitting is driven entirely by the table's header
//! row: the expansion geometry detected there is recorded once and re-applied
//! verbatim to every later row, so column alignment follows the header's
//! semantic columns even when a data row's own merge pattern is noisy or
//! absent.

use std::collections::BTreeMap;

use log::debug;

use crate::classify::{is_header_row, is_transaction_row};
use crate::grid::Table;
use crate::tokens::{self, clean_text};

/// Header-derived column-expansion plan mapping an original column index to
/// the subcolumn labels it expands into. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPlan {
    columns: BTreeMap<usize, Vec<String>>,
}

impl SplitPlan {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Subcolumn labels for an original column, if it splits.
    pub fn subcolumns(&self, col: usize) -> Option<&[String]> {
        self.columns.get(&col).map(Vec::as_slice)
    }

    /// Detect mergeable cells in a header row, split them in place and
    /// record the expansion plan. Columns are processed in descending order
    /// so the physical shifts cannot clobber columns still to be split.
    pub fn from_header_row(row: &mut Vec<String>) -> Self {
        let merged: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, cell)| is_merged_cell(cell))
            .map(|(i, _)| i)
            .collect();

        let mut columns = BTreeMap::new();
        for &col in merged.iter().rev() {
            let cell = std::mem::take(&mut row[col]);
            let subcolumns: Vec<String> =
                cell.split('\n').map(|p| p.trim().to_string()).collect();
            shift_right(row, col, subcolumns.len() - 1);
            for (i, part) in subcolumns.iter().enumerate() {
                row[col + i] = part.clone();
            }
            columns.insert(col, subcolumns);
        }
        Self { columns }
    }

    /// Re-apply the recorded plan to a data row: the designated columns are
    /// split on newlines in descending column order. Exactly two parts fill
    /// the left and right subcolumns; a single part goes to the right
    /// subcolumn with the left left empty; any other count blanks both.
    pub fn apply_to_row(&self, row: &mut Vec<String>) {
        for (&col, subcolumns) in self.columns.iter().rev() {
            if row.len() <= col {
                row.resize(col + 1, String::new());
            }
            let cell = std::mem::take(&mut row[col]);
            shift_right(row, col, subcolumns.len() - 1);
            let parts: Vec<&str> = cell.split('\n').collect();
            match parts.as_slice() {
                [left, right] => {
                    row[col] = left.trim().to_string();
                    row[col + 1] = right.trim().to_string();
                }
                [only] => {
                    row[col + 1] = only.trim().to_string();
                }
                _ => {}
            }
        }
    }
}

/// Shift everything right of `col` by `by` positions, extending the row and
/// leaving the vacated cells empty.
fn shift_right(row: &mut Vec<String>, col: usize, by: usize) {
    if by == 0 {
        return;
    }
    let old_len = row.len();
    row.resize(old_len + by, String::new());
    for idx in (col + 1..old_len).rev() {
        row[idx + by] = std::mem::take(&mut row[idx]);
    }
}

/// Does this cell carry a merge signature: two or three newline-joined
/// values whose shapes look like adjacent logical columns?
pub fn is_merged_cell(cell: &str) -> bool {
    let parts: Vec<&str> = cell.split('\n').collect();

    match parts.as_slice() {
        [first, second] => {
            let first = clean_text(first);
            let second = clean_text(second);

            // Known header pairs the extractor folds together.
            let literal_pairs = [
                ("transaction", "value"),
                ("deposit", "balance"),
                ("date", "date"),
            ];
            if literal_pairs
                .iter()
                .any(|(a, b)| first.eq_ignore_ascii_case(a) && second.eq_ignore_ascii_case(b))
            {
                return true;
            }

            type Test = fn(&str) -> bool;
            let combos: [(Test, Test); 5] = [
                (tokens::contains_date, tokens::contains_date),
                (tokens::contains_currency, tokens::contains_currency),
                (tokens::contains_date, tokens::is_description),
                (tokens::is_description, tokens::contains_currency),
                (tokens::is_description, tokens::is_description),
            ];
            combos.iter().any(|(a, b)| a(&first) && b(&second))
        }
        [_, _, _] => {
            if cell.eq_ignore_ascii_case("transaction\ndate\ndescription") {
                return true;
            }
            tokens::contains_date(parts[0])
                && tokens::is_description(parts[1])
                && tokens::contains_currency(parts[2])
        }
        _ => false,
    }
}

/// Align one raw table: find its header row, derive the split plan there,
/// re-apply it to every following row, and pad the result rectangular.
/// Also reports whether the aligned grid holds at least one
/// transaction-opening row.
pub fn align_table(table: &Table) -> (Table, bool) {
    let mut aligned: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
    let mut plan = SplitPlan::default();
    let mut header_seen = false;

    for row in &table.rows {
        let mut new_row = row.clone();
        if !header_seen && is_header_row(row) {
            header_seen = true;
            plan = SplitPlan::from_header_row(&mut new_row);
            if !plan.is_empty() {
                debug!("header row expands {} merged column(s)", plan.columns.len());
            }
        } else {
            plan.apply_to_row(&mut new_row);
        }
        aligned.push(new_row);
    }

    let mut out = Table::new(aligned);
    out.pad_to_width();
    let has_transactions = out.rows.iter().any(|r| is_transaction_row(r));
    (out, has_transactions)
}
