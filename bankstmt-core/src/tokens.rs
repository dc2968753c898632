//! Cell-level token classifiers: date, currency and description patterns.
//!
//! Every higher layer (merge detection, row classification, extraction)
//! combines these predicates rather than defining its own.

use regex::Regex;
use std::sync::LazyLock;

const DATE: &str = r"\d{1,2}[/-]\d{1,2}([/-]\d{2,4})?|\d{1,2} \w{3}";
const CURRENCY: &str = r"\(?\$?\s*\d+(,\d{2,3})*(\.\d{2})\)?\s*(CR|DR)?";

static DATE_AT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{DATE})")).unwrap());
static DATE_ANYWHERE: LazyLock<Regex> = LazyLock::new(|| Regex::new(DATE).unwrap());
static CURRENCY_AT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{CURRENCY})")).unwrap());
static CURRENCY_ANYWHERE: LazyLock<Regex> = LazyLock::new(|| Regex::new(CURRENCY).unwrap());

// A description is free text over this character set that is neither
// date-like nor number-like at its start. The number-like prefix test keeps
// any cell opening with digits (optionally parenthesized) out of the
// description class, amounts with or without decimals alike.
static DESCRIPTION_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9* .#:()/-]+$").unwrap());
static DATE_LIKE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{1,2}[/-]\d{1,2}|[A-Za-z]{3} \d{1,2})").unwrap());
static NUMBER_LIKE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?\d{1,3}(,\d{3})*(\.\d{2})?\)?\s*(CR|DR)?").unwrap());

/// Does the cell open with a date token (`D[D]/D[D][/YY[YY]]` or `D[D] Mon`)?
pub fn is_date(cell: &str) -> bool {
    DATE_AT_START.is_match(cell)
}

/// Does the cell contain a date token anywhere?
pub fn contains_date(cell: &str) -> bool {
    DATE_ANYWHERE.is_match(cell)
}

/// Does the cell open with a monetary token: optional `$`, optional
/// parentheses, thousands separators, exactly two decimals, optional
/// `CR`/`DR` suffix?
pub fn is_currency(cell: &str) -> bool {
    CURRENCY_AT_START.is_match(cell)
}

/// Does the cell contain a monetary token anywhere?
pub fn contains_currency(cell: &str) -> bool {
    CURRENCY_ANYWHERE.is_match(cell)
}

/// Is the whole cell free text that is neither a date nor a number?
pub fn is_description(cell: &str) -> bool {
    DESCRIPTION_CHARS.is_match(cell)
        && !DATE_LIKE_PREFIX.is_match(cell)
        && !NUMBER_LIKE_PREFIX.is_match(cell)
}

/// Drop non-printable/non-ASCII characters, trim, and collapse whitespace
/// runs to single spaces.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_graphic() || c.is_ascii_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
