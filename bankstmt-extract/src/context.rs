//! Statement date and year resolution.
//!
//! Year-less transaction dates (`01 JUL`, `17/08`) need the statement's year
//! to normalize. It is resolved once per document: from table content first,
//! then from the first page's raw text, and as a last resort from a 4-digit
//! year embedded in the file name.

use std::path::Path;
use std::sync::LazyLock;

use bankstmt_core::Table;
use chrono::{Datelike, NaiveDate};
use log::debug;
use regex::Regex;

const STATEMENT_YEAR_MIN: i32 = 2010;
const STATEMENT_YEAR_MAX: i32 = 2050;

/// Shared, read-only context for one source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementContext {
    /// Human-readable statement date as found in the document, if any.
    pub statement_date: Option<String>,
    /// Resolved statement year for disambiguating day/month-only dates.
    pub year: Option<i32>,
    /// Injected current calendar year, used only as a date-parsing fallback.
    pub current_year: i32,
}

impl StatementContext {
    pub fn new(current_year: i32) -> Self {
        Self {
            statement_date: None,
            year: None,
            current_year,
        }
    }
}

static TABLE_DATE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // e.g. "23 May 2024"
        Regex::new(r"(?i)(\d{1,2}\s+[A-Za-z]+\s+\d{4})").unwrap(),
        // e.g. "1 JUL 2024 TO 31 JUL 2024"; the range start wins
        Regex::new(r"(?i)(\d{1,2}\s+[A-Za-z]+\s+\d{4})\s+TO\s+(\d{1,2}\s+[A-Za-z]+\s+\d{4})")
            .unwrap(),
        // e.g. "STATEMENT DATE: 23 May 2024"
        Regex::new(r"(?i)STATEMENT DATE[:\s]+(\d{1,2}\s+[A-Za-z]+\s+\d{4})").unwrap(),
    ]
});

static PAGE_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}-\d{2}-\d{4}").unwrap());

static FILENAME_YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20[1-4][0-9]|2050").unwrap());

/// Scan a table's cells, then the page text, for the statement date.
/// Returns the date text as found plus its year.
pub fn extract_statement_date(
    table: &Table,
    page_text: &str,
    current_year: i32,
) -> (Option<String>, Option<i32>) {
    let year_cap = STATEMENT_YEAR_MAX.min(current_year + 1);

    for cell in table.rows.iter().flatten() {
        for pattern in TABLE_DATE_PATTERNS.iter() {
            let Some(captures) = pattern.captures(cell) else {
                continue;
            };
            let date_str = &captures[1];
            if let Ok(date) = NaiveDate::parse_from_str(date_str, "%d %b %Y") {
                if (STATEMENT_YEAR_MIN..=year_cap).contains(&date.year()) {
                    debug!("statement date from table: {date_str}");
                    return (Some(date_str.to_string()), Some(date.year()));
                }
            }
        }
    }

    if let Some(m) = PAGE_DATE_PATTERN.find(page_text) {
        if let Ok(date) = NaiveDate::parse_from_str(m.as_str(), "%d-%m-%Y") {
            if (STATEMENT_YEAR_MIN..=STATEMENT_YEAR_MAX).contains(&date.year()) {
                let rendered = date.format("%d %b %Y").to_string();
                debug!("statement date from page text: {rendered}");
                return (Some(rendered), Some(date.year()));
            }
        }
    }

    (None, None)
}

/// Last-resort statement year: a 4-digit year in [2010, 2050] embedded in
/// the file name.
pub fn year_from_filename(path: &Path) -> Option<i32> {
    let name = path.to_string_lossy();
    FILENAME_YEAR_PATTERN
        .find(&name)
        .and_then(|m| m.as_str().parse().ok())
}
