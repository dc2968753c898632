//! Transaction date normalization.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A date cell after normalization. Unparseable text is carried through
/// unchanged rather than dropped, so the record never loses information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateText {
    Parsed(String),
    Unparsed(String),
}

impl DateText {
    pub fn as_str(&self) -> &str {
        match self {
            DateText::Parsed(s) | DateText::Unparsed(s) => s,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, DateText::Parsed(_))
    }
}

impl Serialize for DateText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Try a year-less format with the statement year first, then the injected
/// current year. The current year only validates the day/month pair (leap
/// days); it is never rendered.
fn parse_with_year(
    date_str: &str,
    format: &str,
    year: Option<i32>,
    current_year: i32,
) -> Option<NaiveDate> {
    for candidate in [year, Some(current_year)].into_iter().flatten() {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{date_str} {candidate}"), format) {
            return Some(date);
        }
    }
    None
}

fn render(date: NaiveDate, with_year: bool) -> DateText {
    if with_year {
        DateText::Parsed(date.format("%d %B %Y").to_string())
    } else {
        DateText::Parsed(date.format("%d %B").to_string())
    }
}

/// Normalize `DD/MM`, `DD/MM/YYYY` or `DD Mon` into `"DD FullMonthName"`,
/// appending the year only when one was actually resolved. Anything else is
/// returned unchanged as [`DateText::Unparsed`].
pub fn standardize_date(date_str: &str, year: Option<i32>, current_year: i32) -> DateText {
    if let Some(date) = parse_with_year(date_str, "%d/%m %Y", year, current_year) {
        return render(date, year.is_some());
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%d/%m/%Y") {
        return render(date, true);
    }

    if let Some(date) = parse_with_year(date_str, "%d %b %Y", year, current_year) {
        return render(date, year.is_some());
    }

    DateText::Unparsed(date_str.to_string())
}
