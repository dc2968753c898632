//! Monetary cell normalization.

use serde::{Serialize, Serializer};

/// A monetary cell after normalization: either a signed value or the
/// original text that did not parse. Keeping the failed text tagged means a
/// missing value can never be mistaken for a zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Parsed(f64),
    Unparsed(String),
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Parsed(v) => Some(*v),
            Amount::Unparsed(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Amount::Parsed(_))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Parsed(v) => serializer.serialize_f64(*v),
            Amount::Unparsed(_) => serializer.serialize_none(),
        }
    }
}

/// Parse a statement amount.
///
/// Thousands separators and internal spaces are stripped. Parentheses
/// (either side, or both) and a trailing `CR` mark the value negative; a
/// trailing `DR` is stripped without changing the sign.
pub fn parse_amount(text: &str) -> Amount {
    let mut s = text.replace([',', ' '], "");
    let mut negative = false;

    if let Some(rest) = s.strip_prefix('(') {
        negative = true;
        s = rest.to_string();
    }
    if let Some(rest) = s.strip_suffix(')') {
        negative = true;
        s = rest.to_string();
    }

    if let Some(rest) = s.strip_suffix("CR") {
        negative = true;
        s = rest.to_string();
    } else if let Some(rest) = s.strip_suffix("DR") {
        s = rest.to_string();
    }

    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Amount::Parsed(if negative { -v } else { v }),
        _ => Amount::Unparsed(text.to_string()),
    }
}
