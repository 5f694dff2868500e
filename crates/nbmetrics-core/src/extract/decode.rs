//! Strict decoding of captured numeric text.

use crate::domain::{Result, SummaryError};

/// Parse a captured decimal. Surrounding whitespace is trimmed, nothing else.
pub fn decode_decimal(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SummaryError::NumericDecode {
            field,
            raw: raw.to_string(),
        })
}

/// Parse a captured integer count after stripping `,` grouping separators.
pub fn decode_count(field: &'static str, raw: &str) -> Result<u64> {
    let digits: String = raw.trim().chars().filter(|c| *c != ',').collect();
    digits.parse::<u64>().map_err(|_| SummaryError::NumericDecode {
        field,
        raw: raw.to_string(),
    })
}
