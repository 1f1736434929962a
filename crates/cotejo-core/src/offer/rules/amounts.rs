//! Locale-ambiguous amount parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ExtractionError;

/// Parse a numeric token whose `.`/`,` separators may each be grouping or
/// decimal separators depending on vendor locale.
///
/// The last occurrence of either separator is the decimal separator when
/// exactly two digits follow it; every earlier occurrence is a thousands
/// separator and is stripped. A trailing 3-digit group ("1,234") is
/// treated as thousands-only.
pub fn parse_amount(s: &str) -> Result<Decimal, ExtractionError> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ExtractionError::Amount(s.to_string()));
    }

    let normalized = match cleaned.rfind([',', '.']) {
        Some(pos) if cleaned.len() - pos == 3 => {
            let digits: String = cleaned[..pos]
                .chars()
                .filter(char::is_ascii_digit)
                .collect();
            format!("{}.{}", digits, &cleaned[pos + 1..])
        }
        Some(_) => cleaned.chars().filter(char::is_ascii_digit).collect(),
        None => cleaned,
    };

    Decimal::from_str(&normalized).map_err(|_| ExtractionError::Amount(s.to_string()))
}
