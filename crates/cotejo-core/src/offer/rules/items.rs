//! Line item extraction from noisy quotation text.

use crate::models::offer::LineItem;

use super::amounts::parse_amount;
use super::patterns::{CODE_PREFIX, COLUMN_SPLIT, MONEY_TOKEN, SHORT_INT};

/// Default cap on description length, to keep table cells readable.
pub const MAX_DESCRIPTION_LEN: usize = 80;

/// Result of scanning one document's text for item lines.
#[derive(Debug, Default)]
pub struct ItemExtraction {
    /// Items in encounter order, no deduplication.
    pub items: Vec<LineItem>,
    /// Money-bearing lines that failed item recognition, for audit.
    pub skipped_lines: Vec<String>,
}

/// Description text carried across lines until the next item line.
#[derive(Debug, PartialEq)]
enum Pending {
    Idle,
    Accumulating(String),
}

impl Pending {
    fn push(&mut self, line: &str) {
        match self {
            Pending::Idle => *self = Pending::Accumulating(line.to_string()),
            Pending::Accumulating(text) => {
                text.push(' ');
                text.push_str(line);
            }
        }
    }

    fn peek(&self) -> Option<&str> {
        match self {
            Pending::Idle => None,
            Pending::Accumulating(text) => Some(text),
        }
    }

    fn reset(&mut self) {
        *self = Pending::Idle;
    }
}

/// Scan a document's text for item lines.
///
/// Consecutive lines without any money-shaped token accumulate as pending
/// description text (multi-line descriptions precede their data row);
/// a blank line discards the accumulation. A line with at
/// least two money tokens and a whitespace-delimited 1-3 digit quantity
/// emits an item and resets the accumulator; money-bearing lines that
/// fail recognition are recorded as skipped.
pub fn extract_items(text: &str, max_description_len: usize) -> ItemExtraction {
    let mut extraction = ItemExtraction::default();
    let mut pending = Pending::Idle;

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            // A blank line breaks description consecutiveness.
            pending.reset();
            continue;
        }

        let money: Vec<&str> = MONEY_TOKEN.find_iter(line).map(|m| m.as_str()).collect();
        if money.is_empty() {
            pending.push(line);
            continue;
        }

        match recognize_item(line, &money, pending.peek(), max_description_len) {
            Ok(item) => {
                extraction.items.push(item);
                pending.reset();
            }
            Err(reason) => {
                extraction
                    .skipped_lines
                    .push(format!("line {}: {} ({})", index + 1, line, reason));
            }
        }
    }

    extraction
}

/// Try to read one line as an item record.
///
/// Field order is fixed: leading 3-6 digit code (optional), first short
/// integer after the code as quantity, second-to-last money token as unit
/// price, last as line total. The trailing pair handles "unit price,
/// total" column layouts robustly against leading code/quantity columns.
fn recognize_item(
    line: &str,
    money: &[&str],
    pending_description: Option<&str>,
    max_description_len: usize,
) -> Result<LineItem, &'static str> {
    if money.len() < 2 {
        return Err("fewer than two money tokens");
    }

    let (code, code_end) = match CODE_PREFIX.captures(line) {
        Some(caps) => {
            let m = caps.get(1).unwrap();
            (m.as_str().to_string(), m.end())
        }
        None => (String::new(), 0),
    };

    let quantity = SHORT_INT
        .captures(&line[code_end..])
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .ok_or("no quantity token")?;

    let unit_price =
        parse_amount(money[money.len() - 2]).map_err(|_| "unparsable unit price")?;
    let line_total = parse_amount(money[money.len() - 1]).map_err(|_| "unparsable total")?;

    let description = match pending_description {
        Some(text) => text.to_string(),
        None => {
            // Columnar fallback: split on runs of spaces, the second
            // field is usually the description column.
            let fields: Vec<&str> = COLUMN_SPLIT.split(line).collect();
            if fields.len() > 1 {
                fields[1].trim().to_string()
            } else {
                line.to_string()
            }
        }
    };

    Ok(LineItem {
        code,
        description: truncate(&description, max_description_len),
        quantity,
        unit_price,
        line_total,
    })
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.trim().to_string()
    } else {
        s.chars().take(max_len).collect::<String>().trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_extract_single_item_line() {
        let text = "123 ABC-1 10 Valve Gate 1,200.00 12,000.00";
        let extraction = extract_items(text, MAX_DESCRIPTION_LEN);

        assert_eq!(extraction.items.len(), 1);
        let item = &extraction.items[0];
        assert_eq!(item.code, "123");
        assert_eq!(item.quantity, 10);
        assert_eq!(item.unit_price, dec("1200.00"));
        assert_eq!(item.line_total, dec("12000.00"));
    }

    #[test]
    fn test_multi_line_description_accumulates() {
        let text = "Brida de acero inoxidable\n\
                    serie 900 con junta\n\
                    456 2 450,00 900,00";
        let extraction = extract_items(text, MAX_DESCRIPTION_LEN);

        assert_eq!(extraction.items.len(), 1);
        assert_eq!(
            extraction.items[0].description,
            "Brida de acero inoxidable serie 900 con junta"
        );
    }

    #[test]
    fn test_accumulator_resets_after_item() {
        let text = "Primer producto\n\
                    101 5 10,00 50,00\n\
                    102 3 20,00 60,00";
        let extraction = extract_items(text, MAX_DESCRIPTION_LEN);

        assert_eq!(extraction.items.len(), 2);
        assert_eq!(extraction.items[0].description, "Primer producto");
        // Second item had no pending text, falls back to the line itself.
        assert_eq!(extraction.items[1].description, "102 3 20,00 60,00");
    }

    #[test]
    fn test_blank_line_discards_pending_description() {
        let text = "Encabezado de la oferta\n\
                    \n\
                    401 2 10,00 20,00";
        let extraction = extract_items(text, MAX_DESCRIPTION_LEN);

        assert_eq!(extraction.items[0].description, "401 2 10,00 20,00");
    }

    #[test]
    fn test_columnar_description_fallback() {
        let text = "101  Valvula esclusa 6in  4  150,00  600,00";
        let extraction = extract_items(text, MAX_DESCRIPTION_LEN);

        assert_eq!(extraction.items.len(), 1);
        assert_eq!(extraction.items[0].description, "Valvula esclusa 6in");
    }

    #[test]
    fn test_unrecognized_money_line_is_skipped_and_reported() {
        // One money token only: not an item line.
        let text = "Subtotal 1.234,56";
        let extraction = extract_items(text, MAX_DESCRIPTION_LEN);

        assert!(extraction.items.is_empty());
        assert_eq!(extraction.skipped_lines.len(), 1);
        assert!(extraction.skipped_lines[0].contains("Subtotal"));
    }

    #[test]
    fn test_line_total_reported_as_extracted() {
        // 3 x 100,00 with a discounted total; the discrepancy survives.
        let text = "201 3 100,00 270,00";
        let extraction = extract_items(text, MAX_DESCRIPTION_LEN);

        assert_eq!(extraction.items[0].line_total, dec("270.00"));
    }

    #[test]
    fn test_description_truncated() {
        let long = "x".repeat(200);
        let text = format!("{long}\n301 1 10,00 10,00");
        let extraction = extract_items(&text, MAX_DESCRIPTION_LEN);

        assert_eq!(extraction.items[0].description.len(), MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn test_no_money_tokens_no_items() {
        let extraction = extract_items("solo texto sin precios", MAX_DESCRIPTION_LEN);
        assert!(extraction.items.is_empty());
        assert!(extraction.skipped_lines.is_empty());
    }
}
