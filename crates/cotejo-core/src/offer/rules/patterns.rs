//! Common regex patterns for quotation extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Money-shaped token: digits, optional 3-digit groups behind either
    // separator, ending in exactly two decimal digits. Both "." and ","
    // appear in the wild as either grouping or decimal separator; the
    // amount parser disambiguates.
    pub static ref MONEY_TOKEN: Regex = Regex::new(
        r"\b\d+(?:[.,]\d{3})*[.,]\d{2}\b"
    ).unwrap();

    // Whitespace-delimited 1-3 digit run, usable as a quantity. Delimited
    // so that fragments of codes ("ABC-1") or money tokens never match.
    pub static ref SHORT_INT: Regex = Regex::new(
        r"(?:^|\s)(\d{1,3})(?:\s|$)"
    ).unwrap();

    // Leading product code: 3-6 digits at line start, followed by
    // whitespace or end of line.
    pub static ref CODE_PREFIX: Regex = Regex::new(
        r"^\s*(\d{3,6})(?:\s|$)"
    ).unwrap();

    // Columnar layout separator: runs of two or more spaces.
    pub static ref COLUMN_SPLIT: Regex = Regex::new(
        r"\s{2,}"
    ).unwrap();

    // Labeled vendor line ("Proveedor: Acme S.A.").
    pub static ref VENDOR_LABEL: Regex = Regex::new(
        r"(?im)^\s*(?:proveedor|supplier|company)\s*:\s*(\S[^\r\n]*)$"
    ).unwrap();
}
