//! Error types for the cotejo-core library.

use thiserror::Error;

/// Errors related to offer extraction.
///
/// Extraction is best-effort over noisy text, so none of these abort a
/// pipeline run: [`NoItems`](ExtractionError::NoItems) excludes a single
/// document from the comparison and [`Amount`](ExtractionError::Amount)
/// downgrades a candidate line to a skipped line.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No line items could be recognized in the document's text.
    #[error("no line items found in document: {0}")]
    NoItems(String),

    /// A candidate token does not match the money grammar.
    #[error("failed to parse amount token: {0}")]
    Amount(String),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
