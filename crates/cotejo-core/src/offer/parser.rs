//! Per-document offer parser.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::{ExtractionError, Result};
use crate::models::document::Document;
use crate::models::offer::DocumentOffer;

use super::rules::{
    conditions::extract_conditions,
    items::{extract_items, MAX_DESCRIPTION_LEN},
    vendor::identify_vendor,
};

/// Result of parsing a single document.
#[derive(Debug, Clone)]
pub struct ParsedOffer {
    /// Extracted offer data.
    pub offer: DocumentOffer,
    /// Money-bearing lines that were not recognized as item lines.
    pub skipped_lines: Vec<String>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for quotation parsing.
pub trait QuoteParser {
    /// Parse one document into an offer.
    fn parse(&self, document: &Document) -> Result<ParsedOffer>;
}

/// Heuristic parser for unstructured vendor quotations.
pub struct OfferParser {
    /// Cap on extracted description length.
    max_description_len: usize,
}

impl OfferParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            max_description_len: MAX_DESCRIPTION_LEN,
        }
    }

    /// Set the description length cap.
    pub fn with_max_description_len(mut self, len: usize) -> Self {
        self.max_description_len = len;
        self
    }
}

impl Default for OfferParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteParser for OfferParser {
    fn parse(&self, document: &Document) -> Result<ParsedOffer> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!(
            "parsing offer from {} ({} characters)",
            document.name,
            document.raw_text.len()
        );

        let vendor = identify_vendor(&document.raw_text, Some(&document.name));
        let extraction = extract_items(&document.raw_text, self.max_description_len);

        if extraction.items.is_empty() {
            return Err(ExtractionError::NoItems(document.name.clone()));
        }

        let conditions = extract_conditions(&document.raw_text);
        if conditions.is_empty() {
            warnings.push(format!(
                "no commercial conditions found in {}",
                document.name
            ));
        }

        debug!(
            "extracted {} items for vendor {} ({} lines skipped)",
            extraction.items.len(),
            vendor,
            extraction.skipped_lines.len()
        );

        Ok(ParsedOffer {
            offer: DocumentOffer {
                vendor,
                source: document.name.clone(),
                items: extraction.items,
                conditions,
            },
            skipped_lines: extraction.skipped_lines,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_document() {
        let document = Document::new(
            "oferta_mma.pdf",
            "Proveedor: MMA\n\
             \n\
             Brida WN serie 900\n\
             101 4 450,00 1.800,00\n\
             Forma de pago: 30 días f/f\n\
             Incoterm: FCA Campana\n",
        );

        let parsed = OfferParser::new().parse(&document).unwrap();
        assert_eq!(parsed.offer.vendor, "MMA");
        assert_eq!(parsed.offer.items.len(), 1);
        assert_eq!(parsed.offer.items[0].description, "Brida WN serie 900");
        assert_eq!(
            parsed.offer.conditions.payment_terms.as_deref(),
            Some("30 días f/f")
        );
        assert_eq!(
            parsed.offer.conditions.incoterm.as_deref(),
            Some("FCA Campana")
        );
    }

    #[test]
    fn test_unparsable_document_signals_no_items() {
        let document = Document::new("carta.txt", "Estimados,\nadjuntamos la oferta.\n");
        let err = OfferParser::new().parse(&document).unwrap_err();

        assert!(matches!(err, ExtractionError::NoItems(name) if name == "carta.txt"));
    }

    #[test]
    fn test_missing_conditions_warns() {
        let document = Document::new("q.txt", "101 2 10,00 20,00\n");
        let parsed = OfferParser::new().parse(&document).unwrap();

        assert!(parsed.offer.conditions.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
    }
}
