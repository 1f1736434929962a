//! Full extraction-and-reconciliation pipeline.

use tracing::{info, warn};

use crate::compare::{reconcile, summarize};
use crate::error::ExtractionError;
use crate::models::comparison::{ComparisonOutcome, RunReport, VendorConditions};
use crate::models::document::Document;
use crate::models::offer::DocumentOffer;
use crate::offer::{OfferParser, QuoteParser};

/// Run the whole pipeline over a set of documents, in upload order.
///
/// Extraction failures are isolated per document: an unparsable document
/// is recorded in the report and excluded from the comparison, and the run
/// continues. No failure here is fatal; a run where every document fails
/// produces an empty table plus a run-level warning.
pub fn compare_documents(documents: &[Document]) -> ComparisonOutcome {
    let parser = OfferParser::new();
    let mut offers: Vec<DocumentOffer> = Vec::new();
    let mut report = RunReport::default();

    for document in documents {
        match parser.parse(document) {
            Ok(parsed) => {
                report.skipped_lines.extend(
                    parsed
                        .skipped_lines
                        .iter()
                        .map(|line| format!("{}: {}", document.name, line)),
                );
                report.warnings.extend(parsed.warnings);
                offers.push(parsed.offer);
            }
            Err(ExtractionError::NoItems(name)) => {
                warn!("no line items extracted from {name}, excluding from comparison");
                report.unparsed_documents.push(name);
            }
            Err(err) => {
                warn!("failed to parse {}: {err}", document.name);
                report.unparsed_documents.push(document.name.clone());
            }
        }
    }

    if offers.is_empty() && !documents.is_empty() {
        report
            .warnings
            .push("no line items could be extracted from any document".to_string());
    }

    let table = reconcile(&offers);
    let summaries = summarize(&table);
    let recommended_vendor = summaries.first().map(|s| s.vendor.clone());

    // One conditions entry per vendor, first document wins per vendor.
    let mut conditions: Vec<VendorConditions> = Vec::new();
    for offer in &offers {
        if !conditions.iter().any(|c| c.vendor == offer.vendor) {
            conditions.push(VendorConditions {
                vendor: offer.vendor.clone(),
                conditions: offer.conditions.clone(),
            });
        }
    }

    info!(
        "compared {} documents: {} rows, {} vendors, {} unparsed",
        documents.len(),
        table.rows.len(),
        table.vendors.len(),
        report.unparsed_documents.len()
    );

    ComparisonOutcome {
        table,
        summaries,
        recommended_vendor,
        conditions,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn quote(name: &str, vendor: &str, unit: &str, total: &str) -> Document {
        Document::new(
            name,
            format!(
                "Proveedor: {vendor}\n\
                 \n\
                 Brida WN serie 900\n\
                 101 4 {unit} {total}\n\
                 Forma de pago: 30 días f/f\n"
            ),
        )
    }

    #[test]
    fn test_two_vendors_one_row_cheapest_flagged() {
        let documents = vec![
            quote("a.pdf", "Cameron", "100,00", "400,00"),
            quote("b.pdf", "MMA", "90,00", "360,00"),
        ];

        let outcome = compare_documents(&documents);
        assert_eq!(outcome.table.rows.len(), 1);

        let row = &outcome.table.rows[0];
        assert!(!row.cell("Cameron").unwrap().is_best_price);
        assert!(row.cell("MMA").unwrap().is_best_price);
        assert_eq!(outcome.recommended_vendor.as_deref(), Some("MMA"));
    }

    #[test]
    fn test_unparsable_document_reported_run_continues() {
        let documents = vec![
            Document::new("carta.txt", "sin items aqui\n"),
            quote("b.pdf", "MMA", "90,00", "360,00"),
        ];

        let outcome = compare_documents(&documents);
        assert_eq!(outcome.report.unparsed_documents, vec!["carta.txt"]);
        assert_eq!(outcome.table.vendors, vec!["MMA"]);
        assert_eq!(outcome.table.rows.len(), 1);
    }

    #[test]
    fn test_all_unparsable_warns_instead_of_failing() {
        let documents = vec![
            Document::new("a.txt", "nada\n"),
            Document::new("b.txt", "tampoco\n"),
        ];

        let outcome = compare_documents(&documents);
        assert!(outcome.table.rows.is_empty());
        assert_eq!(outcome.report.unparsed_documents.len(), 2);
        assert!(
            outcome
                .report
                .warnings
                .iter()
                .any(|w| w.contains("any document"))
        );
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let documents = vec![
            quote("a.pdf", "Cameron", "100,00", "400,00"),
            quote("b.pdf", "MMA", "90,00", "360,00"),
        ];

        let first = compare_documents(&documents);
        let second = compare_documents(&documents);

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_summary_totals() {
        let documents = vec![
            quote("a.pdf", "Cameron", "100,00", "400,00"),
            quote("b.pdf", "MMA", "90,00", "360,00"),
        ];

        let outcome = compare_documents(&documents);
        assert_eq!(outcome.summaries[0].vendor, "MMA");
        assert_eq!(
            outcome.summaries[0].total_cost,
            Decimal::from_str("360.00").unwrap()
        );
    }
}
