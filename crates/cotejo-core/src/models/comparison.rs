//! Reconciled comparison table models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::offer::Conditions;

/// Identity of one reconciled product across vendors.
///
/// Two line items from different documents are the same product iff their
/// codes are equal and non-empty, or, when either code is empty, their
/// normalized descriptions are equal. Cross-vendor code schemes are not
/// unified: two vendors using different internal codes for the same
/// physical product produce two rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductKey {
    /// Product code of the first-seen item, if it had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Description of the first-seen item, as extracted.
    pub description: String,
}

/// One vendor's quote for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferCell {
    /// Quoted quantity.
    pub quantity: u32,

    /// Unit price, the value ranked for the best-price flag.
    pub unit_price: Decimal,

    /// Line total as printed on the source document.
    pub line_total: Decimal,

    /// Delivery info carried over from the vendor's conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<String>,

    /// Whether this unit price is the row minimum (ties all flagged).
    pub is_best_price: bool,
}

/// One reconciled product with at most one cell per known vendor.
///
/// A missing cell means the vendor did not quote the product; it is never
/// represented as a zero-valued cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Product identity for this row.
    pub key: ProductKey,

    /// Vendor label -> quote. Vendor ordering lives on the table.
    pub cells: BTreeMap<String, OfferCell>,
}

impl ComparisonRow {
    /// Get a vendor's cell, if the vendor quoted this product.
    pub fn cell(&self, vendor: &str) -> Option<&OfferCell> {
        self.cells.get(vendor)
    }
}

/// The full cross-vendor comparison, rebuilt on every run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Vendor labels in first-seen order.
    pub vendors: Vec<String>,

    /// Rows in first-seen product order.
    pub rows: Vec<ComparisonRow>,
}

/// Total quoted cost for one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummary {
    pub vendor: String,

    /// Sum of line totals over all rows the vendor quoted.
    pub total_cost: Decimal,
}

/// Conditions of one vendor, for the conditions table output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorConditions {
    pub vendor: String,
    pub conditions: Conditions,
}

/// Audit trail of what a pipeline run skipped and why.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Documents that yielded no line items, excluded from the comparison.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unparsed_documents: Vec<String>,

    /// Money-bearing lines that were not recognized as item lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<String>,

    /// Run-level warnings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Complete output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    /// The reconciled comparison table.
    pub table: ComparisonTable,

    /// Per-vendor totals, ascending; vendors with no items excluded.
    pub summaries: Vec<VendorSummary>,

    /// The lowest-total vendor, when any vendor was ranked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_vendor: Option<String>,

    /// Vendor -> conditions, in vendor first-seen order.
    pub conditions: Vec<VendorConditions>,

    /// What was skipped during the run.
    pub report: RunReport,
}
