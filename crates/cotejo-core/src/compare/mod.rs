//! Reconciliation of per-document offers into one comparison table.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::comparison::{
    ComparisonRow, ComparisonTable, OfferCell, ProductKey, VendorSummary,
};
use crate::models::offer::{DocumentOffer, LineItem};

/// Normalize a description for product-identity matching: lowercased,
/// whitespace-collapsed.
pub fn normalize_description(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Row under construction, keeping the normalized key out of the output.
struct RowBuilder {
    key: ProductKey,
    normalized: String,
    cells: BTreeMap<String, OfferCell>,
}

impl RowBuilder {
    fn matches(&self, code: Option<&str>, normalized: &str) -> bool {
        match (self.key.code.as_deref(), code) {
            (Some(a), Some(b)) => a == b,
            // Either side has no code: fall back to description identity.
            _ => self.normalized == normalized,
        }
    }
}

fn item_code(item: &LineItem) -> Option<&str> {
    if item.code.is_empty() {
        None
    } else {
        Some(&item.code)
    }
}

/// Merge all offers into one table, in upload order.
///
/// Rows preserve first-seen product order, vendors first-seen label order.
/// When a vendor quotes the same product more than once, the first quote
/// wins. After all cells are attached, every cell whose unit price equals
/// the row minimum is flagged as best price (exact decimal equality, so
/// ties are all flagged).
pub fn reconcile(offers: &[DocumentOffer]) -> ComparisonTable {
    let mut vendors: Vec<String> = Vec::new();
    for offer in offers {
        if !vendors.iter().any(|v| v == &offer.vendor) {
            vendors.push(offer.vendor.clone());
        }
    }

    let mut rows: Vec<RowBuilder> = Vec::new();

    for offer in offers {
        let delivery_info = offer.conditions.delivery_lead_time.clone();

        for item in &offer.items {
            let code = item_code(item);
            let normalized = normalize_description(&item.description);

            let row = match rows.iter().position(|r| r.matches(code, &normalized)) {
                Some(index) => &mut rows[index],
                None => {
                    rows.push(RowBuilder {
                        key: ProductKey {
                            code: code.map(str::to_string),
                            description: item.description.clone(),
                        },
                        normalized,
                        cells: BTreeMap::new(),
                    });
                    rows.last_mut().unwrap()
                }
            };

            row.cells
                .entry(offer.vendor.clone())
                .or_insert_with(|| OfferCell {
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    line_total: item.line_total,
                    delivery_info: delivery_info.clone(),
                    is_best_price: false,
                });
        }
    }

    let mut rows: Vec<ComparisonRow> = rows
        .into_iter()
        .map(|r| ComparisonRow {
            key: r.key,
            cells: r.cells,
        })
        .collect();

    for row in &mut rows {
        let min = row.cells.values().map(|c| c.unit_price).min();
        if let Some(min) = min {
            for cell in row.cells.values_mut() {
                cell.is_best_price = cell.unit_price == min;
            }
        }
    }

    debug!(
        "reconciled {} rows across {} vendors",
        rows.len(),
        vendors.len()
    );

    ComparisonTable { vendors, rows }
}

/// Rank vendors by the sum of their line totals over the table.
///
/// Vendors with no cells are excluded from the ranking rather than treated
/// as zero-cost winners. The sort is stable, so equal totals keep the
/// first-seen vendor order.
pub fn summarize(table: &ComparisonTable) -> Vec<VendorSummary> {
    let mut summaries: Vec<VendorSummary> = Vec::new();

    for vendor in &table.vendors {
        let cells: Vec<&OfferCell> = table
            .rows
            .iter()
            .filter_map(|r| r.cell(vendor))
            .collect();
        if cells.is_empty() {
            continue;
        }
        summaries.push(VendorSummary {
            vendor: vendor.clone(),
            total_cost: cells.iter().map(|c| c.line_total).sum(),
        });
    }

    summaries.sort_by(|a, b| a.total_cost.cmp(&b.total_cost));
    summaries
}
