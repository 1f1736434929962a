//! Per-document offer models: line items and commercial conditions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parsed offer line from a vendor quotation.
///
/// `line_total` is reported exactly as extracted and never recomputed from
/// `quantity * unit_price`: documents may carry non-multiplicative totals
/// (discounts, rounding) and a discrepancy is information, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product code, empty when unrecoverable from the line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,

    /// Product description, truncated to a bounded length.
    pub description: String,

    /// Quoted quantity.
    pub quantity: u32,

    /// Unit price in the document's (implicit) currency.
    pub unit_price: Decimal,

    /// Line total as printed on the document.
    pub line_total: Decimal,
}

/// The commercial condition keys recognized by the condition extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    PaymentTerms,
    DeliveryLeadTime,
    Incoterm,
    OfferValidity,
}

impl ConditionKind {
    /// All kinds, in rendering order.
    pub const ALL: [ConditionKind; 4] = [
        ConditionKind::PaymentTerms,
        ConditionKind::DeliveryLeadTime,
        ConditionKind::Incoterm,
        ConditionKind::OfferValidity,
    ];

    /// Display label for tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionKind::PaymentTerms => "Forma de pago",
            ConditionKind::DeliveryLeadTime => "Plazo de entrega",
            ConditionKind::Incoterm => "Incoterm",
            ConditionKind::OfferValidity => "Validez de la oferta",
        }
    }
}

/// Sparse mapping of commercial terms extracted from a document.
///
/// A field is `None` when no trigger phrase fired for it; extraction never
/// synthesizes a placeholder value, so downstream rendering can tell
/// "not found" apart from "found but empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Payment terms (e.g. "30 días f/f").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,

    /// Delivery lead time (e.g. "5 a 15 semanas").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_lead_time: Option<String>,

    /// Incoterm as free text, not validated against the standard list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoterm: Option<String>,

    /// Offer validity span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_validity: Option<String>,
}

impl Conditions {
    /// Get the value for a condition kind, if one was extracted.
    pub fn get(&self, kind: ConditionKind) -> Option<&str> {
        match kind {
            ConditionKind::PaymentTerms => self.payment_terms.as_deref(),
            ConditionKind::DeliveryLeadTime => self.delivery_lead_time.as_deref(),
            ConditionKind::Incoterm => self.incoterm.as_deref(),
            ConditionKind::OfferValidity => self.offer_validity.as_deref(),
        }
    }

    /// Set the value for a condition kind, keeping an existing value.
    pub fn set_if_absent(&mut self, kind: ConditionKind, value: impl Into<String>) {
        let slot = match kind {
            ConditionKind::PaymentTerms => &mut self.payment_terms,
            ConditionKind::DeliveryLeadTime => &mut self.delivery_lead_time,
            ConditionKind::Incoterm => &mut self.incoterm,
            ConditionKind::OfferValidity => &mut self.offer_validity,
        };
        if slot.is_none() {
            *slot = Some(value.into());
        }
    }

    /// Check whether no condition was extracted at all.
    pub fn is_empty(&self) -> bool {
        ConditionKind::ALL.iter().all(|k| self.get(*k).is_none())
    }
}

/// Everything extracted from one document: vendor label, items, conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOffer {
    /// Human-readable vendor label.
    pub vendor: String,

    /// Name of the source document.
    pub source: String,

    /// Line items in encounter order, no deduplication.
    pub items: Vec<LineItem>,

    /// Extracted commercial conditions.
    pub conditions: Conditions,
}
