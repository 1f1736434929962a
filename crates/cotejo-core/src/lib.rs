//! Core library for vendor quotation comparison.
//!
//! This crate provides:
//! - locale-ambiguous numeric token parsing
//! - line item and commercial condition extraction from quotation text
//! - vendor identification
//! - reconciliation of per-vendor offers into a single comparison table
//!   with best-price annotations

pub mod error;
pub mod models;
pub mod offer;
pub mod compare;
pub mod pipeline;

pub use error::{ExtractionError, Result};
pub use models::comparison::{
    ComparisonOutcome, ComparisonRow, ComparisonTable, OfferCell, ProductKey, RunReport,
    VendorConditions, VendorSummary,
};
pub use models::document::Document;
pub use models::offer::{ConditionKind, Conditions, DocumentOffer, LineItem};
pub use offer::{OfferParser, ParsedOffer, QuoteParser};
pub use pipeline::compare_documents;
