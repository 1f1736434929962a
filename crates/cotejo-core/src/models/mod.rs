//! Data models for documents, offers and the comparison table.

pub mod document;
pub mod offer;
pub mod comparison;
