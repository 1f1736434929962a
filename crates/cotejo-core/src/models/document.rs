//! Input document model.

use serde::{Deserialize, Serialize};

/// One uploaded quotation document.
///
/// The text has already been extracted from the source file by an external
/// collaborator (plain text read, PDF text layer, ...); the pipeline only
/// sees newline-delimited text. The name doubles as the vendor-label
/// fallback when the text itself carries no vendor marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Original file name of the document.
    pub name: String,

    /// Full extracted text, newline-delimited.
    pub raw_text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
        }
    }
}
