//! CLI subcommands.

pub mod compare;
pub mod extract;

use std::fs;
use std::path::Path;

use tracing::debug;

use cotejo_core::Document;

/// Read one quotation document into pipeline input.
///
/// PDFs go through text-layer extraction; anything else is read as UTF-8
/// text. The core only ever sees `(name, text)`.
pub fn read_document(path: &Path) -> anyhow::Result<Document> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| anyhow::anyhow!("failed to extract text from {}: {e}", path.display()))?,
        _ => fs::read_to_string(path)?,
    };

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("documento")
        .to_string();

    debug!("read {} ({} characters)", name, text.len());

    Ok(Document::new(name, text))
}
