//! Vendor identification.

use std::path::Path;

use super::patterns::VENDOR_LABEL;

/// Label used when neither the text nor the filename identifies a vendor.
pub const UNKNOWN_VENDOR: &str = "Proveedor desconocido";

/// Substrings that identify a known vendor, with the canonical label.
const KNOWN_VENDORS: &[(&str, &str)] = &[
    ("Cameron", "Cameron"),
    ("APERNIGOTTI", "MMA"),
    ("Pernigotti", "MMA"),
    ("MMA", "MMA"),
];

/// Resolve a vendor label for a document.
///
/// Resolution is total and deterministic: a labeled "Proveedor:" line wins,
/// then a known-vendor substring, then the document's filename without
/// extension, then the unknown-vendor literal.
pub fn identify_vendor(text: &str, document_name: Option<&str>) -> String {
    if let Some(caps) = VENDOR_LABEL.captures(text) {
        return caps[1].trim().to_string();
    }

    for (needle, canonical) in KNOWN_VENDORS {
        if text.contains(needle) {
            return (*canonical).to_string();
        }
    }

    if let Some(name) = document_name {
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        if !stem.is_empty() {
            return stem.to_string();
        }
    }

    UNKNOWN_VENDOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_line_wins_over_known_substring() {
        let text = "Proveedor: Acme S.A.\nOferta basada en listado Cameron\n";
        assert_eq!(identify_vendor(text, Some("oferta.pdf")), "Acme S.A.");
    }

    #[test]
    fn test_known_substring_maps_to_canonical_name() {
        assert_eq!(identify_vendor("Presupuesto APERNIGOTTI 2024", None), "MMA");
        assert_eq!(identify_vendor("Cameron Flow Control", None), "Cameron");
    }

    #[test]
    fn test_filename_fallback_strips_extension() {
        assert_eq!(
            identify_vendor("sin marcas de proveedor", Some("oferta_acme.pdf")),
            "oferta_acme"
        );
    }

    #[test]
    fn test_unknown_vendor_literal() {
        assert_eq!(identify_vendor("sin marcas", None), UNKNOWN_VENDOR);
        assert_eq!(identify_vendor("sin marcas", Some("")), UNKNOWN_VENDOR);
    }
}
