//! Commercial condition extraction via keyword probes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::offer::{ConditionKind, Conditions};

/// One trigger probe: a pattern mapped to the condition key it fills.
struct Probe {
    kind: ConditionKind,
    pattern: Regex,
}

impl Probe {
    fn new(kind: ConditionKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

lazy_static! {
    // Probes run in declared priority order; the first match per key wins.
    // Labeled phrases capture trailing free text up to the line break;
    // bare keyword spans use the matched span itself as the value.
    static ref PROBES: Vec<Probe> = vec![
        Probe::new(ConditionKind::PaymentTerms, r"(?i)forma de pago\s*:?\s*(\S[^\r\n]*)"),
        Probe::new(ConditionKind::PaymentTerms, r"(?i)(?:condiciones de pago|payment terms)\s*:?\s*(\S[^\r\n]*)"),
        Probe::new(ConditionKind::PaymentTerms, r"(?i)\bnet\s*30\b"),
        Probe::new(ConditionKind::PaymentTerms, r"(?i)\b30 d[ií]as\b"),
        Probe::new(ConditionKind::PaymentTerms, r"(?i)\b15 d[ií]as\b"),
        Probe::new(ConditionKind::DeliveryLeadTime, r"(?i)plazo de entrega\s*:?\s*(\S[^\r\n]*)"),
        Probe::new(ConditionKind::DeliveryLeadTime, r"(?i)(?:delivery time|lead time)\s*:?\s*(\S[^\r\n]*)"),
        Probe::new(ConditionKind::DeliveryLeadTime, r"(?i)\b\d{1,3}\s*a\s*\d{1,3}\s*semanas\b"),
        Probe::new(ConditionKind::DeliveryLeadTime, r"(?i)\b\d{1,3}\s*semanas\b"),
        Probe::new(ConditionKind::DeliveryLeadTime, r"(?i)\b45 d[ií]as\b"),
        Probe::new(ConditionKind::Incoterm, r"(?i)incoterms?\s*:?\s*(\S[^\r\n]*)"),
        Probe::new(ConditionKind::Incoterm, r"\b(?:FCA|FOB|CIF|CFR|EXW|DDP|DAP)\b"),
        Probe::new(ConditionKind::OfferValidity, r"(?i)validez(?: de la oferta)?\s*:?\s*(\S[^\r\n]*)"),
        Probe::new(ConditionKind::OfferValidity, r"(?i)(?:v[aá]lido hasta|valid to|valid until)\s*:?\s*(\S[^\r\n]*)"),
    ];
}

/// Probe a document's full text for commercial conditions.
///
/// Keys with no firing trigger stay absent; extraction never fills in a
/// placeholder value.
pub fn extract_conditions(text: &str) -> Conditions {
    let mut conditions = Conditions::default();

    for probe in PROBES.iter() {
        if conditions.get(probe.kind).is_some() {
            continue;
        }
        if let Some(caps) = probe.pattern.captures(text) {
            let value = caps
                .get(1)
                .unwrap_or_else(|| caps.get(0).unwrap())
                .as_str()
                .trim();
            if !value.is_empty() {
                conditions.set_if_absent(probe.kind, value);
            }
        }
    }

    conditions
}
