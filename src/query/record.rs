//! Raw value record parsing
//!
//! One raw query-string value is sniffed for a comparator marker before
//! coercion. The marker grammar is an `op.` prefix (`gte.18`, `like.ro`);
//! anything without a recognized prefix is an equality match on the whole
//! value, so plain values like `2024-01-15` or `3.14` pass through intact.

use super::types::Comparator;

/// Transient parse result of one raw parameter value: the comparator the
/// value's syntax selected plus the value with marker markup stripped.
/// Consumed by the predicate builder and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Value with comparator markup removed
    pub value: String,
    /// Comparator selected by the value's syntax
    pub comparator: Comparator,
}

impl RawRecord {
    /// Sniff one raw value for a comparator marker.
    pub fn parse(raw: &str) -> Self {
        if let Some(dot) = raw.find('.') {
            if let Some(comparator) = Comparator::from_marker(&raw[..dot]) {
                return Self {
                    value: raw[dot + 1..].to_string(),
                    comparator,
                };
            }
        }
        Self {
            value: raw.to_string(),
            comparator: Comparator::Eq,
        }
    }
}
