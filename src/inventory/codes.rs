use std::collections::HashSet;

use crate::models::user::InventoryEntry;

/// Rewrite a legacy "OFF"-prefixed card code to the current "OOF"
/// prefix. Codes already in the current form pass through unchanged,
/// so applying this twice is the same as applying it once.
pub fn normalize_code(code: &str) -> String {
    match code.strip_prefix("OFF") {
        Some(rest) => format!("OOF{rest}"),
        None => code.to_string(),
    }
}

/// Rewrite a current "OOF"-prefixed code back to the legacy "OFF"
/// prefix. Display-only; nothing stored or compared uses this form.
pub fn legacy_code(code: &str) -> String {
    match code.strip_prefix("OOF") {
        Some(rest) => format!("OFF{rest}"),
        None => code.to_string(),
    }
}

/// Distinct normalized codes across an inventory. Duplicate copies of
/// a card collapse to one entry.
pub fn owned_codes(entries: &[InventoryEntry]) -> HashSet<String> {
    entries
        .iter()
        .map(|entry| normalize_code(entry.code()))
        .collect()
}
