//! Status phrase normalization between chat input, API wire form and display form.

use super::model::ComponentStatus;

/// Component status phrases accepted from chat, longest first so that
/// `major outage` wins over `major` when matching a suffix.
pub(crate) const COMPONENT_STATUS_PHRASES: [&str; 7] = [
    "degraded performance",
    "partial outage",
    "major outage",
    "operational",
    "degraded",
    "partial",
    "major",
];

const SHORTHANDS: [(&str, &str); 3] = [
    ("degraded", "degraded performance"),
    ("major", "major outage"),
    ("partial", "partial outage"),
];

/// `degraded` -> `degraded performance`; full phrases pass through lowercased.
pub(crate) fn expand_shorthand(phrase: &str) -> String {
    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    SHORTHANDS
        .iter()
        .find(|(short, _)| *short == normalized)
        .map(|(_, full)| full.to_string())
        .unwrap_or(normalized)
}

pub(crate) fn to_wire(phrase: &str) -> String {
    phrase.trim().replace(' ', "_")
}

pub(crate) fn to_display(wire: &str) -> String {
    wire.replace('_', " ")
}

pub(crate) fn component_status_from_phrase(phrase: &str) -> Option<ComponentStatus> {
    ComponentStatus::from_wire(&to_wire(&expand_shorthand(phrase)))
}
