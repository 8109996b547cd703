//! Matches user arguments back to the objects the API returned.

use crate::statuspage::{Component, Incident};

use super::intent::IncidentTarget;

pub(crate) fn unresolved_incidents(incidents: &[Incident]) -> Vec<&Incident> {
    incidents
        .iter()
        .filter(|incident| incident.is_unresolved())
        .collect()
}

/// Candidates in API order, newest first.
pub(crate) fn updatable_incidents(incidents: &[Incident]) -> Vec<&Incident> {
    incidents
        .iter()
        .filter(|incident| incident.accepts_updates())
        .collect()
}

pub(crate) fn select_update_target<'a>(
    candidates: &[&'a Incident],
    target: &IncidentTarget,
) -> Option<&'a Incident> {
    match target {
        IncidentTarget::MostRecent => candidates.first().copied(),
        IncidentTarget::Id(id) => candidates
            .iter()
            .copied()
            .find(|incident| incident.id == *id),
    }
}

/// Exact, case-sensitive name match.
pub(crate) fn find_component<'a>(components: &'a [Component], name: &str) -> Option<&'a Component> {
    components.iter().find(|component| component.name == name)
}
