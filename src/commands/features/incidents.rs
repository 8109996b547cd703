use crate::config::StatusPageSettings;
use crate::statuspage::{IncidentStatus, IncidentUpdate, NewIncident, StatusPageClient};

use super::super::helpers::{error_reply, incident_list, talking_error_reply};
use super::super::intent::IncidentTarget;
use super::super::reconcile::{select_update_target, unresolved_incidents, updatable_incidents};

pub(crate) const NO_UNRESOLVED_INCIDENTS: &str = "Sorry, there are no unresolved incidents.";

pub(crate) async fn handle_list_incidents(client: &StatusPageClient) -> Vec<String> {
    let incidents = match client.list_incidents().await {
        Ok(incidents) => incidents,
        Err(error) => return vec![talking_error_reply(&error)],
    };

    let unresolved = unresolved_incidents(&incidents);
    if unresolved.is_empty() {
        return vec!["All clear, no unresolved incidents!".to_string()];
    }

    vec![
        "Unresolved incidents:".to_string(),
        incident_list(&unresolved),
    ]
}

/// Read the incident list, pick the target, then PATCH it. Nothing is written
/// unless the target is found among incidents that accept updates.
pub(crate) async fn handle_update_incident(
    client: &StatusPageClient,
    settings: &StatusPageSettings,
    target: &IncidentTarget,
    status: IncidentStatus,
    message: &str,
) -> Vec<String> {
    let incidents = match client.list_incidents().await {
        Ok(incidents) => incidents,
        Err(error) => return vec![talking_error_reply(&error)],
    };

    let candidates = updatable_incidents(&incidents);
    if candidates.is_empty() {
        return vec![NO_UNRESOLVED_INCIDENTS.to_string()];
    }

    let Some(incident) = select_update_target(&candidates, target) else {
        let IncidentTarget::Id(id) = target else {
            return vec![NO_UNRESOLVED_INCIDENTS.to_string()];
        };
        log::info!("incident_update_skipped reason=not_updatable incident_id={}", id);
        return vec![format!(
            "Sorry, I couldn't find an unresolved incident with ID {}.",
            id
        )];
    };

    let update = IncidentUpdate {
        status,
        message,
        wants_twitter_update: settings.twitter_updates,
    };
    match client.update_incident(&incident.id, update).await {
        Ok(()) => {
            log::info!(
                "incident_updated incident_id={} status={}",
                incident.id,
                status.as_wire()
            );
            vec![format!("Updated incident \"{}\"", incident.name)]
        }
        Err(error) => vec![error_reply(
            &format!("Error updating incident {}", incident.name),
            &error,
        )],
    }
}

pub(crate) async fn handle_open_incident(
    client: &StatusPageClient,
    settings: &StatusPageSettings,
    status: IncidentStatus,
    name: &str,
    message: Option<&str>,
) -> Vec<String> {
    let incident = NewIncident {
        status,
        name,
        message,
        wants_twitter_update: settings.twitter_updates,
    };
    match client.create_incident(incident).await {
        Ok(()) => {
            log::info!("incident_created status={} name={:?}", status.as_wire(), name);
            vec![format!("Created incident \"{}\"", name)]
        }
        Err(error) => vec![error_reply(
            &format!("Error creating incident \"{}\"", name),
            &error,
        )],
    }
}
