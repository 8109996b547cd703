use crate::app_context::AppContext;

use super::features::{
    components::{handle_component_status, handle_overview, handle_set_component_status},
    help::handle_help,
    incidents::{handle_list_incidents, handle_open_incident, handle_update_incident},
};
use super::intent::Intent;

/// Runs one parsed command against the status page and returns the replies in send order.
pub(super) async fn route_intent(intent: &Intent, app_context: &AppContext) -> Vec<String> {
    let client = &app_context.client;
    let settings = &app_context.config.status_page;

    match intent {
        Intent::Help => handle_help(),
        Intent::ListIncidents => handle_list_incidents(client).await,
        Intent::UpdateIncident {
            target,
            status,
            message,
        } => handle_update_incident(client, settings, target, *status, message).await,
        Intent::OpenIncident {
            status,
            name,
            message,
        } => handle_open_incident(client, settings, *status, name, message.as_deref()).await,
        Intent::Overview => handle_overview(client, settings).await,
        Intent::ComponentStatus { name } => handle_component_status(client, name).await,
        Intent::SetComponentStatus { name, status } => {
            handle_set_component_status(client, name, *status).await
        }
    }
}
