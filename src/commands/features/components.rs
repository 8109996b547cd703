use crate::config::StatusPageSettings;
use crate::statuspage::{Component, ComponentStatus, StatusPageClient};

use super::super::helpers::{
    broken_component_list, component_names, error_reply, talking_error_reply,
};
use super::super::reconcile::find_component;

pub(crate) async fn handle_overview(
    client: &StatusPageClient,
    settings: &StatusPageSettings,
) -> Vec<String> {
    match client.list_components().await {
        Ok(components) => overview_replies(&components, settings.show_working_components),
        Err(error) => vec![talking_error_reply(&error)],
    }
}

pub(crate) fn overview_replies(components: &[Component], show_working: bool) -> Vec<String> {
    let (working, broken): (Vec<&Component>, Vec<&Component>) = components
        .iter()
        .partition(|component| component.status.is_operational());

    let mut replies = Vec::new();
    if broken.is_empty() {
        replies.push("All systems operational!".to_string());
    } else {
        replies.push(format!(
            "There are currently {} components in a degraded state",
            broken.len()
        ));
        replies.push("Broken Components:\n-------------".to_string());
        replies.push(broken_component_list(&broken));
    }

    if show_working && !working.is_empty() {
        replies.push("Working Components:\n-------------".to_string());
        replies.push(
            working
                .iter()
                .map(|component| component.name.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    replies
}

pub(crate) async fn handle_component_status(client: &StatusPageClient, name: &str) -> Vec<String> {
    let components = match client.list_components().await {
        Ok(components) => components,
        Err(error) => return vec![talking_error_reply(&error)],
    };

    match find_component(&components, name) {
        Some(component) => vec![format!("Status of {}: {}", name, component.status)],
        None => vec![format!(
            "Sorry, the component \"{}\" doesn't exist. I know of these components: {}.",
            name,
            component_names(&components)
        )],
    }
}

/// Read components, resolve the name, then PATCH. An unknown name stops before any write.
pub(crate) async fn handle_set_component_status(
    client: &StatusPageClient,
    name: &str,
    status: ComponentStatus,
) -> Vec<String> {
    let components = match client.list_components().await {
        Ok(components) => components,
        Err(error) => return vec![talking_error_reply(&error)],
    };

    let Some(component) = find_component(&components, name) else {
        return vec![format!("Couldn't find a component named {}", name)];
    };

    match client.update_component(&component.id, status).await {
        Ok(()) => {
            log::info!(
                "component_status_changed component_id={} from={} to={}",
                component.id,
                component.status.as_wire(),
                status.as_wire()
            );
            vec![format!(
                "Status for {} is now {} (was: {})",
                name, status, component.status
            )]
        }
        Err(error) => vec![error_reply(
            &format!("Error setting the status for {}", name),
            &error,
        )],
    }
}
