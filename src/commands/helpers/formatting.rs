use crate::statuspage::{Component, Incident, StatusPageError};

pub(crate) const SERVICE_NAME: &str = "StatusPage.io";

const TELEGRAM_TEXT_SAFE_LIMIT: usize = 3900;
const TRUNCATE_NOTICE: &str = "\n\n⚠️ (Output was truncated...)";

pub(crate) fn incident_line(incident: &Incident) -> String {
    format!(
        "{} (Status: {}, Created: {}, ID: {})",
        incident.name,
        incident.status,
        incident.created_at_display(),
        incident.id
    )
}

pub(crate) fn incident_list(incidents: &[&Incident]) -> String {
    incidents
        .iter()
        .map(|incident| incident_line(incident))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn broken_component_list(components: &[&Component]) -> String {
    components
        .iter()
        .map(|component| format!("{}: {}", component.name, component.status))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn component_names(components: &[Component]) -> String {
    components
        .iter()
        .map(|component| component.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<context>: <detail>`, with remote messages passed through verbatim.
pub(crate) fn error_reply(context: &str, error: &StatusPageError) -> String {
    match error {
        StatusPageError::Timeout(secs) => {
            format!("{}: {} did not answer within {}s", context, SERVICE_NAME, secs)
        }
        _ => format!("{}: {}", context, error),
    }
}

pub(crate) fn talking_error_reply(error: &StatusPageError) -> String {
    error_reply(&format!("Error talking to {}", SERVICE_NAME), error)
}

pub(crate) fn truncate_for_telegram(text: &str) -> String {
    if text.len() <= TELEGRAM_TEXT_SAFE_LIMIT {
        return text.to_string();
    }

    let budget = TELEGRAM_TEXT_SAFE_LIMIT.saturating_sub(TRUNCATE_NOTICE.len());
    let mut truncated = truncate_to_char_boundary(text, budget).to_string();
    truncated.push_str(TRUNCATE_NOTICE);
    truncated
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> &str {
    if input.len() <= max_bytes {
        return input;
    }

    let mut end = max_bytes;
    while !input.is_char_boundary(end) {
        end -= 1;
    }

    &input[..end]
}
