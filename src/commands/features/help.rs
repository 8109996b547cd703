const HELP_TEXT: &str = "Available commands:
status? - Display an overall status of all components
status <component>? - Display the status of a single component
status <component> (degraded performance|partial outage|major outage|operational) - Set the status for a component. degraded, partial and major work as shortcuts.
status incidents - Show all unresolved incidents
status open (investigating|identified|monitoring|resolved) <name>: <message> - Create a new incident with the given status. The message can be omitted.
status update (investigating|identified|monitoring|resolved) <message> - Update the latest open incident.
status update <incidentId> (investigating|identified|monitoring|resolved) <message> - Update a specific open incident.
status help - Show this message";

pub(crate) fn handle_help() -> Vec<String> {
    vec![HELP_TEXT.to_string()]
}
