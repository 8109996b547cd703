mod auth;
mod formatting;

pub(super) use auth::is_authorized;
pub(super) use formatting::{
    broken_component_list, component_names, error_reply, incident_list, talking_error_reply,
    truncate_for_telegram,
};
