use crate::statuspage::{ComponentStatus, IncidentStatus};

/// One recognised chat command, fully parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Intent {
    Help,
    ListIncidents,
    UpdateIncident {
        target: IncidentTarget,
        status: IncidentStatus,
        message: String,
    },
    OpenIncident {
        status: IncidentStatus,
        name: String,
        message: Option<String>,
    },
    Overview,
    ComponentStatus {
        name: String,
    },
    SetComponentStatus {
        name: String,
        status: ComponentStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IncidentTarget {
    MostRecent,
    Id(String),
}
