use std::fmt;

use serde::{Deserialize, Serialize};

use super::vocabulary::to_display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ComponentStatus {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    UnderMaintenance,
    #[serde(other)]
    Unknown,
}

impl ComponentStatus {
    pub(crate) fn as_wire(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::DegradedPerformance => "degraded_performance",
            Self::PartialOutage => "partial_outage",
            Self::MajorOutage => "major_outage",
            Self::UnderMaintenance => "under_maintenance",
            Self::Unknown => "unknown",
        }
    }

    /// Only the four states an operator may set from chat.
    pub(crate) fn from_wire(wire: &str) -> Option<Self> {
        match wire {
            "operational" => Some(Self::Operational),
            "degraded_performance" => Some(Self::DegradedPerformance),
            "partial_outage" => Some(Self::PartialOutage),
            "major_outage" => Some(Self::MajorOutage),
            _ => None,
        }
    }

    pub(crate) fn is_operational(self) -> bool {
        self == Self::Operational
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_display(self.as_wire()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
    Postmortem,
    Completed,
    Scheduled,
    InProgress,
    Verifying,
    #[serde(other)]
    Unknown,
}

impl IncidentStatus {
    pub(crate) fn as_wire(self) -> &'static str {
        match self {
            Self::Investigating => "investigating",
            Self::Identified => "identified",
            Self::Monitoring => "monitoring",
            Self::Resolved => "resolved",
            Self::Postmortem => "postmortem",
            Self::Completed => "completed",
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Verifying => "verifying",
            Self::Unknown => "unknown",
        }
    }

    /// Lifecycle states accepted in `open` and `update` commands, case-insensitive.
    pub(crate) fn from_command_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "investigating" => Some(Self::Investigating),
            "identified" => Some(Self::Identified),
            "monitoring" => Some(Self::Monitoring),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_display(self.as_wire()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Component {
    pub id: String,
    pub name: String,
    pub status: ComponentStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Incident {
    pub id: String,
    pub name: String,
    pub status: IncidentStatus,
    /// Kept exactly as the API sent it; offsets and fractional seconds vary.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub backfilled: bool,
}

impl Incident {
    /// Listed as open: anything not resolved, postmortem or completed.
    pub(crate) fn is_unresolved(&self) -> bool {
        !matches!(
            self.status,
            IncidentStatus::Resolved | IncidentStatus::Postmortem | IncidentStatus::Completed
        )
    }

    /// Stricter than `is_unresolved`: scheduled maintenance and backfilled
    /// incidents cannot receive updates.
    pub(crate) fn accepts_updates(&self) -> bool {
        self.is_unresolved() && !self.backfilled && self.status != IncidentStatus::Scheduled
    }

    pub(crate) fn created_at_display(&self) -> &str {
        self.created_at.as_deref().unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct IncidentUpdate<'a> {
    pub status: IncidentStatus,
    pub message: &'a str,
    pub wants_twitter_update: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewIncident<'a> {
    pub status: IncidentStatus,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    pub wants_twitter_update: bool,
}
