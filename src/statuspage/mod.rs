//! StatusPage.io REST client and the slice of its data model the bot reads and writes.

mod client;
mod error;
mod model;
pub(crate) mod vocabulary;

pub(crate) use client::StatusPageClient;
pub(crate) use error::StatusPageError;
pub(crate) use model::{Component, ComponentStatus, Incident, IncidentStatus, IncidentUpdate, NewIncident};
