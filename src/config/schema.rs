use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot_token: String,
    pub owner_id: u64,
    #[serde(default)]
    pub allowed_chat_ids: Vec<i64>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub status_page: StatusPageSettings,
}

/// Connection settings and feature toggles for the StatusPage.io page the bot manages.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPageSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub page_id: String,
    #[serde(default)]
    pub api_token: String,
    /// Sent as `wants_twitter_update` on every incident write.
    #[serde(default)]
    pub twitter_updates: bool,
    /// Also list healthy components in the overview reply.
    #[serde(default)]
    pub show_working_components: bool,
}
