use super::schema::StatusPageSettings;

pub(super) const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub(super) fn default_request_timeout_secs() -> u64 {
    15
}

pub(super) fn default_api_base_url() -> String {
    "https://api.statuspage.io/v1".to_string()
}

impl Default for StatusPageSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_id: String::new(),
            api_token: String::new(),
            twitter_updates: false,
            show_working_components: false,
        }
    }
}
