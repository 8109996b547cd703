use crate::config::Config;
use crate::statuspage::{StatusPageClient, StatusPageError};

/// Built once at startup and shared read-only by every command.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub(crate) client: StatusPageClient,
}

impl AppContext {
    pub(crate) fn new(config: Config) -> Result<Self, StatusPageError> {
        let client = StatusPageClient::new(&config.status_page, config.request_timeout_secs)?;
        Ok(Self { config, client })
    }
}
