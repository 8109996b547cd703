use teloxide::types::{ChatId, UserId};
use thiserror::Error;

use super::schema::Config;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bot_token must not be empty".to_string(),
            ));
        }
        if self.owner_id == 0 {
            return Err(ConfigError::Validation(
                "owner_id must be a positive integer".to_string(),
            ));
        }
        if self.owner_id > i64::MAX as u64 {
            return Err(ConfigError::Validation(
                "owner_id exceeds Telegram ChatId range (i64::MAX)".to_string(),
            ));
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ConfigError::Validation(format!(
                "request_timeout_secs must be between 1 and {}",
                MAX_REQUEST_TIMEOUT_SECS
            )));
        }

        let status_page = &self.status_page;
        if status_page.page_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "status_page.page_id must not be empty".to_string(),
            ));
        }
        if status_page.page_id.contains('/') {
            return Err(ConfigError::Validation(
                "status_page.page_id must not contain '/'".to_string(),
            ));
        }
        if status_page.api_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "status_page.api_token must not be empty".to_string(),
            ));
        }
        let base_url = status_page.api_base_url.trim();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "status_page.api_base_url must start with http:// or https://".to_string(),
            ));
        }
        Ok(())
    }

    pub fn owner_chat_id(&self) -> Result<ChatId, ConfigError> {
        if self.owner_id == 0 {
            return Err(ConfigError::Validation(
                "owner_id must be a positive integer".to_string(),
            ));
        }

        let chat_id = i64::try_from(self.owner_id).map_err(|_| {
            ConfigError::Validation("owner_id is too large to fit Telegram chat id".to_string())
        })?;
        Ok(ChatId(chat_id))
    }

    pub fn owner_user_id(&self) -> Result<UserId, ConfigError> {
        if self.owner_id == 0 {
            return Err(ConfigError::Validation(
                "owner_id must be a positive integer".to_string(),
            ));
        }

        Ok(UserId(self.owner_id))
    }
}
