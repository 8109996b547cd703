use std::path::Path;

use super::{defaults::DEFAULT_CONFIG_PATH, schema::Config, validate::ConfigError};

pub const CONFIG_PATH_ENV: &str = "STATUSPAGE_BOT_CONFIG";

const BOT_TOKEN_ENV: &str = "STATUSPAGE_BOT_TOKEN";
const PAGE_ID_ENV: &str = "STATUSPAGE_PAGE_ID";
const API_TOKEN_ENV: &str = "STATUSPAGE_TOKEN";
const API_BASE_URL_ENV: &str = "STATUSPAGE_API_BASE_URL";
const TWITTER_ENABLED_ENV: &str = "STATUSPAGE_TWITTER_ENABLED";
const SHOW_WORKING_ENV: &str = "STATUSPAGE_SHOW_WORKING";

pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

pub(super) fn load_config_with_env(
    path: impl AsRef<Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_str.clone(),
        source,
    })?;
    let mut config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })?;
    apply_env_overrides(&mut config, lookup)?;
    config.validate()?;
    Ok(config)
}

/// Environment values win over the file. Empty values are ignored.
pub(super) fn apply_env_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(value) = lookup(BOT_TOKEN_ENV) {
        config.bot_token = value;
    }
    if let Some(value) = lookup(PAGE_ID_ENV) {
        config.status_page.page_id = value;
    }
    if let Some(value) = lookup(API_TOKEN_ENV) {
        config.status_page.api_token = value;
    }
    if let Some(value) = lookup(API_BASE_URL_ENV) {
        config.status_page.api_base_url = value;
    }
    if let Some(value) = lookup(TWITTER_ENABLED_ENV) {
        config.status_page.twitter_updates = parse_toggle(TWITTER_ENABLED_ENV, &value)?;
    }
    if let Some(value) = lookup(SHOW_WORKING_ENV) {
        config.status_page.show_working_components = parse_toggle(SHOW_WORKING_ENV, &value)?;
    }
    Ok(())
}

fn parse_toggle(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Validation(format!(
            "{} must be a boolean toggle (1/0, true/false, yes/no, on/off), got '{}'",
            key, other
        ))),
    }
}
