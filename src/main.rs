mod app_context;
mod commands;
mod config;
mod statuspage;

use teloxide::prelude::*;
use tokio::net::lookup_host;
use tracing_subscriber::EnvFilter;

use crate::app_context::AppContext;
use crate::commands::answer;
use crate::config::{config_path, load_config, Config};

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

/// Host and port the API base URL resolves against; the port falls back to
/// the scheme default.
fn probe_target(base_url: &str) -> Option<(String, u16)> {
    let url = reqwest::Url::parse(base_url.trim()).ok()?;
    let host = url.host_str().filter(|host| !host.is_empty())?;
    let port = url.port_or_known_default()?;
    Some((host.to_string(), port))
}

async fn log_dns_probe(config: &Config) {
    let Some((host, port)) = probe_target(&config.status_page.api_base_url) else {
        log::warn!(
            "dns_probe_skipped reason=unparsable_base_url url={}",
            config.status_page.api_base_url
        );
        return;
    };

    match lookup_host((host.as_str(), port)).await {
        Ok(mut addresses) => {
            if let Some(address) = addresses.next() {
                log::info!("dns_probe_ok host={} port={} address={}", host, port, address);
            } else {
                log::warn!("dns_probe_degraded host={} port={} reason=no_records", host, port);
            }
        }
        Err(error) => {
            log::warn!(
                "dns_probe_degraded host={} port={} reason=lookup_failed error={}",
                host,
                port,
                error
            );
        }
    };
}

// Main
#[tokio::main]
async fn main() {
    init_json_logging();

    let path = config_path();
    let config: Config = match load_config(&path) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return;
        }
    };

    log::info!(
        "StatusPage bot is starting... page_id={} twitter_updates={} show_working_components={}",
        config.status_page.page_id,
        config.status_page.twitter_updates,
        config.status_page.show_working_components
    );
    log_dns_probe(&config).await;

    let bot = Bot::new(&config.bot_token);
    let app_context = match AppContext::new(config) {
        Ok(app_context) => app_context,
        Err(error) => {
            log::error!("StatusPage client setup failed: code={} error={}", error.code(), error);
            return;
        }
    };

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let app_context = app_context.clone();
        async move { answer(bot, msg, &app_context).await }
    })
    .await;
}
