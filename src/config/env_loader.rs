use crate::config::model::{Config, DEFAULT_REQUEST_TIMEOUT};
use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config '{0}'. Expected an absolute URL, got '{1}'")]
    InvalidUrl(&'static str, String),
    #[error("Invalid config '{0}'. Expected a positive integer number, got '{1}'")]
    InvalidNumber(&'static str, String),
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|name| env::var(name).ok())
}

/// Builds the config from any variable source; unset and blank values count as absent.
pub fn load_config_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    Ok(Config {
        backend_url: load_url_config("BACKEND_URL", lookup("BACKEND_URL"))?,
        form_capture_url: load_url_config("FORM_CAPTURE_URL", lookup("FORM_CAPTURE_URL"))?,
        request_timeout: load_secs_config("REQUEST_TIMEOUT_SECS", lookup("REQUEST_TIMEOUT_SECS"))?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        loki_url: load_url_config("LOKI_URL", lookup("LOKI_URL"))?,
    })
}

fn load_url_config(name: &'static str, value: Option<String>) -> Result<Option<Url>, ConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<Url>()
                .map_err(|_| ConfigError::InvalidUrl(name, value.clone()))
        })
        .transpose()
}

fn load_secs_config(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<Duration>, ConfigError> {
    match value {
        Some(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
            _ => Err(ConfigError::InvalidNumber(name, value)),
        },
        None => Ok(None),
    }
}
