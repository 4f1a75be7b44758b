use std::env;

use chrono_tz::Tz;
use thiserror::Error;

pub const API_URL_VAR: &str = "LOTTERY_API_URL";
pub const TOKEN_VAR: &str = "LOTTERY_TOKEN";
pub const FILTER_VAR: &str = "LOTTERY_FILTER_GAME_ID";
pub const TIMEZONE_VAR: &str = "DASHBOARD_TZ";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} is not a valid game id: {value}")]
    InvalidGameId { var: &'static str, value: String },
    #[error("{var} is not a known timezone: {value}")]
    InvalidTimezone { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub token: String,
    pub filter_game_id: Option<i64>,
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_url = get(API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .ok_or(ConfigError::Missing(API_URL_VAR))?;

        let token = get(TOKEN_VAR).unwrap_or_default();

        let filter_game_id = match get(FILTER_VAR) {
            Some(value) => Some(
                value
                    .parse::<i64>()
                    .map_err(|_| ConfigError::InvalidGameId { var: FILTER_VAR, value: value.clone() })?,
            ),
            None => None,
        };

        let timezone = match get(TIMEZONE_VAR) {
            Some(value) => value
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone { var: TIMEZONE_VAR, value: value.clone() })?,
            None => chrono_tz::UTC,
        };

        Ok(Config { api_url, token, filter_game_id, timezone })
    }
}
