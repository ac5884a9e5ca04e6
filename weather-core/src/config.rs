use std::env;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OpenWeatherMap credential; forwarded as-is, even when empty.
    pub api_key: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_key: String::new(), port: DEFAULT_PORT }
    }
}

impl Config {
    /// Load from `API_KEY` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// An unset or empty `PORT` falls back to [`DEFAULT_PORT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY").unwrap_or_default();

        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { api_key, port })
    }
}
