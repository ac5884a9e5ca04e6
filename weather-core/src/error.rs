use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error used for causes coming from a [`crate::Fetcher`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures while fetching and translating weather for a city.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request to OpenWeatherMap could not complete.
    #[error("failed to reach OpenWeatherMap: {0}")]
    Transport(#[source] BoxError),

    /// OpenWeatherMap answered with a non-success status.
    /// The message is the upstream body, verbatim.
    #[error("{body}")]
    Upstream { status: StatusCode, body: String },

    /// The upstream body did not match the expected shape.
    #[error("failed to decode OpenWeatherMap response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid OpenWeatherMap base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: <reqwest::Url as std::str::FromStr>::Err,
    },
}
