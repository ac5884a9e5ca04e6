//! Core library for the `weather-proxy` service.
//!
//! This crate defines:
//! - Process configuration
//! - The outbound HTTP capability (`Fetcher`) and its reqwest implementation
//! - The OpenWeatherMap translator behind the `WeatherProvider` trait
//! - The `WeatherResult` shape served to clients
//!
//! It is used by `weather-proxy`, but has no dependency on any HTTP server.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{BoxError, ConfigError, WeatherError};
pub use fetcher::{Fetcher, RawResponse, ReqwestFetcher};
pub use model::WeatherResult;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
