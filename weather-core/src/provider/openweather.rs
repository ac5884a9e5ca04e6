use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::debug;

use crate::{
    error::{ConfigError, WeatherError},
    fetcher::{Fetcher, RawResponse, ReqwestFetcher},
    model::WeatherResult,
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    /// Current-weather endpoint without query.
    endpoint: Url,
    fetcher: Arc<dyn Fetcher>,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_fetcher(api_key, Arc::new(ReqwestFetcher::new()))
    }

    pub fn with_fetcher(api_key: String, fetcher: Arc<dyn Fetcher>) -> Self {
        let endpoint = endpoint_for(DEFAULT_BASE_URL)
            .expect("default OpenWeatherMap endpoint is a valid URL");

        Self { api_key, endpoint, fetcher }
    }

    /// Point the provider at another host serving the same API.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.endpoint = endpoint_for(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// `<base>/data/2.5/weather?q=<city>&units=metric&appid=<key>`, query values form-encoded.
    pub fn current_weather_url(&self, city: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("units", "metric")
            .append_pair("appid", &self.api_key);
        url
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        let url = self.current_weather_url(city);
        debug!(city, "requesting current weather from OpenWeatherMap");

        let RawResponse { status, body } =
            self.fetcher.get(url).await.map_err(WeatherError::Transport)?;

        if !status.is_success() {
            return Err(WeatherError::Upstream {
                status,
                body: body.unwrap_or_default(),
            });
        }

        let body = body.map_err(WeatherError::Transport)?;
        let parsed: Option<OwCurrentResponse> = serde_json::from_str(&body)?;

        Ok(parsed.unwrap_or_default().into())
    }
}

fn endpoint_for(base_url: &str) -> Result<Url, <Url as std::str::FromStr>::Err> {
    let base = base_url.trim_end_matches('/');
    format!("{base}{CURRENT_WEATHER_PATH}").parse()
}

// Missing fields and explicit nulls decode to zero values; wrong types are still errors.

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    #[serde(deserialize_with = "null_as_default")]
    temp: f64,
    #[serde(deserialize_with = "null_as_default")]
    humidity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pressure: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    #[serde(deserialize_with = "null_as_default")]
    description: String,
    #[serde(deserialize_with = "null_as_default")]
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwClouds {
    #[serde(deserialize_with = "null_as_default")]
    all: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    main: OwMain,
    #[serde(deserialize_with = "null_as_default")]
    weather: Vec<OwWeather>,
    #[serde(deserialize_with = "null_as_default")]
    clouds: OwClouds,
}

impl From<OwCurrentResponse> for WeatherResult {
    fn from(parsed: OwCurrentResponse) -> Self {
        let (description, icon) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.description, w.icon))
            .unwrap_or_default();

        WeatherResult {
            city: parsed.name,
            temperature: parsed.main.temp,
            description,
            clouds: parsed.clouds.all,
            humidity: parsed.main.humidity,
            pressure: parsed.main.pressure,
            icon,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        self.fetch_weather(city).await
    }
}
