use crate::{WeatherError, WeatherResult};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current weather for `city`. Callers reject empty input beforehand.
    async fn get_weather(&self, city: &str) -> Result<WeatherResult, WeatherError>;
}
