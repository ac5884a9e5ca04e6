use serde::{Deserialize, Serialize};

/// Weather for one city, as served by the proxy.
///
/// `icon` is always present; it is empty when upstream reported no condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub clouds: i64,
    pub humidity: i64,
    pub pressure: i64,
    pub icon: String,
}
