//! Open-Meteo client.
//!
//! One GET per fetch, no retries, transport-default timeout. Failures map to
//! a small taxonomy: a non-success status hides the code behind a fixed
//! message, everything else surfaces the transport error verbatim.

use serde::Deserialize;
use thiserror::Error;

use crate::cities::City;
use crate::state::WeatherReading;

pub const OPEN_METEO_BASE: &str = "https://api.open-meteo.com";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with a non-success status.
    #[error("Weather data not found")]
    Status,
    /// Network failure or malformed response body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f32,
    weathercode: u8,
}

/// Client for the forecast endpoint.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_BASE)
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the current weather for a city.
    pub async fn current_weather(&self, city: &City) -> Result<WeatherReading, FetchError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.base_url, city.lat, city.lon
        );
        tracing::debug!(city = city.name, %url, "fetching current weather");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status);
        }

        let data: ForecastResponse = response.json().await?;
        let current = data.current_weather;
        Ok(WeatherReading {
            city: city.name.to_string(),
            temperature: current.temperature,
            weather_code: current.weathercode,
            description: describe_weather_code(current.weathercode),
        })
    }
}

/// Human-readable text for a WMO weather code.
pub fn describe_weather_code(code: u8) -> String {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown weather",
    }
    .to_string()
}
