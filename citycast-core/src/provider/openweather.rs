use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, error, info};

use crate::{
    error::WeatherError,
    model::{Coordinates, WeatherResult},
};

use super::WeatherProvider;

mod response;
mod transform;

pub use transform::{is_noon_slot, kelvin_to_fahrenheit};

use response::{OwForecastResponse, OwGeoMatch};

const GEOCODE_PATH: &str = "/geo/1.0/direct";
const FORECAST_PATH: &str = "/data/2.5/forecast";

/// OpenWeather geocoding + 5-day/3-hour forecast.
///
/// Holds only immutable settings, so one instance can serve concurrent
/// lookups for different cities.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Resolve a city name to the coordinates of the geocoder's first match.
    pub async fn resolve_location(&self, city: &str) -> Result<Coordinates, WeatherError> {
        if city.trim().is_empty() {
            return Err(WeatherError::InvalidQuery);
        }

        info!("Fetching location data for city: {}", city);

        let res = self
            .http
            .get(self.endpoint(GEOCODE_PATH))
            .query(&[("q", city), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| WeatherError::LookupTransport(e.to_string()))?;

        let body = read_success_body(res, "Geocoding")
            .await
            .map_err(WeatherError::LookupTransport)?;

        let matches: Vec<OwGeoMatch> = serde_json::from_str(&body).map_err(|e| {
            WeatherError::LookupTransport(format!("malformed geocoding response: {e}"))
        })?;

        let first = matches
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(city.to_string()))?;

        let coordinates = Coordinates { latitude: first.lat, longitude: first.lon };
        debug!("Resolved {} to {:?}", city, coordinates);
        Ok(coordinates)
    }

    /// Fetch the forecast series at `coordinates` and reshape it.
    pub async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherResult, WeatherError> {
        info!(
            "Fetching forecast for lat={} lon={}",
            coordinates.latitude, coordinates.longitude
        );

        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();

        let res = self
            .http
            .get(self.endpoint(FORECAST_PATH))
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::ForecastTransport(e.to_string()))?;

        let body = read_success_body(res, "Forecast")
            .await
            .map_err(WeatherError::ForecastTransport)?;

        let parsed: OwForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::ForecastDecode(e.to_string()))?;

        debug!(
            "Forecast for {} has {} entries",
            parsed.city.name,
            parsed.list.len()
        );

        transform::build_weather_result(&parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather_for_city(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        let coordinates = self.resolve_location(city).await?;
        self.fetch_forecast(coordinates).await
    }
}

/// Body of a 2xx response, or the status text plus a truncated body.
async fn read_success_body(res: Response, what: &str) -> Result<String, String> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| format!("Failed to read {what} response body: {e}"))?;

    if !status.is_success() {
        error!("{} request failed with status {}", what, status);
        let reason = status.canonical_reason().unwrap_or("Unknown status");
        return Err(format!("{reason} ({}): {}", status.as_u16(), truncate_body(&body)));
    }

    Ok(body)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
