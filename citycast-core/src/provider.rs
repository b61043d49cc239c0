use crate::{Config, WeatherError, WeatherResult, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of city weather: geocode, fetch, reshape.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve `city` and return current conditions followed by the daily
    /// forecast. Any stage failure is returned unchanged.
    async fn get_weather_for_city(&self, city: &str) -> Result<WeatherResult, WeatherError>;
}

/// Construct the provider from resolved configuration.
///
/// Credentials are passed through as-is; an empty key surfaces later as a
/// provider transport error.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(
        config.base_url.clone(),
        config.api_key.clone(),
    ))
}
