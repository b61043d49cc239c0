//! Core library for the `citycast` CLI.
//!
//! This crate defines:
//! - City geocoding and forecast retrieval against OpenWeather
//! - Reshaping of the forecast series into current conditions + daily records
//! - Configuration & credentials handling
//! - Search history persistence
//!
//! It is used by `citycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use history::{HistoryEntry, HistoryStore, JsonHistoryStore};
pub use model::{Coordinates, WeatherRecord, WeatherResult};
pub use provider::{
    WeatherProvider,
    openweather::{OpenWeatherProvider, is_noon_slot, kelvin_to_fahrenheit},
    provider_from_config,
};
