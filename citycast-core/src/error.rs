use thiserror::Error;

/// Failures of a single city weather lookup.
///
/// Every variant is terminal for the request that produced it; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The city name was empty when the lookup started.
    #[error("City name is not set")]
    InvalidQuery,

    /// The geocoding request failed or returned a non-success status.
    #[error("Location data fetch failed: {0}")]
    LookupTransport(String),

    /// The geocoder answered successfully but returned no matches.
    #[error("No location found for '{0}'")]
    LocationNotFound(String),

    /// The forecast request failed or returned a non-success status.
    #[error("Weather data fetch failed: {0}")]
    ForecastTransport(String),

    /// The forecast body could not be decoded into the expected shape.
    #[error("Failed to decode forecast response: {0}")]
    ForecastDecode(String),
}
