//! Wire shapes of the OpenWeather geocoding and 5-day forecast endpoints.
//!
//! Only the fields the transformation reads are declared; every declared
//! field is required, so a missing one fails at the parse boundary.

use serde::Deserialize;

/// One match of `/geo/1.0/direct`.
#[derive(Debug, Deserialize)]
pub(crate) struct OwGeoMatch {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwCity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWeather {
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwMain {
    /// Kelvin
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWind {
    pub speed: f64,
}

/// One 3-hour slice of the forecast series.
#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastEntry {
    pub dt: i64,
    /// `YYYY-MM-DD HH:MM:SS`, UTC
    pub dt_txt: String,
    pub weather: Vec<OwWeather>,
    pub main: OwMain,
    pub wind: OwWind,
}

/// Body of `/data/2.5/forecast`.
#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastResponse {
    pub city: OwCity,
    pub list: Vec<OwForecastEntry>,
}
