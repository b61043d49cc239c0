//! Reshapes a decoded forecast series into a [`WeatherResult`].

use chrono::DateTime;

use super::response::{OwForecastEntry, OwForecastResponse};
use crate::{
    error::WeatherError,
    model::{WeatherRecord, WeatherResult},
};

const NOON_SLOT_SUFFIX: &str = " 12:00:00";
const DATE_FORMAT: &str = "%m/%d/%Y";

/// `(K - 273.15) * 9/5 + 32`, rounded to two decimals.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    let fahrenheit = (kelvin - 273.15) * 9.0 / 5.0 + 32.0;
    (fahrenheit * 100.0).round() / 100.0
}

/// True for the midday sample of a `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// Exact suffix match: a series that is not aligned to 3-hour UTC
/// boundaries may yield zero matches for a day.
pub fn is_noon_slot(dt_txt: &str) -> bool {
    dt_txt.ends_with(NOON_SLOT_SUFFIX)
}

/// Current conditions from the first entry, then every noon-slot entry in
/// series order. The first entry is used for current conditions whether or
/// not it is itself a noon slot.
pub(crate) fn build_weather_result(
    response: &OwForecastResponse,
) -> Result<WeatherResult, WeatherError> {
    let first = response
        .list
        .first()
        .ok_or_else(|| WeatherError::ForecastDecode("forecast list is empty".to_string()))?;

    let current = to_record(&response.city.name, first)?;

    let forecast = response
        .list
        .iter()
        .filter(|entry| is_noon_slot(&entry.dt_txt))
        .map(|entry| to_record(&current.city, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WeatherResult::new(current, forecast))
}

fn to_record(city: &str, entry: &OwForecastEntry) -> Result<WeatherRecord, WeatherError> {
    let condition = entry.weather.first().ok_or_else(|| {
        WeatherError::ForecastDecode(format!("entry {} has no weather condition", entry.dt_txt))
    })?;

    Ok(WeatherRecord {
        city: city.to_string(),
        date: format_date(entry.dt)?,
        icon: condition.icon.clone(),
        icon_description: condition.description.clone(),
        temp_f: kelvin_to_fahrenheit(entry.main.temp),
        humidity: entry.main.humidity,
        wind_speed: entry.wind.speed,
    })
}

fn format_date(ts: i64) -> Result<String, WeatherError> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .ok_or_else(|| WeatherError::ForecastDecode(format!("timestamp {ts} is out of range")))
}
