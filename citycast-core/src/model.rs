use serde::{Deserialize, Serialize};

/// Geographic position returned by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One normalized weather sample.
///
/// `temp_f` is already in Fahrenheit, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub city: String,
    /// `MM/DD/YYYY`
    pub date: String,
    pub icon: String,
    pub icon_description: String,
    pub temp_f: f64,
    pub humidity: u8,
    pub wind_speed: f64,
}

/// Current conditions followed by one record per forecast day.
///
/// Serializes as a flat JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeatherResult(Vec<WeatherRecord>);

impl WeatherResult {
    pub fn new(current: WeatherRecord, forecast: Vec<WeatherRecord>) -> Self {
        let mut records = Vec::with_capacity(forecast.len() + 1);
        records.push(current);
        records.extend(forecast);
        Self(records)
    }

    pub fn current(&self) -> &WeatherRecord {
        &self.0[0]
    }

    pub fn forecast(&self) -> &[WeatherRecord] {
        &self.0[1..]
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a result carries at least the current record.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_records(self) -> Vec<WeatherRecord> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> WeatherRecord {
        WeatherRecord {
            city: "Boston".into(),
            date: date.into(),
            icon: "01d".into(),
            icon_description: "clear sky".into(),
            temp_f: 32.0,
            humidity: 80,
            wind_speed: 3.5,
        }
    }

    #[test]
    fn current_is_first_and_forecast_follows_in_order() {
        let result = WeatherResult::new(
            record("01/01/2024"),
            vec![record("01/02/2024"), record("01/03/2024")],
        );

        assert_eq!(result.len(), 3);
        assert_eq!(result.current().date, "01/01/2024");
        let dates: Vec<_> = result.forecast().iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["01/02/2024", "01/03/2024"]);
    }

    #[test]
    fn serializes_as_camel_case_array() {
        let result = WeatherResult::new(record("01/01/2024"), Vec::new());
        let json = serde_json::to_value(&result).expect("serialize");

        let first = &json.as_array().expect("array")[0];
        assert_eq!(first["iconDescription"], "clear sky");
        assert_eq!(first["tempF"], 32.0);
        assert_eq!(first["windSpeed"], 3.5);
    }
}
