use std::fmt::Write;

use citycast_core::{HistoryEntry, WeatherRecord, WeatherResult};

/// Current conditions block followed by one line per forecast day.
pub fn weather(result: &WeatherResult) -> String {
    let current = result.current();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", current.city, current.date);
    let _ = writeln!(out, "  {}", summary(current));

    if result.forecast().is_empty() {
        let _ = writeln!(out, "No daily forecast available.");
        return out;
    }

    let _ = writeln!(out, "Forecast:");
    for day in result.forecast() {
        let _ = writeln!(out, "  {}  {}", day.date, summary(day));
    }

    out
}

pub fn history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No searches yet.\n".to_string();
    }

    entries.iter().fold(String::new(), |mut out, entry| {
        let _ = writeln!(out, "{}  {}", entry.id, entry.name);
        out
    })
}

fn summary(record: &WeatherRecord) -> String {
    format!(
        "{:.2}°F, {} [{}], humidity {}%, wind {}",
        record.temp_f, record.icon_description, record.icon, record.humidity, record.wind_speed
    )
}
