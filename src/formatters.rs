use chrono::{DateTime, Utc};

use crate::constants::HOURLY_FORECAST_LEN;
use crate::models::{CurrentConditions, HourlyForecast, HourlyPoint, WeatherReport};

/// Builds the public report from the resolved city and fetched forecast
pub fn shape(city: &str, current: CurrentConditions, hourly: &[HourlyPoint]) -> WeatherReport {
    WeatherReport {
        city: capitalize(city),
        temperature: current.temperature,
        humidity: current.humidity,
        wind_speed: current.wind_speed,
        description: weather_code_to_description(current.weather_code).to_string(),
        hourly_forecast: hourly
            .iter()
            .take(HOURLY_FORECAST_LEN)
            .map(|point| HourlyForecast {
                time: format_timestamp(point.time),
                temperature: point.temperature,
            })
            .collect(),
    }
}

/// Converts WMO weather code to human-readable description
pub fn weather_code_to_description(code: i32) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        51 => "Light drizzle",
        61 => "Light rain",
        71 => "Light snow",
        80 => "Rain shower",
        _ => "Unknown",
    }
}

/// Title-cases the first character and lower-cases the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(s.len());
    match titlecase_digraph(first) {
        Some(title) => out.push(title),
        None => out.extend(first.to_uppercase()),
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Latin digraphs whose title case differs from their upper case.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        _ => None,
    }
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}
