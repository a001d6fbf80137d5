use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HOURLY_INTERVAL_SECS;
use crate::error::WeatherError;

// ============================================================================
// Open-Meteo Geocoding API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Absent when the name matched nothing.
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Open-Meteo Forecast API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenMeteoForecast {
    #[serde(default)]
    pub current: Option<OpenMeteoCurrent>,
    #[serde(default)]
    pub hourly: Option<OpenMeteoHourly>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenMeteoCurrent {
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: Option<f64>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "weather_code")]
    pub weather_code: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenMeteoHourly {
    /// Unix seconds, requested with `timeformat=unixtime`.
    #[serde(default)]
    pub time: Vec<i64>,
    #[serde(rename = "temperature_2m", default)]
    pub temperature: Vec<Option<f64>>,
}

// ============================================================================
// Domain Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
}

impl CurrentConditions {
    /// Builds the current conditions, substituting zero for absent values.
    ///
    /// Returns the names of the variables that were missing alongside.
    pub fn from_wire(current: Option<OpenMeteoCurrent>) -> (Self, Vec<&'static str>) {
        let current = current.unwrap_or_default();
        let mut missing = Vec::new();

        let mut take = |value: Option<f64>, name: &'static str| {
            value.unwrap_or_else(|| {
                missing.push(name);
                0.0
            })
        };

        let temperature = take(current.temperature, "temperature_2m");
        let humidity = take(current.humidity, "relative_humidity_2m");
        let wind_speed = take(current.wind_speed, "wind_speed_10m");

        let weather_code = current.weather_code.unwrap_or_else(|| {
            missing.push("weather_code");
            0
        });

        (
            Self {
                temperature,
                humidity,
                wind_speed,
                weather_code,
            },
            missing,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyPoint {
    pub time: DateTime<Utc>,
    pub temperature: f64,
}

/// A fixed-interval hourly series covering `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    pub start: i64,
    pub end: i64,
    pub interval: i64,
    pub values: Vec<f64>,
}

impl HourlySeries {
    /// Derives the axis from the upstream time array.
    ///
    /// Fails when the times are too far apart to represent the series end.
    pub fn from_wire(hourly: OpenMeteoHourly) -> Result<Self, WeatherError> {
        let out_of_range = || WeatherError::upstream("hourly time axis is out of range");

        let start = hourly.time.first().copied().unwrap_or_default();
        let interval = match hourly.time.as_slice() {
            [first, second, ..] if second > first => {
                second.checked_sub(*first).ok_or_else(out_of_range)?
            }
            _ => DEFAULT_HOURLY_INTERVAL_SECS,
        };
        let end = i64::try_from(hourly.time.len())
            .ok()
            .and_then(|len| interval.checked_mul(len))
            .and_then(|span| start.checked_add(span))
            .ok_or_else(out_of_range)?;

        // Missing samples serialize as JSON null.
        let values = hourly
            .temperature
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();

        Ok(Self {
            start,
            end,
            interval,
            values,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Timestamps from `start` up to but excluding `end`.
    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        let interval = if self.interval > 0 {
            self.interval
        } else {
            DEFAULT_HOURLY_INTERVAL_SECS
        };
        let span = self
            .end
            .checked_sub(self.start)
            .filter(|span| *span > 0)
            .unwrap_or(0);
        let count = span / interval + i64::from(span % interval != 0);

        (0..count).map_while(move |i| {
            i.checked_mul(interval)
                .and_then(|offset| self.start.checked_add(offset))
        })
    }

    /// Pairs each timestamp with the sample at the same position.
    pub fn points(&self) -> Vec<HourlyPoint> {
        self.timestamps()
            .zip(self.values.iter())
            .filter_map(|(ts, temperature)| {
                DateTime::<Utc>::from_timestamp(ts, 0).map(|time| HourlyPoint {
                    time,
                    temperature: *temperature,
                })
            })
            .collect()
    }
}

// ============================================================================
// HTTP API Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct WeatherQuery {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HourlyForecast {
    pub time: String,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
    pub hourly_forecast: Vec<HourlyForecast>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
