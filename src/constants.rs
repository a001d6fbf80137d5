/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-api/0.1.0";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Number of hourly points returned to the client
pub const HOURLY_FORECAST_LEN: usize = 24;

/// Current variables requested from the forecast API.
///
/// Each name must match a `serde(rename)` on `OpenMeteoCurrent`.
pub const CURRENT_VARIABLES: [&str; 4] = [
    "temperature_2m",
    "relative_humidity_2m",
    "wind_speed_10m",
    "weather_code",
];

/// Hourly variable requested from the forecast API
pub const HOURLY_VARIABLE: &str = "temperature_2m";

/// Fallback hourly interval when the series is too short to infer one
pub const DEFAULT_HOURLY_INTERVAL_SECS: i64 = 3600;
