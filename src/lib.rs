//! HTTP backend that resolves a city with Open-Meteo geocoding and returns
//! its current weather together with a 24 hour temperature forecast.

#![deny(rust_2018_idioms)]

pub mod cache;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod retry;
pub mod routes;
pub mod service;
pub mod settings;
pub mod startup;

pub use error::WeatherError;
pub use models::{HourlyForecast, WeatherReport};
pub use service::Weather;
