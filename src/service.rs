use reqwest::{Client, Url};
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;

use crate::cache::ResponseCache;
use crate::constants::{CURRENT_VARIABLES, HOURLY_FORECAST_LEN, HOURLY_VARIABLE, USER_AGENT};
use crate::error::WeatherError;
use crate::formatters::shape;
use crate::models::{
    CurrentConditions, GeoCoordinate, GeocodingResponse, HourlyPoint, HourlySeries,
    OpenMeteoForecast, WeatherReport,
};
use crate::retry::with_retry;
use crate::settings::OpenMeteoSettings;

/// Weather service shared by every request handler
#[derive(Debug)]
pub struct Weather {
    client: Client,
    /// Forecast calls only; geocoding is never retried.
    forecast_client: ClientWithMiddleware,
    settings: OpenMeteoSettings,
    cache: ResponseCache,
}

impl Weather {
    /// Creates the service and its HTTP client
    pub fn new(settings: &OpenMeteoSettings) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| WeatherError::internal(format!("failed to build http client: {e}")))?;

        Ok(Self {
            forecast_client: with_retry(client.clone(), settings),
            client,
            cache: ResponseCache::new(settings.cache_ttl()),
            settings: settings.clone(),
        })
    }

    /// Makes a single HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(
        &self,
        url: Url,
        service: &str,
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::unavailable(service, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::upstream(format!(
                "{service} request failed with status: {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::invalid_response(service, e))
    }

    /// Resolves a city name to the coordinates of its first geocoding match
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, city: &str) -> Result<GeoCoordinate, WeatherError> {
        let url = Url::parse_with_params(
            &format!("{}/search", self.settings.geocoding_url),
            &[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ],
        )
        .map_err(|e| WeatherError::internal(format!("invalid geocoding url: {e}")))?;

        let geocoding: GeocodingResponse = self.make_request(url, "geocoding").await?;

        let result = geocoding
            .results
            .into_iter()
            .next()
            .ok_or(WeatherError::NotFound)?;

        tracing::debug!(
            "geocoded '{}' as {:?}",
            city,
            result.name.as_deref().unwrap_or("<unnamed>")
        );

        Ok(GeoCoordinate {
            latitude: result.latitude,
            longitude: result.longitude,
        })
    }

    /// Fetches current conditions and up to 24 hourly temperatures
    #[tracing::instrument(skip(self))]
    pub async fn fetch(
        &self,
        coord: GeoCoordinate,
    ) -> Result<(CurrentConditions, Vec<HourlyPoint>), WeatherError> {
        let url = Url::parse_with_params(
            &format!("{}/forecast", self.settings.forecast_url),
            &[
                ("latitude", coord.latitude.to_string()),
                ("longitude", coord.longitude.to_string()),
                ("current", CURRENT_VARIABLES.join(",")),
                ("hourly", HOURLY_VARIABLE.to_string()),
                ("timeformat", "unixtime".to_string()),
            ],
        )
        .map_err(|e| WeatherError::internal(format!("invalid forecast url: {e}")))?;

        let forecast = self.forecast_response(url).await?;

        let (current, missing) = CurrentConditions::from_wire(forecast.current);
        if !missing.is_empty() {
            tracing::warn!(?missing, "forecast response lacks current values, using zero");
        }

        let series = HourlySeries::from_wire(forecast.hourly.unwrap_or_default())?;
        if series.is_empty() {
            return Err(WeatherError::upstream("no hourly temperature data"));
        }

        let mut hourly = series.points();
        if hourly.is_empty() {
            return Err(WeatherError::upstream("hourly time axis is empty"));
        }
        hourly.truncate(HOURLY_FORECAST_LEN);

        Ok((current, hourly))
    }

    /// Forecast body from the cache, or from upstream with retries
    async fn forecast_response(&self, url: Url) -> Result<OpenMeteoForecast, WeatherError> {
        let key = url.to_string();

        if let Some(body) = self.cache.get(&key).await {
            tracing::debug!("forecast cache hit");
            return serde_json::from_str(&body)
                .map_err(|e| WeatherError::invalid_response("forecast", e));
        }

        let response = self
            .forecast_client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::unavailable("forecast", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::upstream(format!(
                "forecast request failed with status: {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::unavailable("forecast", e))?;

        let forecast = serde_json::from_str(&body)
            .map_err(|e| WeatherError::invalid_response("forecast", e))?;

        self.cache.insert(key, body).await;

        Ok(forecast)
    }

    /// Resolve, fetch and shape the weather report for a city
    #[tracing::instrument(skip(self))]
    pub async fn report(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if city.trim().is_empty() {
            return Err(WeatherError::BadRequest("city must not be empty".into()));
        }

        let coord = self.resolve(city).await?;
        tracing::info!(
            "coordinates: lat={}, lon={}",
            coord.latitude,
            coord.longitude
        );

        let (current, hourly) = self.fetch(coord).await?;

        Ok(shape(city, current, &hourly))
    }
}
