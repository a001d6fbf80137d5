use std::fmt::Display;

use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("city not found")]
    NotFound,
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal(String),
}

impl WeatherError {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Transport failure; the cause is logged, not surfaced.
    pub fn unavailable(service: &str, cause: impl Display) -> Self {
        tracing::warn!("{service} request failed: {cause}");
        Self::Upstream(format!("{service} service is unavailable"))
    }

    /// Undecodable upstream body; the cause is logged, not surfaced.
    pub fn invalid_response(service: &str, cause: impl Display) -> Self {
        tracing::warn!("invalid {service} response: {cause}");
        Self::Upstream(format!("{service} service returned an invalid response"))
    }
}

impl ResponseError for WeatherError {
    fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::NotFound => StatusCode::NOT_FOUND,
            WeatherError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WeatherError::Upstream(_) | WeatherError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            WeatherError::Internal(cause) => tracing::error!("internal error: {cause}"),
            WeatherError::Upstream(msg) => tracing::warn!("upstream error: {msg}"),
            WeatherError::NotFound | WeatherError::BadRequest(_) => {}
        }

        let error = ErrorResponse {
            detail: self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(&error)
    }
}
