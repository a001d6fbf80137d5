//! Exponential backoff for outbound forecast requests.
//!
//! Transient failures (timeouts, connection errors, 5xx, 408 and 429) are
//! retried by `RetryTransientMiddleware`; everything else is returned on the
//! first attempt.

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::settings::OpenMeteoSettings;

const MIN_BACKOFF: Duration = Duration::from_millis(1);

/// Backoff policy where the n-th retry waits about `backoff_factor * 2^n` seconds.
pub fn retry_policy(settings: &OpenMeteoSettings) -> ExponentialBackoff {
    let min = Duration::try_from_secs_f64(settings.backoff_factor.max(0.0))
        .unwrap_or(MIN_BACKOFF)
        .max(MIN_BACKOFF);
    let max = Duration::from_millis(settings.max_backoff_ms).max(min);

    ExponentialBackoff::builder()
        .retry_bounds(min, max)
        .base(2)
        .build_with_max_retries(settings.retries)
}

/// Wraps `client` with tracing and transient-failure retries.
pub fn with_retry(client: Client, settings: &OpenMeteoSettings) -> ClientWithMiddleware {
    ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy(
            settings,
        )))
        .build()
}
