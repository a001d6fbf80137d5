use actix_web::web;

use crate::error::WeatherError;
use crate::models::{WeatherQuery, WeatherReport};
use crate::service::Weather;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        WeatherError::BadRequest(err.to_string()).into()
    }))
    .route("/weather", web::get().to(weather));
}

#[tracing::instrument(skip(service))]
pub async fn weather(
    service: web::Data<Weather>,
    params: web::Query<WeatherQuery>,
) -> Result<web::Json<WeatherReport>, WeatherError> {
    tracing::info!("requesting weather for city: {}", params.city);

    let report = service.report(&params.city).await?;

    Ok(web::Json(report))
}
