use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, web, HttpServer};

use crate::{routes, service::Weather, settings::Settings};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub fn build(settings: &Settings) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(settings.api.listener_address())?;
        let port = listener.local_addr()?.port();

        let weather = web::Data::new(Weather::new(&settings.open_meteo)?);

        let mut server = HttpServer::new(move || {
            actix_web::App::new()
                .wrap(Cors::permissive())
                .app_data(weather.clone())
                .configure(routes::configure)
        });

        if let Some(workers) = settings.api.num_workers {
            server = server.workers(workers);
        }

        let server = server.listen(listener)?.run();

        tracing::info!("listening on port {port}");

        Ok(App { server, port })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
