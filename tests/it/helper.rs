use weather_api::{settings::Settings, startup::App};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestHelper {
    pub address: String,
    pub upstream: MockServer,
    client: reqwest::Client,
}

impl TestHelper {
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;

        let settings: Settings = Settings::builder()
            .unwrap()
            .set_override("api.ip", "127.0.0.1")
            .unwrap()
            .set_override("api.port", 0)
            .unwrap()
            .set_override("api.num_workers", 1)
            .unwrap()
            .set_override("open_meteo.geocoding_url", upstream.uri())
            .unwrap()
            .set_override("open_meteo.forecast_url", upstream.uri())
            .unwrap()
            .set_override("open_meteo.retries", 2)
            .unwrap()
            .set_override("open_meteo.backoff_factor", 0.001)
            .unwrap()
            .set_override("open_meteo.cache_ttl_secs", 0)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let app = App::build(&settings).unwrap();
        let address = format!("http://127.0.0.1:{}", app.port());
        tokio::spawn(app.run());

        TestHelper {
            address,
            upstream,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_weather(&self, city: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/weather", self.address))
            .query(&[("city", city)])
            .send()
            .await
            .unwrap()
    }

    pub async fn mock_geocoding(&self, city: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("name", city))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.upstream)
            .await;
    }

    pub async fn mock_geocoding_response(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(response)
            .mount(&self.upstream)
            .await;
    }

    pub async fn mock_forecast(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.upstream)
            .await;
    }
}

pub fn geocoding_match(latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "results": [
            {"id": 2988507, "name": "Paris", "latitude": latitude, "longitude": longitude}
        ],
        "generationtime_ms": 0.9
    })
}

pub fn forecast(weather_code: i32, hours: usize) -> serde_json::Value {
    let time: Vec<i64> = (0..hours as i64).map(|i| 1_700_000_000 + i * 3600).collect();
    let temperature: Vec<f64> = (0..hours).map(|i| 10.0 + i as f64).collect();

    serde_json::json!({
        "latitude": 48.86,
        "longitude": 2.3399997,
        "current": {
            "time": 1_700_000_000,
            "interval": 900,
            "temperature_2m": 15.2,
            "relative_humidity_2m": 60,
            "wind_speed_10m": 10.5,
            "weather_code": weather_code
        },
        "hourly": {
            "time": time,
            "temperature_2m": temperature
        }
    })
}
