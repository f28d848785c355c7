//! A tiny HTTP server answering provider requests with canned JSON, for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub const WEATHER_PATH: &str = "/data/2.5/weather";
pub const FORECAST_PATH: &str = "/v1/forecast";

#[derive(Debug, Clone)]
pub enum Reply {
    Json { status: u16, body: String },
    /// Accept the request and never answer.
    Stall,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Reply::Json {
            status: 200,
            body: body.into(),
        }
    }
}

#[derive(Default)]
struct Requests {
    hits: HashMap<String, usize>,
    queries: HashMap<String, String>,
}

pub struct MockProvider {
    base_url: String,
    requests: Arc<Mutex<Requests>>,
    handle: JoinHandle<()>,
}

impl MockProvider {
    pub async fn start(routes: Vec<(&'static str, Reply)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock provider");
        let addr = listener.local_addr().expect("Mock provider has no address");
        let routes: Arc<HashMap<&'static str, Reply>> = Arc::new(routes.into_iter().collect());
        let requests = Arc::new(Mutex::new(Requests::default()));

        let handle = tokio::spawn({
            let requests = requests.clone();
            async move {
                while let Ok((stream, _)) = listener.accept().await {
                    tokio::spawn(serve(stream, routes.clone(), requests.clone()));
                }
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hits(&self, path: &str) -> usize {
        let requests = self.requests.lock().expect("Mock provider lock poisoned");
        requests.hits.get(path).copied().unwrap_or(0)
    }

    pub fn last_query(&self, path: &str) -> Option<String> {
        let requests = self.requests.lock().expect("Mock provider lock poisoned");
        requests.queries.get(path).cloned()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: Arc<HashMap<&'static str, Reply>>,
    requests: Arc<Mutex<Requests>>,
) {
    let mut buffer = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buffer);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let (path, query) = target.split_once('?').unwrap_or((target.as_str(), ""));

    {
        let mut requests = requests.lock().expect("Mock provider lock poisoned");
        *requests.hits.entry(path.to_string()).or_default() += 1;
        requests
            .queries
            .insert(path.to_string(), query.to_string());
    }

    let (status, body) = match routes.get(path) {
        Some(Reply::Json { status, body }) => (*status, body.clone()),
        Some(Reply::Stall) => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            return;
        }
        None => (404, r#"{"error": "no route"}"#.to_string()),
    };

    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

pub fn weather_json(temp: f64, humidity: f64, wind: f64, lat: f64, lon: f64) -> String {
    format!(
        r#"{{"coord": {{"lon": {lon}, "lat": {lat}}},
            "weather": [{{"id": 500, "main": "Rain", "description": "light rain"}}],
            "main": {{"temp": {temp}, "humidity": {humidity}}},
            "wind": {{"speed": {wind}}},
            "dt": 1750000000,
            "name": "Chennai",
            "cod": 200}}"#
    )
}

pub fn weather_not_found_json() -> String {
    r#"{"cod": "404", "message": "city not found"}"#.to_string()
}

pub fn rainfall_json(first_hour_mm: f64) -> String {
    format!(
        r#"{{"latitude": 13.08, "longitude": 80.27,
            "hourly": {{"time": ["2025-06-15T00:00", "2025-06-15T01:00"],
                        "precipitation": [{first_hour_mm}, 0.0]}}}}"#
    )
}
