use crate::observations::error::ObservationError;
use crate::observations::models::OpenMeteoResponse;
use crate::types::lat_lon::LatLon;
use crate::types::rainfall::RainfallObservation;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

pub const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";
const FORECAST_PATH: &str = "/v1/forecast";
pub const DEFAULT_RAINFALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches short-horizon precipitation for a coordinate from the Open-Meteo forecast API.
///
/// This client never fails: whatever goes wrong, [`RainfallClient::fetch`] falls back to
/// [`RainfallObservation::unavailable`] so the assessment can carry on.
pub struct RainfallClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RainfallClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), FORECAST_PATH),
            timeout,
        }
    }

    /// Precipitation for the first hour of the forecast at `location`, or `0.0`.
    pub async fn fetch(&self, location: LatLon) -> RainfallObservation {
        match self.try_fetch(location).await {
            Ok(millimetres) => RainfallObservation::forecast(millimetres),
            Err(e) => {
                warn!(
                    "Rainfall unavailable for {:?}, falling back to 0.0: {:?}",
                    location, e
                );
                RainfallObservation::unavailable()
            }
        }
    }

    async fn try_fetch(&self, location: LatLon) -> Result<f64, ObservationError> {
        let url = &self.endpoint;
        info!("Requesting hourly precipitation for {:?} from {}", location, url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("latitude", location.latitude().to_string()),
                ("longitude", location.longitude().to_string()),
                ("hourly", "precipitation".to_string()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ObservationError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    ObservationError::HttpStatus {
                        url: url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    ObservationError::NetworkRequest(url.clone(), e)
                });
            }
        };

        let body: OpenMeteoResponse = response
            .json()
            .await
            .map_err(|e| ObservationError::ResponseDecode(url.clone(), e))?;

        let millimetres =
            body.current_precipitation()
                .ok_or_else(|| ObservationError::IncompleteResponse {
                    url: url.clone(),
                    field: "hourly.precipitation",
                })?;
        debug!(
            "Rainfall {} mm for hour starting {:?}",
            millimetres,
            body.hourly.as_ref().and_then(|h| h.time.first())
        );
        Ok(millimetres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{rainfall_json, MockProvider, Reply, FORECAST_PATH as ROUTE};
    use crate::types::rainfall::RainfallSource;

    const CHENNAI: LatLon = LatLon(13.08, 80.27);

    #[tokio::test]
    async fn test_fetch_uses_first_hour() {
        let provider = MockProvider::start(vec![(ROUTE, Reply::ok(rainfall_json(0.4)))]).await;
        let client = RainfallClient::new(provider.base_url(), DEFAULT_RAINFALL_TIMEOUT);

        let rainfall = client.fetch(CHENNAI).await;

        assert_eq!(rainfall, RainfallObservation::forecast(0.4));
        let query = provider.last_query(ROUTE).unwrap_or_default();
        assert!(query.contains("latitude=13.08"), "query was {}", query);
        assert!(query.contains("longitude=80.27"));
        assert!(query.contains("hourly=precipitation"));
    }

    #[tokio::test]
    async fn test_timeout_falls_back_to_zero() {
        let provider = MockProvider::start(vec![(ROUTE, Reply::Stall)]).await;
        let client = RainfallClient::new(provider.base_url(), Duration::from_millis(200));

        let started = std::time::Instant::now();
        let rainfall = client.fetch(CHENNAI).await;

        assert_eq!(rainfall.millimetres, 0.0);
        assert_eq!(rainfall.source, RainfallSource::Unavailable);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_http_error_falls_back_to_zero() {
        let provider = MockProvider::start(vec![(
            ROUTE,
            Reply::Json {
                status: 500,
                body: rainfall_json(3.0),
            },
        )])
        .await;
        let client = RainfallClient::new(provider.base_url(), DEFAULT_RAINFALL_TIMEOUT);

        assert_eq!(client.fetch(CHENNAI).await, RainfallObservation::unavailable());
    }

    #[tokio::test]
    async fn test_missing_series_falls_back_to_zero() {
        let provider = MockProvider::start(vec![(
            ROUTE,
            Reply::ok(r#"{"latitude": 13.08, "longitude": 80.27, "hourly_units": {}}"#),
        )])
        .await;
        let client = RainfallClient::new(provider.base_url(), DEFAULT_RAINFALL_TIMEOUT);

        assert!(!client.fetch(CHENNAI).await.is_available());
    }

    #[tokio::test]
    async fn test_unreachable_provider_falls_back_to_zero() {
        // Bind and drop a listener to get a port nothing is serving on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        let addr = listener.local_addr().expect("No local address");
        drop(listener);
        let client = RainfallClient::new(&format!("http://{}", addr), DEFAULT_RAINFALL_TIMEOUT);

        assert_eq!(client.fetch(CHENNAI).await, RainfallObservation::unavailable());
    }
}
